//! Terminal input helpers.

use std::io::{self, BufRead, Read, Write};

use crate::confirm::Confirm;
use crate::recipe::Recipe;

/// Yes/no delete confirmation on a terminal.
///
/// Anything other than `y` or `yes` (case-insensitive) declines, including
/// end of input and read errors.
#[derive(Debug)]
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl TerminalConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr and read the answer from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    /// Prompt on `output` and read answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, recipe: &Recipe) -> bool {
        if write!(self.output, "Delete recipe \"{}\"? [y/N] ", recipe.title)
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Resolve a field argument, reading all of `input` when it is `-`.
///
/// # Errors
///
/// Returns an error if `input` cannot be read.
pub fn read_field(value: Option<String>, input: &mut impl Read) -> io::Result<Option<String>> {
    match value {
        Some(v) if v == "-" => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            Ok(Some(buf.trim_end_matches('\n').to_string()))
        }
        other => Ok(other),
    }
}

/// Resolve several field arguments, at most one of which may be `-`.
///
/// Stdin can only be consumed once, so a second `-` is rejected before
/// anything is read.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] if more than one field is `-`,
/// or an error if `input` cannot be read.
pub fn read_fields<const N: usize>(
    fields: [Option<String>; N],
    input: &mut impl Read,
) -> io::Result<[Option<String>; N]> {
    let from_stdin = fields.iter().filter(|f| f.as_deref() == Some("-")).count();
    if from_stdin > 1 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "only one field can be read from stdin (`-`)",
        ));
    }

    let mut resolved = fields;
    for field in &mut resolved {
        *field = read_field(field.take(), input)?;
    }
    Ok(resolved)
}
