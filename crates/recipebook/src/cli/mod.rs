//! Command-line interface for recipebook.
//!
//! This module provides the CLI structure, terminal prompts, and plain-text
//! rendering for the `recipes` binary.

mod commands;
mod prompt;

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, EditCommand, ListCommand, OutputFormat,
    ShowCommand,
};
pub use prompt::{read_field, read_fields, TerminalConfirm};

use crate::recipe::Recipe;

/// recipes - A personal recipe book
///
/// Store, list, edit, and delete your recipes. Everything is kept in a local
/// store on this machine.
#[derive(Debug, Parser)]
#[command(name = "recipes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all recipes
    List(ListCommand),

    /// Show one recipe
    Show(ShowCommand),

    /// Add a new recipe
    Add(AddCommand),

    /// Edit an existing recipe
    Edit(EditCommand),

    /// Delete a recipe
    Delete(DeleteCommand),

    /// Print the persisted recipe list as JSON
    Export,

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Render one recipe as plain text.
#[must_use]
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", recipe.title, recipe.id);
    let _ = writeln!(out, "  Ingredients");
    for line in recipe.ingredients.lines() {
        let _ = writeln!(out, "    {line}");
    }
    let _ = writeln!(out, "  Preparation");
    for line in recipe.preparation.lines() {
        let _ = writeln!(out, "    {line}");
    }
    out
}

/// Render a recipe list as plain text.
#[must_use]
pub fn render_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes yet.\n".to_string();
    }
    recipes
        .iter()
        .map(render_recipe)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeId;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Export,
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "recipes");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["recipes", "list", "--format", "json"]).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "recipes",
            "add",
            "--title",
            "Bolo",
            "-i",
            "-",
            "-p",
            "Assar",
        ])
        .unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.title.as_deref(), Some("Bolo"));
                assert_eq!(cmd.ingredients.as_deref(), Some("-"));
                assert_eq!(cmd.preparation.as_deref(), Some("Assar"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_edit_partial() {
        let cli = Cli::try_parse_from(["recipes", "edit", "42", "--title", "New"]).unwrap();
        match cli.command {
            Command::Edit(cmd) => {
                assert_eq!(cmd.id, "42");
                assert_eq!(cmd.title.as_deref(), Some("New"));
                assert!(cmd.ingredients.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_yes() {
        let cli = Cli::try_parse_from(["recipes", "delete", "42", "-y"]).unwrap();
        assert!(matches!(cli.command, Command::Delete(DeleteCommand { yes: true, .. })));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["recipes", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["recipes", "config", "validate", "-f", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_render_recipe() {
        let recipe = Recipe::new(
            RecipeId::new("7"),
            "Pancakes",
            "1 egg\n1 cup flour",
            "Whisk.\nFry.",
        );

        assert_eq!(
            render_recipe(&recipe),
            "Pancakes [7]\n  Ingredients\n    1 egg\n    1 cup flour\n  Preparation\n    Whisk.\n    Fry.\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[]), "No recipes yet.\n");
    }

    #[test]
    fn test_render_list_separates_recipes() {
        let recipes = vec![
            Recipe::new(RecipeId::new("1"), "A", "a", "a"),
            Recipe::new(RecipeId::new("2"), "B", "b", "b"),
        ];

        let out = render_list(&recipes);
        assert!(out.contains("A [1]"));
        assert!(out.contains("\n\nB [2]"));
    }
}
