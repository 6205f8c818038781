//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the recipe to show
    pub id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Add command arguments.
///
/// A field given as `-` is read from stdin.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Recipe title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Ingredients (use `-` to read from stdin)
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// Preparation steps (use `-` to read from stdin)
    #[arg(short, long)]
    pub preparation: Option<String>,
}

/// Edit command arguments.
///
/// Fields that are not given keep their current value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Id of the recipe to edit
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New ingredients (use `-` to read from stdin)
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// New preparation steps (use `-` to read from stdin)
    #[arg(short, long)]
    pub preparation: Option<String>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the recipe to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_edit_command_debug() {
        let cmd = EditCommand {
            id: "1718000000000".to_string(),
            title: Some("Soup".to_string()),
            ingredients: None,
            preparation: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("1718000000000"));
        assert!(debug_str.contains("Soup"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
