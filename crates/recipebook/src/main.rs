//! `recipes` - CLI for recipebook
//!
//! This binary is a command-line presentation layer over the recipe book
//! controller.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use recipebook::cli::{
    self, AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, OutputFormat,
    ShowCommand, TerminalConfirm,
};
use recipebook::{
    init_logging, open_store, Config, DeleteOutcome, KeyValueStore, RecipeBook, RecipeId,
    SubmitOutcome,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config;
    match cli.command {
        Command::List(cmd) => {
            let book = open_book(config_path)?;
            match cmd.format {
                OutputFormat::Plain => print!("{}", cli::render_list(book.recipes())),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book.recipes())?),
            }
            Ok(())
        }
        Command::Show(cmd) => handle_show(&open_book(config_path)?, &cmd),
        Command::Add(cmd) => handle_add(&mut open_book(config_path)?, cmd),
        Command::Edit(cmd) => handle_edit(&mut open_book(config_path)?, cmd),
        Command::Delete(cmd) => {
            handle_delete(&mut open_book(config_path)?, &cmd);
            Ok(())
        }
        Command::Export => {
            println!("{}", open_book(config_path)?.to_json()?);
            Ok(())
        }
        Command::Config(cmd) => handle_config(config_path, cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("failed to load configuration")
}

fn open_book(config_path: Option<PathBuf>) -> anyhow::Result<RecipeBook<Box<dyn KeyValueStore>>> {
    let config = load_config(config_path)?;
    let store = open_store(&config).context("failed to open recipe store")?;
    Ok(RecipeBook::load_with_key(store, config.storage_key()))
}

fn handle_show<S: KeyValueStore>(book: &RecipeBook<S>, cmd: &ShowCommand) -> anyhow::Result<()> {
    let id = RecipeId::new(cmd.id.as_str());
    let Some(recipe) = book.get(&id) else {
        bail!("no recipe with id {id}");
    };
    match cmd.format {
        OutputFormat::Plain => print!("{}", cli::render_recipe(recipe)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recipe)?),
    }
    Ok(())
}

fn handle_add<S: KeyValueStore>(book: &mut RecipeBook<S>, cmd: AddCommand) -> anyhow::Result<()> {
    let [title, ingredients, preparation] =
        cli::read_fields([cmd.title, cmd.ingredients, cmd.preparation], &mut io::stdin())?;

    book.begin_new();
    report_submit(book.submit_fields(
        title.unwrap_or_default(),
        ingredients.unwrap_or_default(),
        preparation.unwrap_or_default(),
    ));
    Ok(())
}

fn handle_edit<S: KeyValueStore>(book: &mut RecipeBook<S>, cmd: EditCommand) -> anyhow::Result<()> {
    let id = RecipeId::new(cmd.id);
    let [title, ingredients, preparation] =
        cli::read_fields([cmd.title, cmd.ingredients, cmd.preparation], &mut io::stdin())?;

    if book.begin_edit(&id).is_none() {
        bail!("no recipe with id {id}");
    }

    let draft = book.draft_mut();
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(ingredients) = ingredients {
        draft.ingredients = ingredients;
    }
    if let Some(preparation) = preparation {
        draft.preparation = preparation;
    }

    report_submit(book.submit());
    Ok(())
}

fn report_submit(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Created(id) => println!("{id}"),
        SubmitOutcome::Updated(id) => println!("Updated recipe {id}"),
        SubmitOutcome::StaleTarget(id) => println!("Recipe {id} no longer exists; nothing saved."),
        SubmitOutcome::Incomplete => {
            println!("Title, ingredients and preparation are required; nothing saved.");
        }
    }
}

fn handle_delete<S: KeyValueStore>(book: &mut RecipeBook<S>, cmd: &DeleteCommand) {
    let id = RecipeId::new(cmd.id.as_str());
    let outcome = if cmd.yes {
        book.delete(&id, &mut true)
    } else {
        book.delete(&id, &mut TerminalConfirm::stdio())
    };

    match outcome {
        DeleteOutcome::Deleted => println!("Deleted recipe {id}"),
        DeleteOutcome::Declined => println!("Kept recipe {id}"),
        DeleteOutcome::NotFound => println!("No recipe with id {id}"),
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Backend:            {}", config.storage.backend);
                println!("  Database path:      {}", config.database_path().display());
                println!("  Store directory:    {}", config.store_directory().display());
                println!("  Key:                {}", config.storage_key());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
