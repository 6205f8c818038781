//! `recipebook` - A personal recipe book backed by a local key-value store
//!
//! The [`RecipeBook`] controller owns the recipe list and the presentation
//! session, and mirrors the list into a [`KeyValueStore`] after every change.
//! Any presentation layer can drive it; the `recipes` binary is one.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod session;
pub mod store;

pub use config::Config;
pub use confirm::Confirm;
pub use controller::{DeleteOutcome, RecipeBook, SubmitOutcome};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use recipe::{Recipe, RecipeId};
pub use session::{Draft, Mode, Session, View};
pub use store::{open_store, FileStore, KeyValueStore, MemoryStore, SqliteStore};
