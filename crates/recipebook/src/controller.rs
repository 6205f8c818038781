//! The recipe store controller.
//!
//! [`RecipeBook`] owns the in-memory recipe list and the presentation
//! [`Session`], and mirrors the list into a [`KeyValueStore`] after every
//! mutation. All operations are synchronous and run to completion.
//!
//! Storage failures never escape: a failed read starts the book empty, a
//! failed write is logged and remembered in [`RecipeBook::last_write_error`]
//! while the in-memory list stays authoritative.

use tracing::{debug, error, info, warn};

use crate::confirm::Confirm;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::Error;
use crate::recipe::{self, IdGenerator, Recipe, RecipeId};
use crate::session::{Draft, Session, View};
use crate::store::KeyValueStore;

/// Result of [`RecipeBook::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new recipe was appended.
    Created(RecipeId),
    /// An existing recipe was replaced in place.
    Updated(RecipeId),
    /// The editing target no longer exists; nothing was changed.
    StaleTarget(RecipeId),
    /// At least one field was empty; nothing was changed.
    Incomplete,
}

impl SubmitOutcome {
    /// Whether the collection was mutated.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_))
    }
}

/// Result of [`RecipeBook::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The recipe was removed.
    Deleted,
    /// The user declined; nothing was changed.
    Declined,
    /// No recipe has that id.
    NotFound,
}

/// Recipe collection plus session state, backed by a key-value store.
#[derive(Debug)]
pub struct RecipeBook<S> {
    store: S,
    key: String,
    recipes: Vec<Recipe>,
    session: Session,
    ids: IdGenerator,
    last_write_error: Option<String>,
}

impl<S: KeyValueStore> RecipeBook<S> {
    /// Load the book from `store` under the default `"recipes"` key.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Load the book from `store` under `key`.
    ///
    /// An absent value starts the book empty. An unreadable or malformed
    /// value is logged and also starts the book empty.
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let recipes = match read_recipes(&store, &key) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Starting with an empty recipe book: {e}");
                Vec::new()
            }
        };
        info!("Loaded {} recipes from {}", recipes.len(), store.describe());

        Self {
            ids: IdGenerator::seeded_from(&recipes),
            store,
            key,
            recipes,
            session: Session::new(),
            last_write_error: None,
        }
    }

    /// The recipes in display order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id.
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book has no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether an existing recipe is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.editing_target().is_some()
    }

    /// Mutable access to the staged draft, for binding input fields.
    pub fn draft_mut(&mut self) -> &mut Draft {
        self.session.draft_mut()
    }

    /// Clear the staged input without leaving the current mode.
    pub fn reset_draft(&mut self) {
        self.session.draft_mut().clear();
    }

    /// The message of the most recent failed write, if the last write failed.
    #[must_use]
    pub fn last_write_error(&self) -> Option<&str> {
        self.last_write_error.as_deref()
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Start drafting a new recipe.
    pub fn begin_new(&mut self) {
        debug!("Drafting a new recipe");
        self.session.begin_new();
    }

    /// Start editing the recipe with `id`, staging its fields.
    ///
    /// Returns the staged draft, or `None` (and does nothing) if no recipe
    /// has that id.
    pub fn begin_edit(&mut self, id: &RecipeId) -> Option<&Draft> {
        let Some(recipe) = self.recipes.iter().find(|r| &r.id == id) else {
            debug!("Cannot edit unknown recipe {id}");
            return None;
        };
        debug!("Editing recipe {id}");
        self.session.begin_edit(recipe);
        Some(self.session.draft())
    }

    /// Discard the draft and return to the list without persisting.
    pub fn cancel(&mut self) {
        debug!("Draft discarded");
        self.session.finish();
    }

    /// Flip between the list and the form.
    ///
    /// Opening the form starts a new draft; closing it cancels the draft.
    pub fn toggle_view(&mut self) -> View {
        match self.session.view() {
            View::List => self.begin_new(),
            View::Form => self.cancel(),
        }
        self.session.view()
    }

    /// Save the staged draft.
    ///
    /// With no editing target a new recipe is appended; otherwise the target
    /// is replaced in place, keeping its id and position. An incomplete draft
    /// is a no-op that keeps the session as is. A stale editing target is
    /// ignored without touching the collection or the store.
    pub fn submit(&mut self) -> SubmitOutcome {
        let draft = self.session.draft();
        if !draft.is_complete() {
            debug!("Ignoring submit of incomplete draft");
            return SubmitOutcome::Incomplete;
        }

        let outcome = match self.session.editing_target().cloned() {
            None => {
                let recipe = Recipe::new(
                    self.ids.next_id(),
                    draft.title.clone(),
                    draft.ingredients.clone(),
                    draft.preparation.clone(),
                );
                let id = recipe.id.clone();
                self.recipes.push(recipe);
                info!("Created recipe {id}");
                SubmitOutcome::Created(id)
            }
            Some(id) => match self.recipes.iter().position(|r| r.id == id) {
                Some(index) => {
                    self.recipes[index] = Recipe::new(
                        id.clone(),
                        draft.title.clone(),
                        draft.ingredients.clone(),
                        draft.preparation.clone(),
                    );
                    info!("Updated recipe {id}");
                    SubmitOutcome::Updated(id)
                }
                None => {
                    warn!("Recipe {id} no longer exists; edit discarded");
                    SubmitOutcome::StaleTarget(id)
                }
            },
        };

        if outcome.is_saved() {
            self.persist();
        }
        self.session.finish();
        outcome
    }

    /// Stage the given fields and save them, as [`RecipeBook::submit`].
    ///
    /// The editing target of the current session, if any, is kept.
    pub fn submit_fields(
        &mut self,
        title: impl Into<String>,
        ingredients: impl Into<String>,
        preparation: impl Into<String>,
    ) -> SubmitOutcome {
        *self.session.draft_mut() = Draft::new(title, ingredients, preparation);
        self.submit()
    }

    /// Delete the recipe with `id` after asking `confirm`.
    ///
    /// Nothing is removed or written unless the confirmation is accepted.
    pub fn delete(&mut self, id: &RecipeId, confirm: &mut impl Confirm) -> DeleteOutcome {
        let Some(index) = self.recipes.iter().position(|r| &r.id == id) else {
            debug!("Cannot delete unknown recipe {id}");
            return DeleteOutcome::NotFound;
        };

        if !confirm.confirm(&self.recipes[index]) {
            debug!("Deletion of recipe {id} declined");
            return DeleteOutcome::Declined;
        }

        self.recipes.remove(index);
        info!("Deleted recipe {id}");
        if self.session.editing_target() == Some(id) {
            self.session.finish();
        }
        self.persist();
        DeleteOutcome::Deleted
    }

    /// The persisted form of the current collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        recipe::to_json(&self.recipes)
    }

    /// Overwrite the mirror with the full collection.
    fn persist(&mut self) {
        let result = self
            .to_json()
            .and_then(|value| self.store.set(&self.key, &value));

        match result {
            Ok(()) => {
                debug!("Persisted {} recipes", self.recipes.len());
                self.last_write_error = None;
            }
            Err(e) => {
                let e = match e {
                    Error::StorageWrite { .. } => e,
                    other => Error::storage_write(&self.key, other.to_string()),
                };
                error!("{e}");
                self.last_write_error = Some(e.to_string());
            }
        }
    }
}

fn read_recipes<S: KeyValueStore>(store: &S, key: &str) -> crate::Result<Vec<Recipe>> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(Vec::new()),
        Err(e @ Error::StorageRead { .. }) => return Err(e),
        Err(e) => return Err(Error::storage_read(key, e.to_string())),
    };
    recipe::from_json(&value).map_err(|e| Error::storage_read(key, e.to_string()))
}
