//! Presentation session state.
//!
//! The session holds everything a presentation layer needs to render the
//! recipe book besides the recipes themselves: the staged [`Draft`], the
//! current [`Mode`], and which [`View`] is showing. Transitions are explicit
//! methods; the controller drives them.

use serde::{Deserialize, Serialize};

use crate::recipe::{Recipe, RecipeId};

/// Staged, not-yet-saved field values for a create or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Staged title.
    pub title: String,
    /// Staged ingredients.
    pub ingredients: String,
    /// Staged preparation.
    pub preparation: String,
}

impl Draft {
    /// Create a draft from explicit field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        preparation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            preparation: preparation.into(),
        }
    }

    /// Stage the fields of an existing recipe.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self::new(
            recipe.title.clone(),
            recipe.ingredients.clone(),
            recipe.preparation.clone(),
        )
    }

    /// Whether all three fields are present.
    ///
    /// Presence only: whitespace counts as content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.ingredients.is_empty() && !self.preparation.is_empty()
    }

    /// Clear all staged fields.
    pub fn clear(&mut self) {
        self.title.clear();
        self.ingredients.clear();
        self.preparation.clear();
    }
}

/// What the user is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Looking at the recipe list.
    #[default]
    Browsing,
    /// Filling in the form, for a new recipe or for an existing one.
    Drafting {
        /// The recipe being edited, or `None` when creating.
        editing: Option<RecipeId>,
    },
}

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The recipe list.
    #[default]
    List,
    /// The draft form.
    Form,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Form => write!(f, "form"),
        }
    }
}

/// Controller-owned session state handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    mode: Mode,
    draft: Draft,
}

impl Session {
    /// Create a session in browsing mode with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The view matching the current mode.
    #[must_use]
    pub fn view(&self) -> View {
        match self.mode {
            Mode::Browsing => View::List,
            Mode::Drafting { .. } => View::Form,
        }
    }

    /// The staged draft.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the staged draft, for binding input fields.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// The recipe currently being edited, if any.
    #[must_use]
    pub fn editing_target(&self) -> Option<&RecipeId> {
        match &self.mode {
            Mode::Drafting { editing } => editing.as_ref(),
            Mode::Browsing => None,
        }
    }

    /// Browsing → drafting a new recipe.
    pub(crate) fn begin_new(&mut self) {
        self.draft.clear();
        self.mode = Mode::Drafting { editing: None };
    }

    /// Browsing → drafting an edit of `recipe`.
    pub(crate) fn begin_edit(&mut self, recipe: &Recipe) {
        self.draft = Draft::from_recipe(recipe);
        self.mode = Mode::Drafting {
            editing: Some(recipe.id.clone()),
        };
    }

    /// Drafting → browsing, discarding the draft and editing target.
    pub(crate) fn finish(&mut self) {
        self.draft.clear();
        self.mode = Mode::Browsing;
    }
}
