//! Core recipe types for recipebook.
//!
//! This module defines the [`Recipe`] record, its opaque [`RecipeId`], and
//! the [`IdGenerator`] that hands out timestamp-derived ids.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque identity of a recipe.
///
/// Ids are decimal renderings of a creation timestamp in milliseconds, but
/// callers must treat them as opaque strings. Ids loaded from storage are
/// kept verbatim even when they are not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The timestamp this id was derived from, if it is numeric.
    #[must_use]
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user-authored recipe.
///
/// The three text fields may contain embedded line breaks. They are only
/// ever replaced together; there are no partial-field updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identity of this recipe, immutable after creation.
    pub id: RecipeId,

    /// Recipe title.
    pub title: String,

    /// Free-text ingredient list.
    pub ingredients: String,

    /// Free-text preparation steps.
    pub preparation: String,
}

impl Recipe {
    /// Create a recipe with the given id and fields.
    #[must_use]
    pub fn new(
        id: RecipeId,
        title: impl Into<String>,
        ingredients: impl Into<String>,
        preparation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            ingredients: ingredients.into(),
            preparation: preparation.into(),
        }
    }
}

/// Serialize a recipe collection into its persisted JSON form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(recipes: &[Recipe]) -> Result<String> {
    Ok(serde_json::to_string(recipes)?)
}

/// Parse a recipe collection from its persisted JSON form.
///
/// # Errors
///
/// Returns an error if the value is not a JSON array of recipe objects.
pub fn from_json(value: &str) -> Result<Vec<Recipe>> {
    Ok(serde_json::from_str(value)?)
}

/// How far past the clock a loaded id may lie and still advance the
/// generator. Ids beyond this are reserved instead of followed.
const SEED_HORIZON_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Generator of strictly increasing, timestamp-derived recipe ids.
///
/// Each id is the current Unix time in milliseconds, bumped past the last
/// issued (or observed) id when the clock has not advanced. Observed ids
/// that are not numeric, or that lie more than a day in the future, are
/// only reserved: the generator skips them but does not jump ahead to them.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
    reserved: BTreeSet<RecipeId>,
    exhausted: u64,
}

impl IdGenerator {
    /// Create a generator with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that will never reissue any id in `recipes`.
    #[must_use]
    pub fn seeded_from(recipes: &[Recipe]) -> Self {
        Self::seeded_at(recipes, Utc::now().timestamp_millis())
    }

    /// Like [`IdGenerator::seeded_from`], as if the clock read `now_millis`.
    #[must_use]
    pub fn seeded_at(recipes: &[Recipe], now_millis: i64) -> Self {
        let mut generator = Self::new();
        for recipe in recipes {
            generator.observe_at(&recipe.id, now_millis);
        }
        generator
    }

    /// Record an existing id so it is never issued.
    pub fn observe(&mut self, id: &RecipeId) {
        self.observe_at(id, Utc::now().timestamp_millis());
    }

    /// Record an existing id as if the clock read `now_millis`.
    pub fn observe_at(&mut self, id: &RecipeId, now_millis: i64) {
        match id.as_millis() {
            Some(millis) if millis <= now_millis.saturating_add(SEED_HORIZON_MILLIS) => {
                self.last = self.last.max(millis);
            }
            _ => {
                self.reserved.insert(id.clone());
            }
        }
    }

    /// Issue the next id using the system clock.
    pub fn next_id(&mut self) -> RecipeId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Issue the next id as if the clock read `now_millis`.
    pub fn next_at(&mut self, now_millis: i64) -> RecipeId {
        let mut candidate = if now_millis > self.last {
            Some(now_millis)
        } else {
            self.last.checked_add(1)
        };

        while let Some(millis) = candidate {
            let id = RecipeId::from_millis(millis);
            self.last = millis;
            if !self.reserved.contains(&id) {
                return id;
            }
            candidate = millis.checked_add(1);
        }

        // The numeric range is used up; fall back to suffixed tokens.
        loop {
            self.exhausted += 1;
            let id = RecipeId::new(format!("{}-{}", self.last, self.exhausted));
            if !self.reserved.contains(&id) {
                return id;
            }
        }
    }
}
