//! Delete confirmation.
//!
//! Deleting a recipe asks a [`Confirm`] implementation first. The call is
//! synchronous: the delete does not proceed until it returns.

use crate::recipe::Recipe;

/// Asks the user whether a recipe may be deleted.
pub trait Confirm {
    /// Return `true` to proceed with deleting `recipe`.
    fn confirm(&mut self, recipe: &Recipe) -> bool;
}

/// A fixed answer.
impl Confirm for bool {
    fn confirm(&mut self, _recipe: &Recipe) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&Recipe) -> bool,
{
    fn confirm(&mut self, recipe: &Recipe) -> bool {
        self(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeId;

    fn recipe() -> Recipe {
        Recipe::new(RecipeId::new("1"), "Pão", "Farinha", "Assar")
    }

    #[test]
    fn test_bool_confirm() {
        assert!(true.confirm(&recipe()));
        assert!(!false.confirm(&recipe()));
    }

    #[test]
    fn test_closure_confirm_sees_recipe() {
        let mut seen = Vec::new();
        let mut prompt = |r: &Recipe| {
            seen.push(r.title.clone());
            false
        };

        assert!(!prompt.confirm(&recipe()));
        assert_eq!(seen, vec!["Pão".to_string()]);
    }
}
