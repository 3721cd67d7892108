//! Category selection.
//!
//! `CategoryFilter` is either every category or an explicit subset of
//! names. The name `"All"` is the toggle shortcut for the first variant and
//! is reserved: no catalog category may use it.
//!
//! An empty subset means "nothing selected": the game cannot start, but the
//! question pool it describes is still the whole catalog, so counts shown
//! before starting stay meaningful.

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// Reserved name of the "every category" shortcut.
pub const ALL_CATEGORIES: &str = "All";

/// Which categories feed the question pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every category in the catalog.
    #[default]
    All,
    /// Only the named categories.
    Subset(OrdSet<String>),
}

impl CategoryFilter {
    /// Filter with nothing selected.
    #[must_use]
    pub fn none() -> Self {
        Self::Subset(OrdSet::new())
    }

    /// Filter selecting exactly the given names.
    pub fn subset<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Subset(names.into_iter().map(Into::into).collect())
    }

    /// Toggle a name.
    ///
    /// - `"All"` flips between `All` and the empty subset.
    /// - Any other name leaves `All` for a subset holding just that name,
    ///   or flips its membership in the current subset.
    pub fn toggle(&mut self, name: &str) {
        if name == ALL_CATEGORIES {
            *self = match self {
                Self::All => Self::none(),
                Self::Subset(_) => Self::All,
            };
            return;
        }

        match self {
            Self::All => *self = Self::subset([name]),
            Self::Subset(names) => {
                if names.remove(name).is_none() {
                    names.insert(name.to_string());
                }
            }
        }
    }

    /// Check if this is the `All` shortcut.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Subset(names) if names.is_empty())
    }

    /// Check if a category is explicitly selected (always true for `All`).
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Subset(names) => names.contains(name),
        }
    }

    /// Check if a category contributes to the question pool.
    ///
    /// `All` and the empty subset both pool every category.
    #[must_use]
    pub fn pools(&self, name: &str) -> bool {
        self.is_empty() || self.is_selected(name)
    }

    /// Explicitly selected names, sorted. Empty for `All`.
    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        let names = match self {
            Self::All => None,
            Self::Subset(names) => Some(names.iter().map(String::as_str)),
        };
        names.into_iter().flatten()
    }
}
