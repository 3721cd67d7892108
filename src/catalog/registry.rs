//! The static question catalog.
//!
//! Loaded once at startup and shared read-only by the engine. Categories
//! keep their file order, which is also the order of the filtered pool.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::definition::{Category, Question};
use super::filter::{CategoryFilter, ALL_CATEGORIES};

/// Errors from loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("category at position {0} has an empty name")]
    EmptyName(usize),
    #[error("category {0:?} appears more than once")]
    DuplicateCategory(String),
    #[error("category name {0:?} is reserved")]
    ReservedName(String),
}

/// Ordered, validated set of categories.
///
/// ## Example
///
/// ```
/// use party_quiz::catalog::{Catalog, Category};
///
/// let catalog = Catalog::new(vec![
///     Category::new("Math", "➗").with_question("Is zero even?"),
/// ]).unwrap();
///
/// assert_eq!(catalog.total_questions(), 1);
/// assert!(catalog.get("Math").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty, duplicate or reserved names.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let index = Self::build_index(&categories)?;

        log::debug!(
            "Loaded catalog: {} categories, {} questions",
            categories.len(),
            categories.iter().map(|c| c.questions.len()).sum::<usize>()
        );

        Ok(Self { categories, index })
    }

    fn build_index(categories: &[Category]) -> Result<FxHashMap<String, usize>, CatalogError> {
        let mut index = FxHashMap::default();
        let mut seen_questions = FxHashSet::default();

        for (position, category) in categories.iter().enumerate() {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(CatalogError::EmptyName(position));
            }
            if name == ALL_CATEGORIES {
                return Err(CatalogError::ReservedName(category.name.clone()));
            }
            if index.insert(category.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }

            if category.questions.is_empty() {
                log::warn!("Category {:?} has no questions", category.name);
            }
            for text in &category.questions {
                // Used-set keys are question text, so duplicates are drawn once.
                if !seen_questions.insert(text.as_str()) {
                    log::warn!("Duplicate question text in {:?}: {:?}", category.name, text);
                }
            }
        }

        Ok(index)
    }

    /// Parse a catalog from the JSON asset format.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Get a category by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    /// Check if a category exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Total number of questions across every category.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Every question the filter pools, tagged, in catalog order.
    #[must_use]
    pub fn filtered_questions(&self, filter: &CategoryFilter) -> Vec<Question> {
        self.categories
            .iter()
            .filter(|c| filter.pools(&c.name))
            .flat_map(|c| c.tagged_questions())
            .collect()
    }

    /// Number of questions the filter pools.
    #[must_use]
    pub fn filtered_count(&self, filter: &CategoryFilter) -> usize {
        self.categories
            .iter()
            .filter(|c| filter.pools(&c.name))
            .map(|c| c.questions.len())
            .sum()
    }

    /// Check if a filter names every category in the catalog.
    #[must_use]
    pub fn covers_all(&self, filter: &CategoryFilter) -> bool {
        match filter {
            CategoryFilter::All => true,
            CategoryFilter::Subset(_) => {
                !self.is_empty() && self.names().all(|name| filter.is_selected(name))
            }
        }
    }
}
