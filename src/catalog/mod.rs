//! Question catalog: categories, drawn questions, and category selection.
//!
//! ## Key Types
//!
//! - `Category`: static category data (name, emoji, prompts)
//! - `Question`: a prompt tagged with its category, as drawn
//! - `Catalog`: validated, ordered category lookup
//! - `CategoryFilter`: `All` or an explicit subset of category names

pub mod definition;
pub mod filter;
pub mod registry;

pub use definition::{Category, Question};
pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use registry::{Catalog, CatalogError};
