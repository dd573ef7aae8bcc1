//! REST handlers, split by resource.

mod categories;
mod health;
mod search;

pub use categories::{create_category, delete_category, list_categories, update_category};
pub use health::health;
pub use search::{search_category, search_keywords};
