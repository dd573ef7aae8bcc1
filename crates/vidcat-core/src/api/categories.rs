//! Category management methods.

use crate::error::Result;
use crate::models::{Category, CategoryUpdate, NewCategory};
use crate::VidcatApi;

impl VidcatApi {
    /// All categories in insertion order.
    pub async fn list_categories(&self) -> Vec<Category> {
        self.store.list().await
    }

    /// Create a category whose id is the slug of its title.
    pub async fn create_category(&self, input: NewCategory) -> Result<Category> {
        self.store.create(input).await
    }

    pub async fn update_category(&self, id: &str, update: CategoryUpdate) -> Result<Category> {
        self.store.update(id, update).await
    }

    /// Delete a category, returning the removed record.
    pub async fn delete_category(&self, id: &str) -> Result<Category> {
        self.store.delete(id).await
    }
}
