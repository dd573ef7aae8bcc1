//! In-memory category store.
//!
//! Categories live for the lifetime of the process. Every successful
//! mutation clears the shared [`ResultCache`], since cached aggregations
//! were computed from the previous keyword sets.

use crate::cache::ResultCache;
use crate::error::{Result, VidcatError};
use crate::models::{default_categories, Category, CategoryUpdate, NewCategory};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Insertion-ordered collection of categories keyed by slug.
#[derive(Debug)]
pub struct CategoryStore {
    categories: RwLock<Vec<Category>>,
    cache: Arc<ResultCache>,
}

impl CategoryStore {
    /// Empty store.
    pub fn new(cache: Arc<ResultCache>) -> Self {
        Self::with_categories(Vec::new(), cache)
    }

    /// Store pre-populated with the sports, music and tech categories.
    pub fn seeded(cache: Arc<ResultCache>) -> Self {
        Self::with_categories(default_categories(), cache)
    }

    pub fn with_categories(categories: Vec<Category>, cache: Arc<ResultCache>) -> Self {
        Self {
            categories: RwLock::new(categories),
            cache,
        }
    }

    /// All categories in insertion order.
    pub async fn list(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Category> {
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| VidcatError::CategoryNotFound { id: id.to_string() })
    }

    /// Validate and append a new category.
    pub async fn create(&self, input: NewCategory) -> Result<Category> {
        let category = input.into_category()?;

        {
            let mut categories = self.categories.write().await;
            if categories.iter().any(|c| c.id == category.id) {
                return Err(VidcatError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
            categories.push(category.clone());
        }

        self.cache.invalidate_all().await;
        info!("Created category '{}'", category.id);
        Ok(category)
    }

    /// Apply a partial update. The id stays fixed even if the title changes.
    pub async fn update(&self, id: &str, update: CategoryUpdate) -> Result<Category> {
        let updated = {
            let mut categories = self.categories.write().await;
            let category = categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| VidcatError::CategoryNotFound { id: id.to_string() })?;
            update.apply_to(category)?;
            category.clone()
        };

        self.cache.invalidate_all().await;
        info!("Updated category '{}'", id);
        Ok(updated)
    }

    /// Remove a category, returning it.
    pub async fn delete(&self, id: &str) -> Result<Category> {
        let removed = {
            let mut categories = self.categories.write().await;
            let index = categories
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| VidcatError::CategoryNotFound { id: id.to_string() })?;
            categories.remove(index)
        };

        self.cache.invalidate_all().await;
        info!("Deleted category '{}'", id);
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.categories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.categories.read().await.is_empty()
    }
}
