//! Category records and slug derivation.

use crate::config::CategoryConfig;
use crate::error::{Result, VidcatError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// A user-defined named group of search keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug derived from the title at creation time. Never changes afterwards.
    pub id: String,
    pub title: String,
    /// Ordered, non-empty list of non-blank keywords.
    pub keywords: Vec<String>,
    /// Display color, e.g. `#ff6b6b`.
    pub color: String,
}

/// Input for creating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update of a category. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Derive a category id from its title.
///
/// # Rules Applied
/// 1. Convert to lowercase
/// 2. Replace each whitespace run with a hyphen
/// 3. Strip everything that is not `a-z`, `0-9` or `-`
///
/// # Examples
///
/// ```
/// use vidcat_core::models::slugify;
///
/// assert_eq!(slugify("Formula 1!!"), "formula-1");
/// assert_eq!(slugify("Deep  Sea Life"), "deep-sea-life");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG.replace_all(&hyphenated, "").into_owned()
}

/// Trim keywords and drop blank ones, rejecting lists that end up empty.
pub fn normalize_keywords<I, S>(keywords: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized: Vec<String> = keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    if normalized.is_empty() {
        return Err(VidcatError::validation(
            "keywords",
            "Title and keywords array are required",
        ));
    }
    Ok(normalized)
}

impl NewCategory {
    /// Validate the input and build the category it describes.
    pub fn into_category(self) -> Result<Category> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(VidcatError::validation(
                "title",
                "Title and keywords array are required",
            ));
        }

        let keywords = normalize_keywords(&self.keywords)?;

        let id = slugify(&title);
        if id.is_empty() {
            return Err(VidcatError::validation(
                "title",
                "Title must contain at least one letter or digit",
            ));
        }

        let color = self
            .color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| CategoryConfig::DEFAULT_COLOR.to_string());

        Ok(Category {
            id,
            title,
            keywords,
            color,
        })
    }
}

impl CategoryUpdate {
    /// Apply the update in place. The id is never touched.
    ///
    /// Blank titles and colors are ignored; a keyword list, when present,
    /// must still contain at least one keyword.
    pub fn apply_to(self, category: &mut Category) -> Result<()> {
        let keywords = match self.keywords {
            Some(keywords) => Some(normalize_keywords(&keywords)?),
            None => None,
        };

        if let Some(title) = self.title.map(|t| t.trim().to_string()) {
            if !title.is_empty() {
                category.title = title;
            }
        }
        if let Some(keywords) = keywords {
            category.keywords = keywords;
        }
        if let Some(color) = self.color.map(|c| c.trim().to_string()) {
            if !color.is_empty() {
                category.color = color;
            }
        }
        Ok(())
    }
}

/// Categories every fresh store starts with.
pub fn default_categories() -> Vec<Category> {
    let make = |id: &str, title: &str, keywords: &[&str], color: &str| Category {
        id: id.to_string(),
        title: title.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        color: color.to_string(),
    };

    vec![
        make(
            "sports",
            "Sports",
            &["baseball", "golf", "formula 1", "tennis"],
            "#ff6b6b",
        ),
        make("music", "Music", &["rock", "jazz", "classical", "pop"], "#4ecdc4"),
        make(
            "tech",
            "Technology",
            &["programming", "ai", "gadgets", "software"],
            "#45b7d1",
        ),
    ]
}
