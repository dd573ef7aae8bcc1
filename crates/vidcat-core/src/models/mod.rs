//! Domain models shared by the store, the gateway and the aggregation engine.

mod aggregate;
mod category;
mod video;

pub use aggregate::{AggregatedResult, KeywordOutcome, KeywordStatus};
pub use category::{
    default_categories, normalize_keywords, slugify, Category, CategoryUpdate, NewCategory,
};
pub use video::VideoItem;
