//! API implementation submodules.
//!
//! Each submodule contains `impl VidcatApi` blocks that extend the public API
//! with domain-specific methods. The struct definition remains in `lib.rs`.

mod builder;
mod categories;
mod search;

pub use builder::VidcatApiBuilder;
pub use search::parse_query;
