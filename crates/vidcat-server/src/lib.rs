//! Vidcat Server - REST surface over `vidcat-core`.
//!
//! Exposes category management and cached multi-keyword search under `/api`.
//! The router is available as a library so it can be exercised in-process.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::{build_router, start_server, AppState};
