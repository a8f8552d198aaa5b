//! Song Analytics Server Library
//!
//! Serves a static, column-oriented dataset of song audio features as
//! paginated JSON. The library exposes the internal modules for testing.

pub mod catalog;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, SongCatalog};
pub use server::{run_server, RequestsLoggingLevel};
