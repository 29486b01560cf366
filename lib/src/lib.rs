pub mod config;
pub mod error;
pub mod export;
pub mod sidebar;
pub mod spaces;
pub mod tree;

// Re-export error types for convenience
pub use error::ArcmarksError;
