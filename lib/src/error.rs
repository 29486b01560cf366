/// Custom error type for the arcmarks library
///
/// Using `thiserror` crate for automatic `Error` trait implementation and `From` conversions.
/// Every variant that reaches the CLI is reported as a single critical log line.
#[derive(Debug, thiserror::Error)]
pub enum ArcmarksError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Sidebar file could not be found in any known location
    #[error("File not found: {0}")]
    SidebarNotFound(String),

    /// Arc package directory lookup did not yield exactly one match
    #[error("Arc path not found: {found} matching directories under {dir}")]
    ArcPackageDir { dir: String, found: usize },

    /// Sidebar JSON has no container carrying the `global` marker
    #[error("No container with 'global' found")]
    GlobalContainerMissing,

    /// Home directory could not be determined
    #[error("Home directory not found")]
    HomeDirUnknown,

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ArcmarksError
pub type Result<T> = std::result::Result<T, ArcmarksError>;

impl From<String> for ArcmarksError {
    fn from(s: String) -> Self {
        ArcmarksError::Other(s)
    }
}

impl From<&str> for ArcmarksError {
    fn from(s: &str) -> Self {
        ArcmarksError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for ArcmarksError {
    fn from(err: serde_yaml::Error) -> Self {
        ArcmarksError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ArcmarksError {
    fn from(err: serde_json::Error) -> Self {
        ArcmarksError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for ArcmarksError {
    fn from(err: simd_json::Error) -> Self {
        ArcmarksError::Json(err.to_string())
    }
}
