/// Error types for the wardrobe application
///
/// Persistence and ingestion failures flow through `WardrobeError`.
/// Validation failures are not errors: operations that reject input
/// return `None` instead.

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum WardrobeError {
    /// SQLite open, query or write errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background task panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Convenience Result type using WardrobeError
pub type Result<T> = std::result::Result<T, WardrobeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: WardrobeError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, WardrobeError::Io(_)));
        assert_eq!(err.to_string(), "File I/O error: gone");
    }

    #[test]
    fn test_config_message() {
        let err = WardrobeError::Config("bad quality".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad quality");
    }
}
