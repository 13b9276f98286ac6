//! Error types for the Scour library.
//!
//! All errors are represented by the [`ScourError`] enum. The preprocessing
//! pipeline itself is total over any `&str`; errors come from building stages
//! (for example an invalid pattern), loading configuration, or CLI I/O.
//!
//! # Examples
//!
//! ```
//! use scour::error::{Result, ScourError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ScourError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Scour operations.
#[derive(Error, Debug)]
pub enum ScourError {
    /// I/O errors (reading input, writing output, loading configuration)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ScourError.
pub type Result<T> = std::result::Result<T, ScourError>;

impl ScourError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ScourError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ScourError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ScourError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
