//! Error types for options synchronization
//!
//! This module defines the error types used throughout the optsync library.
//! All fallible public functions return [`Result<T, Error>`] for consistent
//! error handling.

/// Errors that can occur while loading, binding, or persisting options
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declared option key has no matching form element.
    ///
    /// This is a configuration defect, not a runtime condition: the form
    /// markup and the schema have drifted apart. It is fatal to
    /// initialization, and no bindings are established when it occurs.
    #[error("no form element carries the marker '{key}'")]
    BindingNotFound { key: String },

    /// A key outside the fixed option set was encountered
    #[error("unknown option key '{0}'")]
    UnknownOptionKey(String),

    /// The persistent store rejected a read or write
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// The privacy control rejected an override update
    #[error("privacy control failed: {0}")]
    Privacy(String),
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use optsync::{parse_whitelist, Result};
///
/// fn domains_from_field(text: &str) -> Result<usize> {
///     Ok(parse_whitelist(text).len())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
