use std::path::PathBuf;

/// Error type for domain-level validation and path resolution.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An asset request or selection failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A catalog filename would escape the configured output root.
    #[error("Unsafe destination path: {0}")]
    UnsafePath(PathBuf),
}
