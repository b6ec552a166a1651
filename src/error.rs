//! Error types shared by every downloader capability.

/// Result type returned by all downloader operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Errors surfaced through the downloader contract.
///
/// This crate defines only the failure every skeleton shares: an operation
/// that has no concrete override. Concrete adapters define their own error
/// taxonomy and surface it through [`DownloadError::Exchange`].
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The operation was invoked on a skeleton with no concrete override.
    #[error("operation not implemented: {operation}")]
    NotImplemented {
        /// Name of the operation that was invoked.
        operation: &'static str,
    },

    /// An adapter-defined failure, passed through unchanged.
    #[error(transparent)]
    Exchange(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl DownloadError {
    /// Build the not-implemented signal for `operation`.
    pub fn not_implemented(operation: &'static str) -> Self {
        DownloadError::NotImplemented { operation }
    }

    /// Wrap an adapter-defined error for propagation through the contract.
    pub fn exchange<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DownloadError::Exchange(Box::new(source))
    }
}
