/// Crate-level error type for doclink.
///
/// Almost nothing in this tool is fatal: unreadable MDX files are reported
/// inline and skipped, a missing docs tree just means zero files, and broken
/// links are the tool's normal output rather than errors. What remains are
/// the genuinely unexpected conditions below.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem (e.g. the working directory
    /// cannot be determined).
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON report serialization failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped serialization error.
        #[from]
        serde_json::Error,
    ),
}
