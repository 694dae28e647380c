//! Definitions of errors.

/// A specialized Result type for this crate.
///
/// The error type defaults to [`TadkhamError`].
pub type Result<T, E = TadkhamError> = std::result::Result<T, E>;

/// The error type for Tadkham.
///
/// Segmentation itself never fails; errors arise only while loading a word
/// list from the outside world.
#[derive(Debug, thiserror::Error)]
pub enum TadkhamError {
    /// The error variant for [`std::io::Error`].
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// The path pointed at a directory where a word-list file was expected.
    #[error("The path '{0}' is a directory, but a file was expected.")]
    PathIsDirectory(std::path::PathBuf),
}
