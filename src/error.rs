use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Everything that can go wrong in a run. The first three variants are fatal
// and abort the whole job; the last two come from the diagnostic renderer
// and are only reported.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    #[error("item count mismatch: {images} images paired with {labels} labels")]
    Consistency { images: usize, labels: usize },

    #[error("image index {index} out of bounds for {count} images")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("unexpected dimensions: {dimensions:?}")]
    UnexpectedDimensions { dimensions: Vec<usize> },
}

impl Error {
    // Most format problems are phrased as "expected X, found Y" about some
    // part of the file, so this keeps the call sites short.
    pub(crate) fn format(path: &std::path::Path, message: impl Into<String>) -> Self {
        Error::Format {
            path: path.into(),
            message: message.into(),
        }
    }
}
