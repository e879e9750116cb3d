use sparql_triples_model::NamespaceError;
use std::io;

/// An error raised while reading or writing a corpus or a namespace file.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// An error raised while reading or writing the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The content is not valid JSON of the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The namespace file contains an invalid entry.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

impl From<CorpusError> for io::Error {
    #[inline]
    fn from(error: CorpusError) -> Self {
        match error {
            CorpusError::Io(error) => error,
            CorpusError::Json(error) => error.into(),
            CorpusError::Namespace(error) => Self::new(io::ErrorKind::InvalidData, error),
        }
    }
}
