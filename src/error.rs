//! Error types for collection_converter

use thiserror::Error;

use crate::formats::CollectionFormat;

/// Unified error type for collection_converter operations
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Input did not have the structure the format expects
    #[error("Malformed {format} collection: {message}")]
    Format {
        format: CollectionFormat,
        message: String,
    },
    /// Collection could not be rendered in the target format
    #[error("Failed to encode {format} collection: {message}")]
    Encode {
        format: CollectionFormat,
        message: String,
    },
    /// Requested a collection format this tool does not know
    #[error("Unsupported collection format '{0}' (valid formats: {valid})", valid = CollectionFormat::valid_names())]
    UnsupportedFormat(String),
    /// Raw load into a collection that already holds cards
    #[error("Collection already holds {existing} cards, use merge to combine collections")]
    AlreadyPopulated { existing: usize },
    /// File system error (permissions, disk full, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    pub fn format(format: CollectionFormat, message: impl Into<String>) -> Self {
        ConverterError::Format {
            format,
            message: message.into(),
        }
    }

    pub fn encode(format: CollectionFormat, message: impl Into<String>) -> Self {
        ConverterError::Encode {
            format,
            message: message.into(),
        }
    }

    /// Split a csv error into I/O failures and malformed input
    pub(crate) fn from_csv(format: CollectionFormat, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => ConverterError::Io(io_err),
            _ => ConverterError::format(format, message),
        }
    }

    /// Same split as [`ConverterError::from_csv`], for errors raised while writing
    pub(crate) fn from_csv_write(format: CollectionFormat, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => ConverterError::Io(io_err),
            _ => ConverterError::encode(format, message),
        }
    }
}

impl From<tempfile::PersistError> for ConverterError {
    fn from(err: tempfile::PersistError) -> Self {
        ConverterError::Io(err.error)
    }
}

pub type Error = ConverterError;

/// Result alias for collection_converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
