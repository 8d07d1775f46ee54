//! Error types for the HT32 image loader.
//!
//! Recognition never fails with an error: a buffer either matches the
//! device family or it does not. Everything here covers the load stage,
//! file access, and parsing of the base address.

use thiserror::Error;

/// Primary error type for the loader.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Truncated data when reading.
    #[error("Truncated data at offset {offset}: expected {expected} bytes, got {actual}")]
    TruncatedData {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    /// The image cannot hold the full interrupt vector table.
    ///
    /// Only reachable when `load` is called on a buffer that the
    /// recognizer would have rejected.
    #[error("Vector table needs {expected} bytes but the image has only {actual}")]
    VectorTableTooShort { expected: usize, actual: usize },

    /// The recognizer rejected the image.
    #[error("Not a {device} flash image: {reason}")]
    NotRecognized { device: String, reason: String },

    /// A base address string could not be parsed.
    #[error("Invalid address: {input:?}")]
    InvalidAddress { input: String },
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoaderError::VectorTableTooShort {
            expected: 20,
            actual: 8,
        };
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("8"));
    }

    #[test]
    fn test_not_recognized_display() {
        let err = LoaderError::NotRecognized {
            device: "HT32F1654".to_string(),
            reason: "initial stack pointer 0x10000000 outside SRAM".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Not a HT32F1654 flash image"));
        assert!(msg.contains("0x10000000"));
    }

    #[test]
    fn test_every_variant_has_a_message() {
        let errors = [
            LoaderError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
            LoaderError::TruncatedData {
                offset: 4,
                expected: 4,
                actual: 2,
            },
            LoaderError::VectorTableTooShort {
                expected: 20,
                actual: 8,
            },
            LoaderError::NotRecognized {
                device: "HT32F1654".to_string(),
                reason: "too short".to_string(),
            },
            LoaderError::InvalidAddress {
                input: "flash".to_string(),
            },
        ];
        for err in &errors {
            // No wildcard arm: every variant must be produced by the loader.
            let expected = match err {
                LoaderError::Io(_) => "IO error",
                LoaderError::TruncatedData { .. } => "Truncated data",
                LoaderError::VectorTableTooShort { .. } => "Vector table",
                LoaderError::NotRecognized { .. } => "Not a",
                LoaderError::InvalidAddress { .. } => "Invalid address",
            };
            assert!(err.to_string().starts_with(expected), "{}", err);
        }
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LoaderError = io.into();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
