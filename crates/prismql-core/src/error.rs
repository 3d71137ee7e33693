use std::path::PathBuf;

/// Failures of the file-level driver. Malformed schema content is never an
/// error; only I/O around it is.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
