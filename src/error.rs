use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotifError {
    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{}:{line}: malformed edge: {reason}", .path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("motif set was built for n = {motif_n}, but the scan asked for n = {scan_n}")]
    InconsistentSize { motif_n: usize, scan_n: usize },
}

pub type Result<T> = std::result::Result<T, MotifError>;
