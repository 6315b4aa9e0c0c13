use lmnames_core::LayoutError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening, classifying or reading a ROM image
#[derive(Error, Debug)]
pub enum RomError {
    /// Path missing or unreadable
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Size is neither a multiple of 1024 nor 512 past one
    #[error("invalid ROM size: {0} bytes")]
    InvalidRomSize(u64),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Malformed line in a custom tile map
    #[error("tile map line {line}: {reason}")]
    TileMap { line: usize, reason: String },
}
