use core::fmt;

/// Failures while locating the level-name table inside an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Patch hijack byte missing; carries what was read instead (None on EOF)
    UnsupportedLayout { marker: Option<u8> },
    /// Table pointer runs past the end of the image
    TruncatedPointer,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnsupportedLayout { marker: Some(byte) } => write!(
                f,
                "unsupported ROM layout: level-names patch not found (hijack byte 0x{:02X})",
                byte
            ),
            LayoutError::UnsupportedLayout { marker: None } => write!(
                f,
                "unsupported ROM layout: image too short to hold the level-names patch"
            ),
            LayoutError::TruncatedPointer => {
                write!(f, "level-name table pointer lies past the end of the image")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
