#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod constants;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod levels;
pub mod memory;
pub mod utils;

pub use decoder::TileDecoder;
pub use error::LayoutError;
pub use extractor::{extract_all, LevelName, NameBuf};
pub use levels::LevelSlot;
pub use memory::{AddressTranslator, MapMode, RomBus};
