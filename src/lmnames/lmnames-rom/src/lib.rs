pub mod error;
pub mod handle;
pub mod tilemap;

pub use error::RomError;
pub use handle::{classify_size, RomHandle, RomInfo};
pub use lmnames_core::RomBus;
pub use tilemap::{load_tile_map, parse_tile_map};
