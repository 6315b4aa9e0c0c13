use super::RomBus;
use crate::constants::level_table::*;
use crate::error::LayoutError;
use log::debug;

/// Finds the logical base of the level-name table installed by the level-names patch
pub fn locate_level_name_table<B: RomBus + ?Sized>(bus: &mut B) -> Result<u32, LayoutError> {
    let marker = bus.read_byte(HIJACK_ADDRESS, false);
    if marker != Some(HIJACK_OPCODE) {
        debug!("No level-names hijack at 0x{:06X}: {:?}", HIJACK_ADDRESS, marker);
        return Err(LayoutError::UnsupportedLayout { marker });
    }

    let base = bus
        .read_le3(TABLE_POINTER_ADDRESS, false)
        .ok_or(LayoutError::TruncatedPointer)?;
    debug!(
        "Level-name table pointer 0x{:06X} -> 0x{:06X}",
        TABLE_POINTER_ADDRESS, base
    );
    Ok(base)
}
