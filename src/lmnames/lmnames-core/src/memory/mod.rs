mod mapping;
mod table;

pub use mapping::{is_lorom_map_mode, lorom_to_offset, AddressTranslator, MapMode};
pub use table::locate_level_name_table;

/// Byte-level access to a ROM image through its logical address space
/// `direct` skips address translation and header adjustment entirely
pub trait RomBus {
    /// Reads one byte, `None` once past the end of the image
    fn read_byte(&mut self, addr: u32, direct: bool) -> Option<u8>;

    /// Reads three consecutive bytes at the translated address as a 24-bit little-endian word
    fn read_le3(&mut self, addr: u32, direct: bool) -> Option<u32>;
}

impl<B: RomBus + ?Sized> RomBus for &mut B {
    fn read_byte(&mut self, addr: u32, direct: bool) -> Option<u8> {
        (**self).read_byte(addr, direct)
    }

    fn read_le3(&mut self, addr: u32, direct: bool) -> Option<u32> {
        (**self).read_le3(addr, direct)
    }
}
