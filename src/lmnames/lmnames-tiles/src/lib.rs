#![no_std]

/// Number of glyph slots in the console character set
pub const TILE_COUNT: usize = 256;

/// Marks a tile with no printable ASCII glyph
pub const UNMAPPED: u8 = 0;

/// Default font table: tile code -> ASCII byte (0 when the tile is a graphic)
/// Rows 0x20-0x2F and 0x70-0xFF are border and icon graphics
pub static TILE_TO_ASCII: [u8; TILE_COUNT] = [
    /* 0x00 */ b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', b'P',
    /* 0x10 */ b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z', b'!', b'.', b'-', b',', b'?', b' ',
    /* 0x20 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0x30 */ 0, 0, b'I', b'L', b'L', b'U', b'S', b'I', b'Y', b'E', b'L', b'O', b'W', b'?', 0, b'!',
    /* 0x40 */ b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o', b'p',
    /* 0x50 */ b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z', b'#', b'(', b')', b'\'', 0, 0,
    /* 0x60 */ 0, 0, 0, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', 0, 0, 0,
    /* 0x70 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0x80 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0x90 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xA0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xB0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xC0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xD0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xE0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xF0 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Raw lookup into the default font table
pub fn tile_to_ascii_byte(tile_code: u8) -> u8 {
    TILE_TO_ASCII[tile_code as usize]
}
