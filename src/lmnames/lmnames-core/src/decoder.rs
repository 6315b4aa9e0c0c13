use lmnames_tiles::{tile_to_ascii_byte, TILE_COUNT, UNMAPPED};

/// Glyph emitted for tiles with no printable mapping
pub const PLACEHOLDER: u8 = b' ';

/// Tile code fed to the decoder when a read runs past the end of the image
pub const EOF_TILE: u8 = 0xFF;

/// Letters, punctuation and digits of the level-name font
fn explicit_glyph(tile_code: u8) -> Option<u8> {
    let glyph = match tile_code {
        0x00..=0x19 => b'A' + tile_code, // A-Z
        0x1A => b'!',
        0x1B => b'.',
        0x1C => b'-',
        0x1D => b',',
        0x1E => b'?',
        0x1F => b' ',
        0x5A => b'#',
        0x5B => b'(',
        0x5C => b')',
        0x64..=0x6C => b'1' + (tile_code - 0x64), // 1-9
        0x9F | 0xFC => b' ',
        _ => return None,
    };
    Some(glyph)
}

/// Total tile -> ASCII mapping: explicit font glyphs over the default table,
/// with optional per-tile overrides on top
#[derive(Clone)]
pub struct TileDecoder {
    glyphs: [u8; TILE_COUNT], // UNMAPPED entries decode to PLACEHOLDER
}

impl TileDecoder {
    pub fn new() -> Self {
        let mut glyphs = [UNMAPPED; TILE_COUNT];
        for (code, slot) in glyphs.iter_mut().enumerate() {
            let code = code as u8;
            *slot = explicit_glyph(code).unwrap_or_else(|| tile_to_ascii_byte(code));
        }
        Self { glyphs }
    }

    /// Builds a decoder where `(tile, glyph)` pairs win over every built-in table
    pub fn with_overrides(overrides: &[(u8, u8)]) -> Self {
        let mut decoder = Self::new();
        for &(tile, glyph) in overrides {
            decoder.glyphs[tile as usize] = glyph;
        }
        decoder
    }

    pub fn decode(&self, tile_code: u8) -> u8 {
        match self.glyphs[tile_code as usize] {
            UNMAPPED => PLACEHOLDER,
            glyph => glyph,
        }
    }

    /// Decodes a byte that may be missing (short read)
    pub fn decode_read(&self, tile_code: Option<u8>) -> u8 {
        self.decode(tile_code.unwrap_or(EOF_TILE))
    }

    /// Lowest tile code whose glyph is `ascii`
    pub fn encode(&self, ascii: u8) -> Option<u8> {
        if ascii == UNMAPPED {
            return None;
        }
        self.glyphs
            .iter()
            .position(|&glyph| glyph == ascii)
            .map(|code| code as u8)
    }
}

impl Default for TileDecoder {
    fn default() -> Self {
        Self::new()
    }
}
