use crate::constants::level_table::NAME_STRIDE;

// Composes a 24-bit little-endian word from three consecutive bytes
pub fn compose_le3(b0: u8, b1: u8, b2: u8) -> u32 {
    (b0 as u32) | ((b1 as u32) << 8) | ((b2 as u32) << 16)
}

// Strips trailing spaces while the length stays inside (0, NAME_STRIDE)
pub fn trim_trailing_spaces<const N: usize>(name: &mut heapless::Vec<u8, N>) {
    while !name.is_empty() && name.len() < NAME_STRIDE && name.last() == Some(&b' ') {
        name.pop();
    }
}
