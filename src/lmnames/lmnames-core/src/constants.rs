// Copier header prepended by some dump tools, and the size granularity of a clean dump
pub const COPIER_HEADER_SIZE: u32 = 0x200;
pub const ROM_SIZE_UNIT: u64 = 1024;

pub mod address_space {
    // LoROM banks expose 32KB windows
    pub const LOROM_BANK_SIZE: u32 = 0x8000;
    pub const LOROM_BANK_MASK: u32 = 0x7F;
    pub const LOROM_OFFSET_MASK: u32 = 0x7FFF;
    pub const LOROM_BANK_SHIFT: u32 = 15;

    // Internal header map-mode byte and the values that identify LoROM
    pub const MAP_MODE_ADDRESS: u32 = 0x7FD5;
    pub const LOROM_MAP_MODES: [u8; 2] = [0x20, 0x30];
}

pub mod level_table {
    // Hijack installed by the level-names patch (JSL opcode at this address)
    pub const HIJACK_ADDRESS: u32 = 0x049549;
    pub const HIJACK_OPCODE: u8 = 0x22;

    // 24-bit pointer to the relocated name table
    pub const TABLE_POINTER_ADDRESS: u32 = 0x03BB57;

    // Each record is 19 bytes; only the first 18 hold glyphs
    pub const NAME_STRIDE: usize = 19;
    pub const NAME_WIDTH: usize = 18;
}

pub mod slots {
    pub const FIRST_SLOT: u8 = 1;
    pub const LAST_SLOT: u8 = 95;
    pub const SLOT_COUNT: usize = 95;

    // Slots above this one name the second level bank (0x101..)
    pub const LOW_BANK_LAST_SLOT: u8 = 0x24;
    pub const HIGH_BANK_BASE: u16 = 0x100;
}
