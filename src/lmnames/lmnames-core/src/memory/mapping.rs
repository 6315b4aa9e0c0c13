use crate::constants::address_space::*;
use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Mapping-mode flags recorded for an open image
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MapMode: u8 {
        const COPIER_HEADER = 0b0000_0001;
        const LOROM         = 0b0000_0010;
    }
}

impl Default for MapMode {
    fn default() -> Self {
        MapMode::empty()
    }
}

impl fmt::Display for MapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mapping = if self.contains(MapMode::LOROM) {
            "LoROM"
        } else {
            "linear"
        };
        let header = if self.contains(MapMode::COPIER_HEADER) {
            "copier header"
        } else {
            "headerless"
        };
        write!(f, "{}, {}", mapping, header)
    }
}

/// True when the internal header's map-mode byte names a LoROM cartridge
pub fn is_lorom_map_mode(value: u8) -> bool {
    LOROM_MAP_MODES.contains(&value)
}

/// Folds a LoROM bank:offset address into a flat file offset (no header)
/// Bank bit 7 is ignored, so mirrors in banks 0x80+ land on the same data
pub fn lorom_to_offset(addr: u32) -> u32 {
    let bank = addr >> 16;
    let bank_offset = addr & 0xFFFF;

    if addr < LOROM_BANK_SIZE {
        return bank * LOROM_BANK_SIZE + (bank_offset & LOROM_OFFSET_MASK);
    }

    ((bank & LOROM_BANK_MASK) << LOROM_BANK_SHIFT) | (bank_offset & LOROM_OFFSET_MASK)
}

/// Converts logical addresses into physical file offsets for one image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressTranslator {
    pub mode: MapMode,         // LoROM / copier-header flags
    pub header_adjustment: u32, // 0 or 0x200
}

impl AddressTranslator {
    pub fn new(mode: MapMode, header_adjustment: u32) -> Self {
        Self {
            mode,
            header_adjustment,
        }
    }

    /// Applies bank mapping (LoROM only) followed by the header adjustment
    pub fn translate(&self, addr: u32) -> u32 {
        let offset = if self.mode.contains(MapMode::LOROM) {
            lorom_to_offset(addr)
        } else {
            addr
        };
        offset.wrapping_add(self.header_adjustment)
    }

    /// Physical offset for a read; direct reads bypass translation completely
    pub fn physical(&self, addr: u32, direct: bool) -> u32 {
        if direct {
            addr
        } else {
            self.translate(addr)
        }
    }
}

#[cfg(test)]
mod mapping_tests {
    use super::*;

    #[test]
    fn test_lorom_high_half() {
        // Sample every bank, with offsets in the upper half and the first byte of the lower half
        for bank in 0..=0xFFu32 {
            for offset in [0x8000u32, 0x9549, 0xBB57, 0xFFFF, 0x0000, 0x7FFF].iter() {
                let addr = (bank << 16) | offset;
                if addr < 0x8000 {
                    continue;
                }
                let expected = ((addr >> 16 & 0x7F) << 15) | (addr & 0x7FFF);
                assert_eq!(lorom_to_offset(addr), expected);
            }
        }
    }

    #[test]
    fn test_lorom_low_addresses() {
        for addr in (0..0x8000u32).step_by(0x111) {
            assert_eq!(lorom_to_offset(addr), (addr >> 16) * 0x8000 + (addr & 0x7FFF));
        }
        assert_eq!(lorom_to_offset(0x7FD5), 0x7FD5);
    }

    #[test]
    fn test_known_patch_addresses() {
        assert_eq!(lorom_to_offset(0x049549), 0x021549);
        assert_eq!(lorom_to_offset(0x03BB57), 0x01BB57);
        // FastROM mirror folds onto the same bank
        assert_eq!(lorom_to_offset(0x849549), 0x021549);
    }

    #[test]
    fn test_translate_modes() {
        let linear = AddressTranslator::new(MapMode::empty(), 0);
        assert_eq!(linear.translate(0x049549), 0x049549);

        let mut mode = MapMode::COPIER_HEADER;
        mode.insert(MapMode::LOROM);
        let headered = AddressTranslator::new(mode, 0x200);
        assert_eq!(headered.translate(0x049549), 0x021549 + 0x200);
        assert_eq!(headered.physical(0x049549, true), 0x049549);

        // Header adjustment applies even before LoROM is detected
        let detecting = AddressTranslator::new(MapMode::COPIER_HEADER, 0x200);
        assert_eq!(detecting.translate(0x7FD5), 0x7FD5 + 0x200);
    }

    #[test]
    fn test_map_mode_flags() {
        let mut mode = MapMode::empty();
        assert!(!mode.contains(MapMode::LOROM));
        mode.insert(MapMode::LOROM);
        assert!(mode.contains(MapMode::LOROM));
        assert!(!mode.contains(MapMode::COPIER_HEADER));
        assert_eq!(MapMode::default(), MapMode::empty());
    }

    #[test]
    fn test_translate_wraps_at_top_of_address_space() {
        let headered = AddressTranslator::new(MapMode::COPIER_HEADER, 0x200);
        assert_eq!(headered.translate(u32::MAX), 0x1FF);
        assert_eq!(headered.translate(0xFFFF_FE00), 0);
    }

    #[test]
    fn test_map_mode_display() {
        let mut mode = MapMode::COPIER_HEADER;
        assert_eq!(std::format!("{}", mode), "linear, copier header");
        mode.insert(MapMode::LOROM);
        assert_eq!(std::format!("{}", mode), "LoROM, copier header");
        assert_eq!(std::format!("{}", MapMode::LOROM), "LoROM, headerless");
    }

    #[test]
    fn test_lorom_map_mode_bytes() {
        assert!(is_lorom_map_mode(0x20));
        assert!(is_lorom_map_mode(0x30));
        assert!(!is_lorom_map_mode(0x21));
        assert!(!is_lorom_map_mode(0x00));
    }
}
