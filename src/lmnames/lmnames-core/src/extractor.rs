use crate::constants::level_table::{NAME_STRIDE, NAME_WIDTH};
use crate::constants::slots::SLOT_COUNT;
use crate::decoder::TileDecoder;
use crate::levels::{matches_vanilla, LevelSlot};
use crate::memory::RomBus;
use crate::utils::trim_trailing_spaces;
use log::warn;

/// Decoded, trimmed name text (ASCII bytes)
pub type NameBuf = heapless::Vec<u8, NAME_WIDTH>;

/// Marker emitted in place of a name still equal to the factory one
pub const UNCHANGED_MARKER: &[u8] = b"-";

/// One decoded record of the level-name table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelName {
    pub slot: LevelSlot,
    pub level_id: u16,
    pub name: NameBuf,
    pub unchanged: bool, // name matched the factory one and was replaced by "-"
}

/// Reads and decodes the glyph cells of one record, then strips the padding
pub fn decode_slot<B: RomBus + ?Sized>(
    bus: &mut B,
    table_base: u32,
    slot: LevelSlot,
    decoder: &TileDecoder,
) -> NameBuf {
    let record =
        table_base.wrapping_add((NAME_STRIDE as u32).wrapping_mul(slot.index() as u32));

    let mut name = NameBuf::new();
    for cell in 0..NAME_WIDTH as u32 {
        let addr = record.wrapping_add(cell);
        let tile = bus.read_byte(addr, false);
        if tile.is_none() {
            warn!(
                "Short read in slot {} at 0x{:06X}",
                slot.index(),
                addr
            );
        }
        // Capacity is exactly NAME_WIDTH
        let _ = name.push(decoder.decode_read(tile));
    }

    trim_trailing_spaces(&mut name);
    name
}

/// Decodes every slot of the table in slot order
/// With `mark_unchanged`, names equal to the factory ones become "-"
pub fn extract_all<B: RomBus + ?Sized>(
    bus: &mut B,
    table_base: u32,
    decoder: &TileDecoder,
    mark_unchanged: bool,
) -> heapless::Vec<LevelName, SLOT_COUNT> {
    LevelSlot::all()
        .map(|slot| {
            let level_id = slot.level_id();
            let mut name = decode_slot(&mut *bus, table_base, slot, decoder);
            let unchanged = mark_unchanged && matches_vanilla(level_id, &name);
            if unchanged {
                name.clear();
                let _ = name.extend_from_slice(UNCHANGED_MARKER);
            }
            LevelName {
                slot,
                level_id,
                name,
                unchanged,
            }
        })
        .collect()
}

#[cfg(test)]
mod extractor_tests {
    use super::*;
    use crate::utils::compose_le3;
    use std::vec;
    use std::vec::Vec;

    const BASE: u32 = 0x100;

    struct FlatBus(Vec<u8>);

    impl RomBus for FlatBus {
        fn read_byte(&mut self, addr: u32, _direct: bool) -> Option<u8> {
            self.0.get(addr as usize).copied()
        }

        fn read_le3(&mut self, addr: u32, _direct: bool) -> Option<u32> {
            let at = addr as usize;
            let bytes = self.0.get(at..at + 3)?;
            Some(compose_le3(bytes[0], bytes[1], bytes[2]))
        }
    }

    // Table filled with blank (0x1F) records
    fn blank_table() -> Vec<u8> {
        vec![0x1F; BASE as usize + NAME_STRIDE * 96]
    }

    fn write_name(image: &mut Vec<u8>, slot: u8, text: &[u8]) {
        let decoder = TileDecoder::new();
        let at = BASE as usize + NAME_STRIDE * slot as usize;
        for (i, &glyph) in text.iter().enumerate() {
            image[at + i] = decoder.encode(glyph).unwrap();
        }
    }

    #[test]
    fn test_trailing_spaces_trimmed() {
        let mut image = blank_table();
        write_name(&mut image, 5, b"FOO");
        let name = decode_slot(
            &mut FlatBus(image),
            BASE,
            LevelSlot::new(5).unwrap(),
            &TileDecoder::new(),
        );
        assert_eq!(&name[..], b"FOO");
    }

    #[test]
    fn test_blank_record_is_empty() {
        let image = blank_table();
        let name = decode_slot(
            &mut FlatBus(image),
            BASE,
            LevelSlot::new(7).unwrap(),
            &TileDecoder::new(),
        );
        assert!(name.is_empty());
    }

    #[test]
    fn test_full_width_name() {
        let mut image = blank_table();
        write_name(&mut image, 3, b"CHOCOLATE FORTRESS");
        // Reserved 19th byte is never decoded
        image[BASE as usize + NAME_STRIDE * 3 + 18] = 0x00;
        let name = decode_slot(
            &mut FlatBus(image),
            BASE,
            LevelSlot::new(3).unwrap(),
            &TileDecoder::new(),
        );
        assert_eq!(&name[..], b"CHOCOLATE FORTRESS");
    }

    #[test]
    fn test_vanilla_name_marked_unchanged() {
        let mut image = blank_table();
        write_name(&mut image, 1, b"MY SECRET 1");
        write_name(&mut image, 2, b"MY SECRET 3");
        let names = extract_all(&mut FlatBus(image), BASE, &TileDecoder::new(), true);

        assert_eq!(names[0].level_id, 0x001);
        assert_eq!(&names[0].name[..], b"-");
        assert!(names[0].unchanged);

        assert_eq!(&names[1].name[..], b"MY SECRET 3");
        assert!(!names[1].unchanged);
    }

    #[test]
    fn test_keep_vanilla_names() {
        let mut image = blank_table();
        write_name(&mut image, 1, b"MY SECRET 1");
        let names = extract_all(&mut FlatBus(image), BASE, &TileDecoder::new(), false);
        assert_eq!(&names[0].name[..], b"MY SECRET 1");
        assert!(!names[0].unchanged);
    }

    #[test]
    fn test_extract_all_order_and_ids() {
        let mut image = blank_table();
        write_name(&mut image, 36, b"LAST LOW");
        write_name(&mut image, 37, b"FIRST HIGH");
        let names = extract_all(&mut FlatBus(image), BASE, &TileDecoder::new(), true);

        assert_eq!(names.len(), 95);
        for (i, entry) in names.iter().enumerate() {
            assert_eq!(entry.slot.index() as usize, i + 1);
        }
        assert_eq!(names[35].level_id, 0x024);
        assert_eq!(&names[35].name[..], b"LAST LOW");
        assert_eq!(names[36].level_id, 0x101);
        assert_eq!(&names[36].name[..], b"FIRST HIGH");
        assert_eq!(names[94].level_id, 0x13B);
        // Blank slot 0x112 matches its empty factory name
        assert_eq!(&names[53].name[..], b"-");
    }

    #[test]
    fn test_table_base_near_top_wraps() {
        let mut bus = FlatBus(Vec::new());
        let names = extract_all(&mut bus, 0xFFFF_FF00, &TileDecoder::new(), true);
        assert_eq!(names.len(), 95);
        assert!(names[0].name.is_empty());
        assert_eq!(&names[53].name[..], b"-");
    }

    #[test]
    fn test_short_image_decodes_placeholders() {
        let mut image = blank_table();
        write_name(&mut image, 95, b"CUT OFF");
        let cut = BASE as usize + NAME_STRIDE * 95 + 4;
        image.truncate(cut);
        let names = extract_all(&mut FlatBus(image), BASE, &TileDecoder::new(), true);
        assert_eq!(&names[94].name[..], b"CUT");
    }
}
