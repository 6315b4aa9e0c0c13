use crate::constants::slots::*;

/// Position of a record in the level-name table (1..=95)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LevelSlot(u8);

impl LevelSlot {
    pub fn new(slot: u8) -> Option<Self> {
        if (FIRST_SLOT..=LAST_SLOT).contains(&slot) {
            Some(LevelSlot(slot))
        } else {
            None
        }
    }

    /// Every slot, in table order
    pub fn all() -> impl Iterator<Item = LevelSlot> {
        (FIRST_SLOT..=LAST_SLOT).map(LevelSlot)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Level number the game uses for this slot
    pub fn level_id(self) -> u16 {
        let slot = self.0 as u16;
        if self.0 <= LOW_BANK_LAST_SLOT {
            slot
        } else {
            HIGH_BANK_BASE + slot - LOW_BANK_LAST_SLOT as u16
        }
    }
}

pub fn level_id_for_slot(slot: u8) -> Option<u16> {
    LevelSlot::new(slot).map(LevelSlot::level_id)
}

/// Factory name stored for a level, if the game ships one
pub fn vanilla_name(level_id: u16) -> Option<&'static str> {
    let name = match level_id {
        0x001 => "MY SECRET 1",
        0x002 => "my secret 2",
        0x003 => "really cool secret",
        0x004 => "not donut mansion",
        0x005 => "plains de donut 3",
        0x006 => "plain donut 3",
        0x007 => "Morton place",
        0x008 => "green house",
        0x009 => "plain donut 2",
        0x00A => "secret donut 1",
        0x00B => "fortress de vanill",
        0x00C => "bridge de beur 1",
        0x00D => "bridge de beur 2",
        0x00E => "ludwig hidoeut",
        0x00F => "cheesy bridge",
        0x010 => "mountain of cookie",
        0x011 => "pepsi lake",
        0x012 => "yellow star rod",
        0x013 => "super secret donut",
        0x014 => "Yellow custom pala",
        0x015 => "DONUT PLAINS 1",
        0x016 => "STAR ROAD",
        0x017 => "#2 MORTON'S PLAINS",
        0x018 => "SUNKEN GHOST SHIP",
        0x019 => "#2 MORTON'S PLAINS",
        0x01A => "#6 WENDY'S CASTLE",
        0x01B => "CHOCOLATE FORTRESS",
        0x01C => "CHOCOLATE ISLAND 5",
        0x01D => "CHOCOLATE ISLAND 4",
        0x01E => "STAR ROAD",
        0x01F => "FOREST FORTRESS",
        0x020 => "#5 ROY'S CASTLE",
        0x021 => "CHOCO-GHOST HOUSE",
        0x022 => "CHOCOLATE ISLAND 1",
        0x023 => "CHOCOLATE ISLAND 3",
        0x024 => "CHOCOLATE ISLAND 2",
        0x101 => "#1 IGGY'S CASTLE",
        0x102 => "YOSHI'S ISLAND 4",
        0x103 => "YOSHI'S ISLAND 3",
        0x104 => "YOSHI'S HOUSE",
        0x105 => "YOSHI'S ISLAND 1",
        0x106 => "YOSHI'S ISLAND 2",
        0x107 => "VANILLA GHOST HOUS",
        0x108 => "STAR ROAD",
        0x109 => "VANILLA SECRET 1",
        0x10A => "VANILLA DOME 3",
        0x10B => "DONUT SECRET 2",
        0x10C => "STAR ROAD",
        0x10D => "FRONT DOOR",
        0x10E => "BACK DOOR",
        0x10F => "VALLEY OF BOWSER 4",
        0x110 => "#7 LARRY'S CASTLE",
        0x111 => "VALLEY FORTRESS",
        0x112 => "",
        0x113 => "VALLEY OF BOWSER 3",
        0x114 => "VALLEY GHOST HOUSE",
        0x115 => "VALLEY OF BOWSER 2",
        0x116 => "VALLEY OF BOWSER 1",
        0x117 => "CHOCOLATE SECRET",
        0x118 => "VANILLA DOME 2",
        0x119 => "VANILLA DOME 4",
        0x11A => "VANILLA DOME 1",
        0x11B => "RED SWITCH PALACE",
        0x11C => "#3 LEMMY'S CASTLE",
        0x11D => "FOREST GHOST HOUSE",
        0x11E..=0x120 | 0x123 => "FOREST OFILLUSION",
        0x121 => "BLUE SWITCH PALACE",
        0x122 => "FOREST SECRET AREA",
        0x124 | 0x129 | 0x12E | 0x12F | 0x131 | 0x133 | 0x137 | 0x138 => "STAR ROAD",
        0x125 => "FUNKY",
        0x126 => "OUTRAGEOUS",
        0x127 => "MONDO",
        0x128 => "GROOVY",
        0x12A => "GNARLY",
        0x12B => "TUBULAR",
        0x12C => "WAY COOL",
        0x12D => "AWESOME",
        0x130 => "STAR WORLD 2",
        0x132 => "STAR WORLD 3",
        0x134 => "STAR WORLD 1",
        0x135 => "STAR WORLD 4",
        0x136 => "STAR WORLD 5",
        _ => return None,
    };
    Some(name)
}

/// Case-insensitive match against the factory name; false when none exists
pub fn matches_vanilla(level_id: u16, name: &[u8]) -> bool {
    match vanilla_name(level_id) {
        Some(vanilla) => vanilla.as_bytes().eq_ignore_ascii_case(name),
        None => false,
    }
}
