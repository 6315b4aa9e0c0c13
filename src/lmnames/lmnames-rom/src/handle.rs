use crate::error::RomError;
use lmnames_core::constants::address_space::MAP_MODE_ADDRESS;
use lmnames_core::constants::{COPIER_HEADER_SIZE, ROM_SIZE_UNIT};
use lmnames_core::memory::{is_lorom_map_mode, locate_level_name_table};
use lmnames_core::utils::compose_le3;
use lmnames_core::{AddressTranslator, MapMode, RomBus};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Classification of an open image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RomInfo {
    pub size: u64,
    pub header_adjustment: u32,
    pub mode: MapMode,
}

/// Header flags and adjustment implied by the file size
pub fn classify_size(size: u64) -> Result<(MapMode, u32), RomError> {
    match size % ROM_SIZE_UNIT {
        0 => Ok((MapMode::empty(), 0)),
        rem if rem == COPIER_HEADER_SIZE as u64 => {
            Ok((MapMode::COPIER_HEADER, COPIER_HEADER_SIZE))
        }
        _ => Err(RomError::InvalidRomSize(size)),
    }
}

/// An open ROM image together with its mapping state
/// The source is released when the handle drops
pub struct RomHandle<R> {
    source: R,
    size: u64,
    translator: AddressTranslator,
}

impl RomHandle<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RomError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened {}", path.display());
        Self::new(file)
    }
}

impl RomHandle<Cursor<Vec<u8>>> {
    pub fn from_bytes(image: Vec<u8>) -> Result<Self, RomError> {
        Self::new(Cursor::new(image))
    }
}

impl<R: Read + Seek> RomHandle<R> {
    /// Classifies the image by size, then checks the internal header for LoROM
    pub fn new(mut source: R) -> Result<Self, RomError> {
        let size = source.seek(SeekFrom::End(0))?;
        let (mode, header_adjustment) = classify_size(size)?;

        let mut handle = RomHandle {
            source,
            size,
            translator: AddressTranslator::new(mode, header_adjustment),
        };

        // Probe runs before the LoROM flag exists: header adjustment only
        let map_mode = handle.read_byte(MAP_MODE_ADDRESS, false);
        if map_mode.map_or(false, is_lorom_map_mode) {
            handle.translator.mode.insert(MapMode::LOROM);
        }
        debug!(
            "ROM size {} bytes, map-mode byte {:02X?}, mode: {}",
            size, map_mode, handle.translator.mode
        );

        Ok(handle)
    }

    pub fn info(&self) -> RomInfo {
        RomInfo {
            size: self.size,
            header_adjustment: self.translator.header_adjustment,
            mode: self.translator.mode,
        }
    }

    /// Logical base address of the level-name table
    pub fn locate_level_name_table(&mut self) -> Result<u32, RomError> {
        Ok(locate_level_name_table(self)?)
    }

    /// Fills `buf` from a physical offset; `None` on a short read
    fn read_at(&mut self, offset: u32, buf: &mut [u8]) -> Option<()> {
        let result = self
            .source
            .seek(SeekFrom::Start(offset as u64))
            .and_then(|_| self.source.read_exact(buf));

        match result {
            Ok(()) => Some(()),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => None,
            Err(e) => {
                warn!("Read at offset 0x{:X} failed: {}", offset, e);
                None
            }
        }
    }
}

impl<R: Read + Seek> RomBus for RomHandle<R> {
    fn read_byte(&mut self, addr: u32, direct: bool) -> Option<u8> {
        let offset = self.translator.physical(addr, direct);
        let mut byte = [0u8; 1];
        self.read_at(offset, &mut byte)?;
        Some(byte[0])
    }

    fn read_le3(&mut self, addr: u32, direct: bool) -> Option<u32> {
        let offset = self.translator.physical(addr, direct);
        let mut word = [0u8; 3];
        self.read_at(offset, &mut word)?;
        Some(compose_le3(word[0], word[1], word[2]))
    }
}
