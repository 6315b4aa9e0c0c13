use crate::error::RomError;
use std::fs;
use std::path::Path;

fn parse_glyph(text: &str) -> Option<u8> {
    match text {
        "\\n" => Some(b'\n'),
        "\\t" => Some(b'\t'),
        "\\s" => Some(b' '),
        "\\\\" => Some(b'\\'),
        _ => match text.as_bytes() {
            [byte] if byte.is_ascii() => Some(*byte),
            _ => None,
        },
    }
}

/// Parses `tile=glyph` override lines; tile codes are hex with an optional 0x prefix
/// Blank lines and `#` comments are skipped
pub fn parse_tile_map(text: &str) -> Result<Vec<(u8, u8)>, RomError> {
    let mut overrides = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let error = |reason: &str| RomError::TileMap {
            line: idx + 1,
            reason: reason.to_string(),
        };

        let (code, glyph) = line
            .split_once('=')
            .ok_or_else(|| error("expected <tile>=<glyph>"))?;
        let code = code.trim();
        let hex = code
            .strip_prefix("0x")
            .or_else(|| code.strip_prefix("0X"))
            .unwrap_or(code);
        let tile = u8::from_str_radix(hex, 16).map_err(|_| error("tile code is not a hex byte"))?;
        let glyph =
            parse_glyph(glyph.trim()).ok_or_else(|| error("glyph must be one ASCII character"))?;

        overrides.push((tile, glyph));
    }

    Ok(overrides)
}

pub fn load_tile_map<P: AsRef<Path>>(path: P) -> Result<Vec<(u8, u8)>, RomError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RomError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tile_map(&text)
}
