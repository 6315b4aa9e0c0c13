use crate::escape::escape_into;
use std::io::{self, Write};

/// A level id and its (unescaped) name bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    pub level_id: u16,
    pub name: &'a [u8],
}

/// How level ids are rendered as object keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStyle {
    Bare,     // "001"
    Prefixed, // "0x001"
}

pub fn level_key(level_id: u16, style: KeyStyle) -> String {
    match style {
        KeyStyle::Bare => format!("{:03X}", level_id),
        KeyStyle::Prefixed => format!("0x{:03X}", level_id),
    }
}

fn write_pairs<W: Write>(
    out: &mut W,
    entries: &[Entry],
    style: KeyStyle,
    indent: &str,
) -> io::Result<()> {
    let mut line = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        line.clear();
        line.extend_from_slice(indent.as_bytes());
        line.push(b'"');
        line.extend_from_slice(level_key(entry.level_id, style).as_bytes());
        line.extend_from_slice(b"\": \"");
        escape_into(&mut line, entry.name);
        line.push(b'"');
        if i + 1 != entries.len() {
            line.push(b',');
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}

/// Bare `"levelnames" : { ... }` fragment meant for embedding in a larger document
pub fn write_fragment<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    out.write_all(b" \"levelnames\" : {\n")?;
    write_pairs(out, entries, KeyStyle::Bare, "      ")?;
    out.write_all(b"}\n")
}

/// Standalone document keyed by game id, in the database-import layout
pub fn write_document<W: Write>(
    out: &mut W,
    game_id: &str,
    version: &str,
    entries: &[Entry],
) -> io::Result<()> {
    let mut head = Vec::new();
    head.extend_from_slice(b"{\n  \"");
    escape_into(&mut head, game_id.as_bytes());
    head.extend_from_slice(b"\": {\n    \"version\": \"");
    escape_into(&mut head, version.as_bytes());
    head.extend_from_slice(b"\",\n    \"levelnames\": {\n");
    out.write_all(&head)?;

    write_pairs(out, entries, KeyStyle::Prefixed, "      ")?;
    out.write_all(b"    }\n  }\n}\n")
}
