extern crate clap;
use log::{error, info};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Internal project modules
use lmnames_core::{extract_all, TileDecoder};
use lmnames_json::{write_document, write_fragment, Entry};
use lmnames_rom::{load_tile_map, RomError, RomHandle, RomInfo};

/// Settings gathered from the command line
struct Config {
    rom: PathBuf,
    output: Option<PathBuf>,
    tile_map: Option<PathBuf>,
    keep_vanilla: bool,
    document: Option<(String, String)>, // (game id, version)
    info: bool,
}

/// Configures command-line interface using clap
fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    let description = "Extracts Lunar Magic level names from an SMW ROM image as JSON";
    clap::App::new("Level Name Extractor (lmnames)")
        .version("0.1")
        .about(description)
        .arg(
            clap::Arg::with_name("ROM")
                .help("ROM image (.sfc/.smc), with or without a copier header")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .help("Write JSON to FILE instead of stdout"),
        )
        .arg(
            clap::Arg::with_name("tile-map")
                .short("t")
                .long("tile-map")
                .value_name("FILE")
                .takes_value(true)
                .help("Tile overrides, one <hex tile>=<glyph> per line"),
        )
        .arg(
            clap::Arg::with_name("keep-vanilla")
                .short("k")
                .long("keep-vanilla")
                .help("Print factory names as-is instead of \"-\""),
        )
        .arg(
            clap::Arg::with_name("game-id")
                .long("game-id")
                .value_name("ID")
                .takes_value(true)
                .requires("game-version")
                .help("Emit a standalone document keyed by this game id"),
        )
        .arg(
            clap::Arg::with_name("game-version")
                .long("game-version")
                .value_name("VER")
                .takes_value(true)
                .requires("game-id")
                .help("Version string stored in the standalone document"),
        )
        .arg(
            clap::Arg::with_name("info")
                .short("i")
                .long("info")
                .help("Log ROM size, header and mapping mode"),
        )
        .get_matches()
}

impl Config {
    fn from_matches(matches: &clap::ArgMatches) -> Self {
        let document = match (matches.value_of("game-id"), matches.value_of("game-version")) {
            (Some(id), Some(version)) => Some((id.to_string(), version.to_string())),
            _ => None,
        };
        Config {
            rom: matches.value_of_os("ROM").map(PathBuf::from).unwrap_or_default(),
            output: matches.value_of_os("output").map(PathBuf::from),
            tile_map: matches.value_of_os("tile-map").map(PathBuf::from),
            keep_vanilla: matches.is_present("keep-vanilla"),
            document,
            info: matches.is_present("info"),
        }
    }
}

/// One-line classification of an opened image
fn rom_summary(path: &Path, rom_info: &RomInfo) -> String {
    format!(
        "ROM {}: {} bytes, header adjustment 0x{:X}, {}",
        path.display(),
        rom_info.size,
        rom_info.header_adjustment,
        rom_info.mode
    )
}

/// Decodes the level-name table of `config.rom` and renders it into `out`
fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), RomError> {
    let decoder = match &config.tile_map {
        Some(path) => TileDecoder::with_overrides(&load_tile_map(path)?),
        None => TileDecoder::new(),
    };

    let mut rom = RomHandle::open(&config.rom)?;
    if config.info {
        info!("{}", rom_summary(&config.rom, &rom.info()));
    }

    let table_base = rom.locate_level_name_table()?;
    if config.info {
        info!("Level-name table: 0x{:06X}", table_base);
    }

    let names = extract_all(&mut rom, table_base, &decoder, !config.keep_vanilla);
    drop(rom);

    let entries: Vec<Entry> = names
        .iter()
        .map(|level| Entry {
            level_id: level.level_id,
            name: &level.name,
        })
        .collect();

    match &config.document {
        Some((game_id, version)) => write_document(out, game_id, version, &entries)?,
        None => write_fragment(out, &entries)?,
    }
    Ok(())
}

/// Renders fully before touching the destination, so failures leave no partial output
fn execute(config: &Config) -> Result<(), RomError> {
    let mut rendered = Vec::new();
    run(config, &mut rendered)?;

    match &config.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|source| RomError::FileOpen {
                path: path.clone(),
                source,
            })?;
            file.write_all(&rendered)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&rendered)?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Main entry point for the extractor
fn main() {
    // Parse command-line arguments
    let cli_matches = get_cli_config();
    let config = Config::from_matches(&cli_matches);

    if config.info {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::init();
    }

    if let Err(e) = execute(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
