//! `doom-map-scope`: draws the automap of one level of a WAD as an SVG file.

mod cli;
mod config;
mod svg;

use automap::{DrawList, Level};
use cli::*;
use log::{LevelFilter, error, info, warn};
use simplelog::TermLogger;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wad::WadData;

use crate::config::UserConfig;

const BASE_DIR: &str = "doom-map-scope/";

/// Extensions the usual Doom tools give WADs. Anything else is still tried.
const WAD_EXTENSIONS: [&str; 6] = ["wad", "iwad", "pwad", "wad2", "wad3", "pk3"];

fn has_wad_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| WAD_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(LevelFilter::Warn),
        simplelog::ConfigBuilder::default()
            .set_time_level(LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!("Could not load config, using defaults: {}", e);
        UserConfig::default()
    });
    user_config.sync_cli(&mut options);
    if let Err(e) = user_config.write() {
        error!("Could not write config: {}", e);
    }

    if let Err(e) = run(&options, &user_config) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn run(options: &CLIOptions, user_config: &UserConfig) -> Result<(), Box<dyn Error>> {
    if options.wad.is_empty() {
        return Err("No WAD given, pass one with --wad".into());
    }
    let wad_path = Path::new(&options.wad);
    if !has_wad_extension(wad_path) {
        warn!("{:?} doesn't look like a WAD, trying anyway", wad_path);
    }
    let wad = WadData::open(wad_path)?;

    if options.list {
        let mut stdout = std::io::stdout().lock();
        for name in wad.map_names() {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    let map_name = match &options.map {
        Some(name) => name.to_ascii_uppercase(),
        None => wad
            .map_names()
            .first()
            .map(|n| n.to_string())
            .ok_or("The WAD contains no maps")?,
    };

    let config = &user_config.automap;
    let level = Level::assemble(&wad, &map_name, config.include_things)?;
    let list = DrawList::build(&level, config);
    info!(
        "{}: {} lines, {} markers on a {}x{} canvas",
        map_name,
        list.lines.len(),
        list.markers.len(),
        list.canvas_width(),
        list.canvas_height()
    );

    let out_path = options
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.svg", map_name));
    let mut out = BufWriter::new(File::create(&out_path)?);
    let title = format!("{} - {}", map_name, options.wad);
    svg::write_svg(&mut out, &list, config.palette.background, &title)?;
    out.flush()?;
    info!("Wrote {}", out_path);
    Ok(())
}
