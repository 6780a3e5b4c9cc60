//! bsp-dungeon - Entry Point
//!
//! Generates one map from command line settings and prints it to stdout.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use bsp_dungeon::{BspGenerator, GeneratedMap, GenerationConfig};

const USAGE: &str = "usage: bsp-dungeon [--config FILE.ron] [--width N] [--height N] [--depth N] \
[--min-room N] [--seed N] [--split-pad N] [--room-pad N] [--cells] [--color] [--rooms]";

#[derive(Debug, Default)]
struct Options {
    config: GenerationConfig,
    color: bool,
    rooms: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("missing value for {}", flag))?;
    value
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, flag))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();

    // A config file provides the base that later flags override
    let mut rest = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path: String = parse_value(&arg, args.next())?;
            options.config = GenerationConfig::load(&path)?;
        } else {
            rest.push(arg);
        }
    }

    let mut args = rest.into_iter();
    while let Some(arg) = args.next() {
        let config = &mut options.config;
        match arg.as_str() {
            "--width" => config.width = parse_value(&arg, args.next())?,
            "--height" => config.height = parse_value(&arg, args.next())?,
            "--depth" => config.max_depth = parse_value(&arg, args.next())?,
            "--min-room" => config.min_room_size = parse_value(&arg, args.next())?,
            "--seed" => config.seed = parse_value(&arg, args.next())?,
            "--split-pad" => config.split_pad = parse_value(&arg, args.next())?,
            "--room-pad" => config.room_pad = parse_value(&arg, args.next())?,
            "--cells" => config.debug_cell_borders = true,
            "--color" => options.color = true,
            "--rooms" => options.rooms = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("unknown argument {:?}\n{}", other, USAGE),
        }
    }

    Ok(options)
}

fn print_colored(out: &mut impl Write, map: &GeneratedMap) -> Result<()> {
    for row in map.grid.rows() {
        for tile in row {
            let (r, g, b) = tile.fg_color();
            queue!(out, SetForegroundColor(Color::Rgb { r, g, b }), Print(tile.glyph()))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()?;
    Ok(())
}

fn print_rooms(out: &mut impl Write, map: &GeneratedMap) -> Result<()> {
    writeln!(out, "{} rooms, seed {}", map.room_count(), map.seed)?;
    let mut result = Ok(());
    map.for_each_room(|id, rect, tiles| {
        if result.is_ok() {
            result = writeln!(
                out,
                "  room {:>2}: {}x{} at ({}, {}), {} tiles",
                id,
                rect.width,
                rect.height,
                rect.x,
                rect.y,
                tiles.len()
            );
        }
    });
    result?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let mut generator = BspGenerator::new(options.config).context("invalid generation settings")?;
    let map = generator.generate();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.color {
        print_colored(&mut out, &map)?;
    } else {
        out.write_all(map.to_ascii().as_bytes())?;
    }
    if options.rooms {
        print_rooms(&mut out, &map)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_args(args(&["--width", "80", "--seed", "42", "--cells", "--rooms"])).unwrap();
        assert_eq!(options.config.width, 80);
        assert_eq!(options.config.height, 60);
        assert_eq!(options.config.seed, 42);
        assert!(options.config.debug_cell_borders);
        assert!(options.rooms);
        assert!(!options.color);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--width"])).is_err());
        assert!(parse_args(args(&["--depth", "deep"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_room_summary() {
        let config = GenerationConfig::default().with_seed(42);
        let map = BspGenerator::new(config).unwrap().generate();
        let mut buf = Vec::new();
        print_rooms(&mut buf, &map).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), map.room_count() + 1);
        assert!(text.starts_with(&format!("{} rooms, seed 42", map.room_count())));
    }
}
