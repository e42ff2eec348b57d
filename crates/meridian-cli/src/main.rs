use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Duration, Local};
use clap::{Parser, Subcommand};

use meridian_core::convert::{TIME_FORMAT, parse_time_text};
use meridian_core::engine::Engine;
use meridian_infrastructure::{JsonFavoritesRepository, JsonHistoryRepository};

#[derive(Parser)]
#[command(name = "meridian")]
#[command(about = "Meridian - time zone converter and world clock", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a wall-clock time from one zone to another
    Convert {
        /// Source zone identifier (e.g. "America/New_York")
        from: String,
        /// Target zone identifier (e.g. "Asia/Tokyo")
        to: String,
        /// Time to convert, "YYYY-MM-DD HH:MM:SS"; defaults to the current time
        #[arg(long)]
        time: Option<String>,
        /// Shift the input time by this many hours before converting
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset_hours: i64,
        /// Do not record the conversion in history
        #[arg(long)]
        no_record: bool,
    },
    /// Show the current time in the default cities and favorite zones
    Clocks,
    /// List every zone identifier in the bundled database
    Zones,
    /// Manage favorite zones
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Inspect or manage conversion history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Add a zone to the favorite list
    Add { zone_id: String },
    /// Remove a zone from the favorite list
    Remove { zone_id: String },
    /// List favorite zones in display order
    List,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show recorded conversions, most recent first
    Show,
    /// Write the full history to a text file in chronological order
    Export {
        #[arg(long, default_value = "conversion_history.txt")]
        path: PathBuf,
    },
    /// Delete all recorded conversions
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = build_engine()?;

    match cli.command {
        Commands::Convert {
            from,
            to,
            time,
            offset_hours,
            no_record,
        } => run_convert(&mut engine, &from, &to, time, offset_hours, no_record),
        Commands::Clocks => run_clocks(&engine),
        Commands::Zones => run_zones(&engine),
        Commands::Favorites { action } => run_favorites(&mut engine, action),
        Commands::History { action } => run_history(&mut engine, action),
    }
}

fn build_engine() -> Result<Engine> {
    let favorites =
        JsonFavoritesRepository::new().context("cannot resolve the configuration directory")?;
    let history =
        JsonHistoryRepository::new().context("cannot resolve the configuration directory")?;
    Ok(Engine::load(Box::new(favorites), Box::new(history)))
}

fn run_convert(
    engine: &mut Engine,
    from: &str,
    to: &str,
    time: Option<String>,
    offset_hours: i64,
    no_record: bool,
) -> Result<()> {
    let mut time_text = time.unwrap_or_else(|| Local::now().format(TIME_FORMAT).to_string());

    if offset_hours != 0 {
        let shifted = parse_time_text(&time_text)? + Duration::hours(offset_hours);
        time_text = shifted.format(TIME_FORMAT).to_string();
    }

    if no_record {
        let to_time = engine.convert(&time_text, from, to)?;
        println!("{time_text} {from} = {to_time} {to}");
        return Ok(());
    }

    let outcome = engine.convert_and_record(&time_text, from, to)?;
    println!(
        "{} {} = {} {}",
        outcome.record.from_time, outcome.record.from_zone, outcome.record.to_time,
        outcome.record.to_zone
    );
    if let Some(err) = outcome.persist_error {
        eprintln!("warning: conversion shown above could not be saved to history: {err}");
    }
    Ok(())
}

fn run_clocks(engine: &Engine) -> Result<()> {
    for row in engine.world_clocks() {
        println!(
            "{:<12} {:<20} {} {}",
            row.label, row.zone_id, row.local_time, row.utc_offset
        );
    }
    Ok(())
}

fn run_zones(engine: &Engine) -> Result<()> {
    for zone_id in engine.catalog().zone_ids() {
        println!("{zone_id}");
    }
    Ok(())
}

fn run_favorites(engine: &mut Engine, action: FavoritesAction) -> Result<()> {
    match action {
        FavoritesAction::Add { zone_id } => match engine.add_favorite(&zone_id) {
            Ok(()) => println!("Added '{zone_id}' to favorites"),
            Err(err) if err.is_persistence() => {
                eprintln!("warning: '{zone_id}' was added for this session but not saved: {err}");
            }
            Err(err) => bail!(err),
        },
        FavoritesAction::Remove { zone_id } => match engine.remove_favorite(&zone_id) {
            Ok(()) => println!("Removed '{zone_id}' from favorites"),
            Err(err) if err.is_persistence() => {
                eprintln!("warning: '{zone_id}' was removed for this session but not saved: {err}");
            }
            Err(err) => bail!(err),
        },
        FavoritesAction::List => {
            for zone_id in engine.favorites().iter() {
                println!("{zone_id}");
            }
        }
    }
    Ok(())
}

fn run_history(engine: &mut Engine, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::Show => {
            for block in engine.history_for_display() {
                print!("{block}");
            }
        }
        HistoryAction::Export { path } => {
            fs::write(&path, engine.export_history())
                .with_context(|| format!("failed to export history to {}", path.display()))?;
            println!("History exported to {}", path.display());
        }
        HistoryAction::Clear { yes } => {
            if !yes {
                bail!("history clear is destructive; pass --yes to confirm");
            }
            match engine.clear_history() {
                Ok(()) => println!("History cleared"),
                Err(err) if err.is_persistence() => {
                    eprintln!("warning: history was cleared for this session but not saved: {err}");
                }
                Err(err) => bail!(err),
            }
        }
    }
    Ok(())
}
