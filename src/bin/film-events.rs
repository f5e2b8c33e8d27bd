//! Film highlight-event debug CLI.
//!
//! A command-line interface for decoding highlight events from locally
//! saved film-chunk files and cross-checking them against a saved match
//! stats summary.
//!
//! ## Commands
//!
//! - `decode` - Decode a chunk file and print the events
//! - `check` - Decode a chunk file and compare counts against a stats JSON

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use film_parser::stats::MatchStats;
use film_parser::{check, decode_highlight_events, decompress_chunk, HighlightEvent};

/// Film highlight-event parser
#[derive(Parser)]
#[command(name = "film-events")]
#[command(about = "Decode highlight events from match film chunks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a chunk file and print the events
    Decode {
        /// Path to the chunk file
        file: PathBuf,
        /// The file is a raw (still compressed) chunk payload
        #[arg(short, long)]
        compressed: bool,
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
    /// Cross-check decoded events against a match stats summary
    Check {
        /// Path to the chunk file
        file: PathBuf,
        /// Path to the stats summary JSON
        stats: PathBuf,
        /// The chunk file is a raw (still compressed) payload
        #[arg(short, long)]
        compressed: bool,
    },
}

/// Output format for decoded events.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per event
    Text,
    /// JSON array of events
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            file,
            compressed,
            output,
        } => cmd_decode(&file, compressed, output),
        Commands::Check {
            file,
            stats,
            compressed,
        } => cmd_check(&file, &stats, compressed),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads a chunk file, inflating it first when `compressed` is set.
fn read_chunk(path: &Path, compressed: bool) -> film_parser::Result<Vec<u8>> {
    let raw = fs::read(path)?;
    if compressed {
        decompress_chunk(&raw)
    } else {
        Ok(raw)
    }
}

/// Decodes every event in the chunk, stopping at the first error.
fn decode_all(data: &[u8]) -> film_parser::Result<Vec<HighlightEvent>> {
    decode_highlight_events(data).collect_events()
}

fn cmd_decode(
    file: &Path,
    compressed: bool,
    output: OutputFormat,
) -> film_parser::Result<ExitCode> {
    let data = read_chunk(file, compressed)?;
    let events = decode_all(&data)?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&events).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for event in &events {
                let medal = event
                    .medal_name
                    .as_deref()
                    .map(|name| format!(" [{name}]"))
                    .unwrap_or_default();
                println!(
                    "[{:>8}ms] {:<16} {:?}{medal}",
                    event.time_offset_ms, event.gamertag, event.event_kind
                );
            }
            eprintln!("{} events decoded", events.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_check(
    file: &Path,
    stats_path: &Path,
    compressed: bool,
) -> film_parser::Result<ExitCode> {
    let data = read_chunk(file, compressed)?;
    let events = decode_all(&data)?;

    let stats_json = fs::read_to_string(stats_path)?;
    let stats: MatchStats = serde_json::from_str(&stats_json).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid stats summary: {e}"),
        )
    })?;

    let findings = check(&events, &stats);
    if findings.is_empty() {
        eprintln!(
            "OK: {} events consistent with stats for {} players",
            events.len(),
            stats.players.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for finding in &findings {
        println!("{finding}");
    }
    eprintln!("{} discrepancies found", findings.len());
    Ok(ExitCode::FAILURE)
}
