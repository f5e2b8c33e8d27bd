//! # Film Parser
//!
//! A parser for recorded-match "film" highlight events.
//!
//! Matches are recorded as films delivered in compressed binary chunks.
//! The highlight-events chunk encodes discrete gameplay events (kills,
//! deaths, medal awards, and mode-transition markers) in an
//! undocumented, undelimited binary layout. This library recovers those
//! events by heuristic anchor scanning and fixed-offset field
//! extraction, and cross-validates the result against independently
//! fetched match statistics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use film_parser::decompress::decompress_chunk;
//! use film_parser::highlight::decode_highlight_events;
//! use film_parser::error::Result;
//!
//! fn parse_chunk(raw: &[u8]) -> Result<()> {
//!     // The chunk payload arrives zlib-compressed
//!     let data = decompress_chunk(raw)?;
//!
//!     for result in decode_highlight_events(&data) {
//!         let event = result?;
//!         println!(
//!             "[{:>6}ms] {} {:?}",
//!             event.time_offset_ms, event.gamertag, event.event_kind
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`error`] - Error types and result alias for parsing operations
//! - [`binary`] - Low-level binary reading utilities for little-endian data
//! - [`decompress`] - Zlib inflation of raw chunk payloads
//! - [`highlight`] - Anchor scanning, record extraction, event types
//! - [`medals`] - Static medal-code → name lookup table
//! - [`stats`] - Reference match-statistics data model
//! - [`validate`] - Aggregate-count cross-checking against match stats
//!
//! ## Format Caveats
//!
//! The chunk format is reverse engineered; every structural constant the
//! decoder relies on lives in [`highlight::constants`] and is empirical,
//! not specified. The anchor heuristic admits false positives and missed
//! records; [`validate::check`] exists to surface both. Decoding either
//! succeeds completely for a chunk or fails partway with the events
//! already yielded still valid; no event ever carries a defaulted or
//! unknown kind.
//!
//! All multi-byte integers in the stream are little-endian; display
//! names are fixed-width UTF-16LE.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binary;
pub mod decompress;
pub mod error;
pub mod highlight;
pub mod medals;
pub mod stats;
pub mod validate;

// Re-export commonly used types at the crate root
pub use decompress::decompress_chunk;
pub use error::{FilmError, Result};
pub use highlight::{decode_highlight_events, EventKind, HighlightEvent, HighlightEventIterator};
pub use medals::medal_name;
pub use stats::{MatchStats, MedalCount, PlayerStats, TeamStats};
pub use validate::check;
