//! Highlight-event extraction from decompressed film chunks.
//!
//! This is the core of the crate: given the decompressed bytes of a
//! "highlight events" film chunk, recover the sequence of discrete
//! gameplay events (kills, deaths, medal awards, mode transitions) it
//! encodes.
//!
//! The format is reverse engineered. Records are found with a heuristic
//! anchor scan ([`constants`] documents the byte patterns involved) and
//! unpacked from a fixed layout; the anchor heuristic has no proof of
//! uniqueness, so decoded counts should be cross-checked against match
//! statistics with [`crate::validate::check`].
//!
//! # Example
//!
//! ```no_run
//! use film_parser::highlight::decode_highlight_events;
//!
//! let data = std::fs::read("chunk.decompressed").unwrap();
//! for result in decode_highlight_events(&data) {
//!     match result {
//!         Ok(event) => println!("{:?}", event),
//!         Err(e) => {
//!             eprintln!("Decode stopped: {e}");
//!             break;
//!         }
//!     }
//! }
//! ```

pub mod constants;
pub mod decoder;
pub mod event;

pub use decoder::{decode_highlight_events, HighlightEventIterator};
pub use event::{EventKind, HighlightEvent};
