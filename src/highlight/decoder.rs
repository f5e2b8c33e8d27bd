//! Highlight-event decoding from decompressed film-chunk data.
//!
//! The chunk format is undelimited: there is no length prefix, no record
//! count, and no published schema. Records are located by scanning the
//! whole buffer for the anchor-marker byte and filtering candidates with
//! the sentinel and identifier-range checks described in
//! [`constants`](super::constants). For each surviving anchor:
//!
//! 1. A bounded window after the anchor point is searched for the 4-byte
//!    record-end marker.
//! 2. The fixed 60-byte field region ending at the end marker is sliced
//!    out and unpacked.
//! 3. The raw type-hint and medal-flag bytes are classified into an
//!    [`EventKind`](super::event::EventKind); an unclassifiable pair
//!    aborts the decode.
//!
//! Decoding is exposed as a lazy iterator so callers that only need the
//! first few events never pay for, or risk failure on, the rest of the
//! buffer. After the first error the iterator fuses; events yielded
//! before the failure remain valid.
//!
//! # Example
//!
//! ```
//! use film_parser::highlight::decode_highlight_events;
//!
//! let data: &[u8] = &[]; // a chunk with no player activity
//! let events: Vec<_> = decode_highlight_events(data).collect();
//! assert!(events.is_empty());
//! ```

use crate::binary::{read_u32_le, read_u64_le, read_utf16_string};
use crate::error::{FilmError, Result};

use super::constants::{
    ANCHOR_MARKER, ANCHOR_SENTINELS, GAMERTAG_LEN, PLAYER_ID_LEN, PLAYER_ID_MAX, PLAYER_ID_MIN,
    RECORD_END_MARKER, RECORD_FIELDS_LEN, RECORD_SEARCH_WINDOW,
};
use super::event::HighlightEvent;

/// Field offsets within the 60-byte record region, derived from the
/// layout table in [`constants`](super::constants).
const HINT_OFFSET: usize = GAMERTAG_LEN + 15;
const TIMESTAMP_OFFSET: usize = HINT_OFFSET + 1;
const MEDAL_FLAG_OFFSET: usize = TIMESTAMP_OFFSET + 4 + 3;
const MEDAL_CODE_OFFSET: usize = MEDAL_FLAG_OFFSET + 1 + 3;

/// Decodes highlight events from a decompressed film chunk.
///
/// The returned iterator yields events lazily in stream order, which
/// tracks chronological match order. An empty buffer, or one with no
/// valid anchors (e.g. a bot-only match), yields no events and no error.
///
/// # Arguments
///
/// * `data` - The fully decompressed bytes of one highlight-events chunk
///
/// # Example
///
/// ```no_run
/// use film_parser::highlight::decode_highlight_events;
///
/// let data = std::fs::read("chunk.decompressed").unwrap();
/// for result in decode_highlight_events(&data) {
///     let event = result.unwrap();
///     println!("{} {:?} at {}ms", event.gamertag, event.event_kind, event.time_offset_ms);
/// }
/// ```
#[must_use]
pub fn decode_highlight_events(data: &[u8]) -> HighlightEventIterator<'_> {
    HighlightEventIterator::new(data)
}

/// Lazy iterator over highlight events in a decompressed film chunk.
///
/// Yields `Result<HighlightEvent>`; the first `Err` fuses the iterator.
/// The sequence is finite and non-restartable.
pub struct HighlightEventIterator<'a> {
    /// Reference to the decompressed chunk data.
    data: &'a [u8],

    /// Next byte position to examine for the anchor marker.
    scan_pos: usize,

    /// Number of events yielded so far.
    event_count: usize,

    /// Whether iteration has completed (end of buffer or first error).
    finished: bool,
}

impl<'a> HighlightEventIterator<'a> {
    /// Creates a new iterator over the given decompressed chunk data.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        HighlightEventIterator {
            data,
            // An anchor needs the identifier and sentinel bytes before the
            // marker, so earlier positions can never match.
            scan_pos: PLAYER_ID_LEN + 1,
            event_count: 0,
            finished: false,
        }
    }

    /// Returns the number of events yielded so far.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Returns the current scan position in the data.
    #[must_use]
    pub fn current_offset(&self) -> usize {
        self.scan_pos
    }

    /// Returns whether iteration is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Eagerly decodes the remaining events into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first decode error encountered; events decoded before
    /// the failure are discarded. Use the iterator directly to keep them.
    pub fn collect_events(self) -> Result<Vec<HighlightEvent>> {
        self.collect()
    }

    /// Advances the scan to the next surviving anchor.
    ///
    /// Returns the anchor point (start of the identifier field), or
    /// `None` when the buffer is exhausted.
    fn next_anchor(&mut self) -> Option<usize> {
        while self.scan_pos < self.data.len() {
            let pos = self.scan_pos;
            self.scan_pos += 1;

            if self.data[pos] != ANCHOR_MARKER {
                continue;
            }

            if !ANCHOR_SENTINELS.contains(&self.data[pos - 1]) {
                continue;
            }

            let id_start = pos - 1 - PLAYER_ID_LEN;
            // read cannot fail: id_start + 8 == pos - 1 < data.len()
            let Ok(candidate) = read_u64_le(self.data, id_start) else {
                continue;
            };
            if !(PLAYER_ID_MIN..PLAYER_ID_MAX).contains(&candidate) {
                continue;
            }

            return Some(id_start);
        }
        None
    }

    /// Parses the record anchored at `anchor` (start of the identifier
    /// field).
    fn parse_record(&self, anchor: usize) -> Result<HighlightEvent> {
        let player_id = read_u64_le(self.data, anchor)?;

        // Locate the record-end marker within the bounded search window.
        let window_end = usize::min(anchor + RECORD_SEARCH_WINDOW, self.data.len());
        let window = &self.data[anchor..window_end];

        let rel_end = window
            .windows(RECORD_END_MARKER.len())
            .position(|w| w == RECORD_END_MARKER)
            .ok_or_else(|| {
                FilmError::invalid_record(
                    anchor,
                    format!(
                        "record end marker not found within {RECORD_SEARCH_WINDOW}-byte window"
                    ),
                )
            })?;
        let end = anchor + rel_end;

        // The fixed field region is the trailing window ending at the marker.
        let fields_start = end.checked_sub(RECORD_FIELDS_LEN).ok_or_else(|| {
            FilmError::invalid_record(
                anchor,
                "record field region extends before the start of the buffer",
            )
        })?;
        let fields = &self.data[fields_start..end];

        let gamertag = read_utf16_string(fields, 0, GAMERTAG_LEN)?;
        let type_hint = fields[HINT_OFFSET];
        let time_offset_ms = read_u32_le(fields, TIMESTAMP_OFFSET)?;
        let is_medal_flag = fields[MEDAL_FLAG_OFFSET] != 0;
        let medal_code = fields[MEDAL_CODE_OFFSET];

        HighlightEvent::from_raw(
            player_id,
            gamertag,
            type_hint,
            is_medal_flag,
            time_offset_ms,
            medal_code,
        )
    }
}

impl Iterator for HighlightEventIterator<'_> {
    type Item = Result<HighlightEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(anchor) = self.next_anchor() else {
            self.finished = true;
            return None;
        };

        match self.parse_record(anchor) {
            Ok(event) => {
                self.event_count += 1;
                Some(Ok(event))
            }
            Err(e) => {
                // A malformed record aborts the remainder of the decode;
                // events already yielded stay valid for the caller.
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for HighlightEventIterator<'_> {}
