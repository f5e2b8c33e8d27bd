//! Highlight event types and classification.
//!
//! This module defines the [`HighlightEvent`] value object produced by the
//! decoder and the closed [`EventKind`] classification derived from the
//! raw type-hint and medal-flag bytes.

use serde::Serialize;

use crate::error::{FilmError, Result};
use crate::medals;

use super::constants::{
    MEDAL_SORTING_WEIGHTS, TYPE_HINT_DEATH, TYPE_HINT_KILL, TYPE_HINT_MODE,
};

/// The closed set of event kinds recoverable from a highlight-events chunk.
///
/// Every decoded event carries exactly one of these kinds. A raw record
/// whose bytes match none of them is a hard parse failure
/// ([`FilmError::UnknownEventType`]), never a default kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The player scored a kill.
    Kill,
    /// The player died.
    Death,
    /// The player was awarded a medal.
    Medal,
    /// A game-mode transition marker (round start, objective phase, etc.).
    Mode,
}

impl EventKind {
    /// Classifies the raw `(type_hint, is_medal_flag)` byte pair.
    ///
    /// Classification order matters: a set medal flag combined with a
    /// known sorting weight always wins, because medal records reuse the
    /// hint byte for the medal's sorting weight.
    ///
    /// # Errors
    ///
    /// Returns `FilmError::UnknownEventType` if the pair matches no known
    /// kind. This signals format drift or a false-positive anchor and is
    /// deliberately not recoverable.
    ///
    /// # Example
    ///
    /// ```
    /// use film_parser::highlight::EventKind;
    ///
    /// assert_eq!(EventKind::classify(0x16, false).unwrap(), EventKind::Kill);
    /// assert!(EventKind::classify(0x00, false).is_err());
    /// ```
    pub fn classify(type_hint: u8, is_medal_flag: bool) -> Result<Self> {
        if is_medal_flag && MEDAL_SORTING_WEIGHTS.contains(&type_hint) {
            return Ok(EventKind::Medal);
        }

        match type_hint {
            TYPE_HINT_MODE => Ok(EventKind::Mode),
            TYPE_HINT_DEATH => Ok(EventKind::Death),
            TYPE_HINT_KILL => Ok(EventKind::Kill),
            _ => Err(FilmError::UnknownEventType {
                type_hint,
                is_medal: is_medal_flag,
            }),
        }
    }
}

/// A single gameplay event recovered from a highlight-events film chunk.
///
/// Events are immutable value objects constructed only by the decoder,
/// yielded in stream order (which tracks chronological match order, though
/// callers must not assume a strict sort by `time_offset_ms`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightEvent {
    /// Stable per-player identifier (XUID) extracted from the stream.
    ///
    /// Always within the plausible identifier range; anchors outside the
    /// range are never emitted as events.
    pub player_id: u64,

    /// Display name decoded from the fixed UTF-16LE field, null padding
    /// stripped.
    pub gamertag: String,

    /// Raw classification byte as read from the stream, kept for
    /// diagnostics.
    pub type_hint: u8,

    /// Raw medal-flag state as read from the stream.
    pub is_medal_flag: bool,

    /// Classified event kind.
    pub event_kind: EventKind,

    /// Milliseconds since match start.
    pub time_offset_ms: u32,

    /// Raw medal identifier (meaningful only for medal events).
    pub medal_code: u8,

    /// Resolved medal display name.
    ///
    /// `Some` if and only if `event_kind` is [`EventKind::Medal`] and the
    /// code resolves in the bundled medal table.
    pub medal_name: Option<String>,
}

impl HighlightEvent {
    /// Builds an event from the raw unpacked record fields.
    ///
    /// Classifies the event kind and resolves the medal name for medal
    /// events. This is the only constructor; it is crate-private so that
    /// events can originate from the decoder alone.
    ///
    /// # Errors
    ///
    /// Returns `FilmError::UnknownEventType` if the type-hint / medal-flag
    /// pair cannot be classified.
    pub(crate) fn from_raw(
        player_id: u64,
        gamertag: String,
        type_hint: u8,
        is_medal_flag: bool,
        time_offset_ms: u32,
        medal_code: u8,
    ) -> Result<Self> {
        let event_kind = EventKind::classify(type_hint, is_medal_flag)?;

        let medal_name = if event_kind == EventKind::Medal {
            medals::medal_name(u32::from(medal_code)).map(str::to_string)
        } else {
            None
        };

        Ok(HighlightEvent {
            player_id,
            gamertag,
            type_hint,
            is_medal_flag,
            event_kind,
            time_offset_ms,
            medal_code,
            medal_name,
        })
    }

    /// Returns the time offset rounded to whole seconds.
    ///
    /// The raw millisecond value is taken from the stream unchecked, so
    /// rounding widens to 64 bits first; a timestamp near `u32::MAX`
    /// (corrupt chunk or false-positive anchor) must not overflow here.
    #[must_use]
    pub fn time_offset_secs(&self) -> u32 {
        let rounded = (u64::from(self.time_offset_ms) + 500) / 1000;
        u32::try_from(rounded).unwrap_or(u32::MAX)
    }

    /// Returns whether this is a medal-award event.
    #[must_use]
    pub fn is_medal(&self) -> bool {
        self.event_kind == EventKind::Medal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_kill() {
        assert_eq!(
            EventKind::classify(TYPE_HINT_KILL, false).unwrap(),
            EventKind::Kill
        );
    }

    #[test]
    fn test_classify_death() {
        assert_eq!(
            EventKind::classify(TYPE_HINT_DEATH, false).unwrap(),
            EventKind::Death
        );
    }

    #[test]
    fn test_classify_mode() {
        assert_eq!(
            EventKind::classify(TYPE_HINT_MODE, false).unwrap(),
            EventKind::Mode
        );
    }

    #[test]
    fn test_classify_medal_requires_flag_and_weight() {
        for weight in MEDAL_SORTING_WEIGHTS {
            assert_eq!(
                EventKind::classify(weight, true).unwrap(),
                EventKind::Medal
            );
        }

        // A sorting weight without the flag is not a medal, and matches
        // no other kind either
        assert!(matches!(
            EventKind::classify(MEDAL_SORTING_WEIGHTS[0], false),
            Err(FilmError::UnknownEventType { .. })
        ));
    }

    #[test]
    fn test_classify_flagged_known_hint_falls_through() {
        // Flag set but hint is a plain event constant, not a sorting
        // weight: classification falls through to the hint match
        assert_eq!(
            EventKind::classify(TYPE_HINT_MODE, true).unwrap(),
            EventKind::Mode
        );
    }

    #[test]
    fn test_classify_zero_hint_is_error() {
        let err = EventKind::classify(0x00, false).unwrap_err();
        match err {
            FilmError::UnknownEventType {
                type_hint,
                is_medal,
            } => {
                assert_eq!(type_hint, 0x00);
                assert!(!is_medal);
            }
            other => panic!("Expected UnknownEventType, got {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_kill_has_no_medal_name() {
        let event = HighlightEvent::from_raw(
            2_500_000_000_000_000,
            "SpartanChief".to_string(),
            TYPE_HINT_KILL,
            false,
            29_000,
            0x7F,
        )
        .unwrap();

        assert_eq!(event.event_kind, EventKind::Kill);
        assert_eq!(event.medal_name, None);
        assert!(!event.is_medal());
    }

    #[test]
    fn test_from_raw_unknown_type_propagates() {
        let result = HighlightEvent::from_raw(
            2_500_000_000_000_000,
            "SpartanChief".to_string(),
            0x00,
            false,
            0,
            0,
        );
        assert!(matches!(result, Err(FilmError::UnknownEventType { .. })));
    }

    #[test]
    fn test_time_offset_secs_rounds() {
        let event = HighlightEvent::from_raw(
            2_500_000_000_000_000,
            "T".to_string(),
            TYPE_HINT_MODE,
            false,
            24_499,
            0,
        )
        .unwrap();
        assert_eq!(event.time_offset_secs(), 24);

        let event = HighlightEvent::from_raw(
            2_500_000_000_000_000,
            "T".to_string(),
            TYPE_HINT_MODE,
            false,
            24_500,
            0,
        )
        .unwrap();
        assert_eq!(event.time_offset_secs(), 25);
    }

    #[test]
    fn test_time_offset_secs_at_u32_max() {
        // A corrupt chunk can carry any raw timestamp; rounding must not
        // overflow at the top of the range
        let event = HighlightEvent::from_raw(
            2_500_000_000_000_000,
            "T".to_string(),
            TYPE_HINT_MODE,
            false,
            u32::MAX,
            0,
        )
        .unwrap();
        assert_eq!(event.time_offset_secs(), u32::MAX / 1000);
    }

    #[test]
    fn test_event_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EventKind::Kill).unwrap();
        assert_eq!(json, "\"kill\"");
    }
}
