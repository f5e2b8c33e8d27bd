//! Magic constants for the highlight-events film chunk format.
//!
//! The chunk format is not published; every value here was derived
//! empirically by inspecting captured films and correlating the decoded
//! output against match statistics. When a game build shifts the binary
//! layout, this module is the only place that should need to change.
//!
//! # Anchor layout
//!
//! Each event record is located by scanning for the anchor marker byte.
//! The bytes around a genuine anchor look like this:
//!
//! | Offset (relative) | Size | Field |
//! |-------------------|------|-------|
//! | -9 | 8 | Player identifier (u64 LE, within the XUID range) |
//! | -1 | 1 | Sentinel byte (one of two observed values) |
//! | 0 | 1 | Anchor marker |
//!
//! The identifier range check is the main false-positive filter: the
//! marker and sentinel bytes occur freely elsewhere in the stream, but a
//! preceding u64 inside the XUID range is rare by accident. There is no
//! proof of uniqueness; misparses are caught downstream by the validator.
//!
//! # Record field layout
//!
//! A 60-byte field region sits immediately before the record-end marker:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 32 | Gamertag (UTF-16LE, null padded) |
//! | 32 | 15 | Padding (ignored) |
//! | 47 | 1 | Type hint byte |
//! | 48 | 4 | Time offset since match start (u32 LE, milliseconds) |
//! | 52 | 3 | Padding |
//! | 55 | 1 | Medal flag (nonzero = medal award) |
//! | 56 | 3 | Padding |
//! | 59 | 1 | Medal code |

/// Marker byte that terminates the anchor triplet of every event record.
pub const ANCHOR_MARKER: u8 = 0x2D;

/// The two sentinel bytes observed immediately before the anchor marker.
pub const ANCHOR_SENTINELS: [u8; 2] = [0x35, 0x75];

/// Lower bound (inclusive) of the plausible player-identifier range.
///
/// Player identifiers are Xbox XUIDs, which in practice fall in a narrow
/// band around 2.5e15. A candidate anchor whose preceding u64 falls
/// outside `PLAYER_ID_MIN..PLAYER_ID_MAX` is discarded.
pub const PLAYER_ID_MIN: u64 = 2_000_000_000_000_000;

/// Upper bound (exclusive) of the plausible player-identifier range.
pub const PLAYER_ID_MAX: u64 = 3_000_000_000_000_000;

/// Four-byte sequence marking the end of a record's field-bearing region.
pub const RECORD_END_MARKER: [u8; 4] = [0x2E, 0x09, 0x01, 0x64];

/// Maximum bytes searched past an anchor for [`RECORD_END_MARKER`].
///
/// Observed records fit well inside 2500 bytes; an anchor with no end
/// marker within this window is a structural parse failure.
pub const RECORD_SEARCH_WINDOW: usize = 2500;

/// Size in bytes of the fixed field region preceding the end marker.
pub const RECORD_FIELDS_LEN: usize = 60;

/// Byte width of the fixed UTF-16LE gamertag field (16 code units).
pub const GAMERTAG_LEN: usize = 32;

/// Byte length of the player-identifier field at the anchor point.
pub const PLAYER_ID_LEN: usize = 8;

/// Type-hint byte for kill events.
pub const TYPE_HINT_KILL: u8 = 0x16;

/// Type-hint byte for death events.
pub const TYPE_HINT_DEATH: u8 = 0x12;

/// Type-hint byte for mode-transition markers.
pub const TYPE_HINT_MODE: u8 = 0x08;

/// Type-hint values seen on medal-award records.
///
/// When the medal flag is set, the hint byte carries the medal's sorting
/// weight rather than an event type; these are the weights observed so
/// far. A flagged record with a hint outside this set is treated as an
/// unknown event type.
pub const MEDAL_SORTING_WEIGHTS: [u8; 6] = [0x0A, 0x14, 0x1E, 0x28, 0x32, 0x3C];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout_adds_up() {
        // gamertag + pad + hint + timestamp + pad + flag + pad + code
        let total = GAMERTAG_LEN + 15 + 1 + 4 + 3 + 1 + 3 + 1;
        assert_eq!(total, RECORD_FIELDS_LEN);
    }

    #[test]
    fn test_identifier_range_is_half_open() {
        assert!(PLAYER_ID_MIN < PLAYER_ID_MAX);
        assert_eq!(PLAYER_ID_MAX - PLAYER_ID_MIN, 1_000_000_000_000_000);
    }

    #[test]
    fn test_type_hints_are_distinct() {
        assert_ne!(TYPE_HINT_KILL, TYPE_HINT_DEATH);
        assert_ne!(TYPE_HINT_KILL, TYPE_HINT_MODE);
        assert_ne!(TYPE_HINT_DEATH, TYPE_HINT_MODE);
        for weight in MEDAL_SORTING_WEIGHTS {
            assert_ne!(weight, TYPE_HINT_KILL);
            assert_ne!(weight, TYPE_HINT_DEATH);
            assert_ne!(weight, TYPE_HINT_MODE);
        }
    }

    #[test]
    fn test_search_window_covers_one_record() {
        assert!(RECORD_SEARCH_WINDOW > RECORD_FIELDS_LEN + RECORD_END_MARKER.len());
    }
}
