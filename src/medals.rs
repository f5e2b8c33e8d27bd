//! Static medal-code lookup table.
//!
//! Medal awards in the highlight-event stream carry only a numeric code;
//! this module resolves codes to human-readable names via a bundled data
//! resource (`data/medals.json`). The table is loaded once on first use
//! and is read-only for the life of the process, so concurrent readers
//! need no synchronization beyond the one-time initialization.
//!
//! The table is provided data, not derived: codes and names come from the
//! game's published medal metadata and are updated by replacing the
//! bundled file.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// The bundled medal table resource.
const MEDALS_JSON: &str = include_str!("../data/medals.json");

/// One entry of the bundled medal table.
#[derive(Debug, Deserialize)]
struct MedalEntry {
    /// Numeric medal code as it appears in the event stream.
    code: u32,
    /// Human-readable medal name.
    name: String,
}

/// Returns the process-wide code → name table, loading it on first use.
fn table() -> &'static HashMap<u32, String> {
    static TABLE: OnceLock<HashMap<u32, String>> = OnceLock::new();

    TABLE.get_or_init(|| {
        // The resource is compiled into the binary; a parse failure is a
        // build defect, not a runtime condition.
        let entries: Vec<MedalEntry> =
            serde_json::from_str(MEDALS_JSON).expect("bundled medal table is valid JSON");

        entries
            .into_iter()
            .map(|entry| (entry.code, entry.name))
            .collect()
    })
}

/// Resolves a medal code to its display name.
///
/// Returns `None` for codes absent from the bundled table; an unknown
/// code is expected (new medals ship faster than the table updates) and
/// is not an error.
///
/// # Example
///
/// ```
/// use film_parser::medals::medal_name;
///
/// assert_eq!(medal_name(41), Some("Nade Shot"));
/// assert_eq!(medal_name(9999), None);
/// ```
#[must_use]
pub fn medal_name(code: u32) -> Option<&'static str> {
    table().get(&code).map(String::as_str)
}

/// Returns the number of medal codes in the bundled table.
#[must_use]
pub fn medal_count() -> usize {
    table().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_parses() {
        // Forces the OnceLock init; a malformed bundled resource fails here
        assert!(medal_count() > 0);
    }

    #[test]
    fn test_known_codes_resolve() {
        assert_eq!(medal_name(1), Some("Double Kill"));
        assert_eq!(medal_name(41), Some("Nade Shot"));
        assert_eq!(medal_name(47), Some("Killjoy"));
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(medal_name(0), None);
        assert_eq!(medal_name(u32::MAX), None);
    }

    #[test]
    fn test_codes_are_unique() {
        // The HashMap would silently drop duplicates; compare against the
        // raw entry count to catch a bad resource edit
        let entries: Vec<serde_json::Value> = serde_json::from_str(MEDALS_JSON).unwrap();
        assert_eq!(entries.len(), medal_count());
    }
}
