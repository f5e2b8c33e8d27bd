//! Cross-validation of decoded events against match statistics.
//!
//! The anchor heuristic used by the decoder has no proof of uniqueness:
//! records can be missed, and false-positive anchors can produce spurious
//! events. This module catches both indirectly by comparing per-player
//! aggregate counts (kills, deaths, medals) against an independently
//! fetched stats summary for the same match.
//!
//! Discrepancies are findings, not errors: [`check`] never fails, it
//! returns human-readable messages (empty = consistent). Some mismatches
//! are expected and documented behavior: AI-focused modes count kills
//! against opponents the film never records, and a kill or death right at
//! a match boundary is occasionally dropped by the stream. The game-mode
//! category is included in every message so a reader can recognize those
//! cases.

use std::collections::HashMap;
use std::fmt;

use crate::highlight::{EventKind, HighlightEvent};
use crate::stats::MatchStats;

/// Aggregate event counts for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct EventCounts {
    /// Kill events.
    kills: u32,
    /// Death events.
    deaths: u32,
    /// Medal-award events.
    medals: u32,
}

impl EventCounts {
    /// Tallies one decoded event into the counts. Mode markers carry no
    /// per-player statistic and are ignored.
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Kill => self.kills += 1,
            EventKind::Death => self.deaths += 1,
            EventKind::Medal => self.medals += 1,
            EventKind::Mode => {}
        }
    }
}

impl fmt::Display for EventCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kills / {} deaths / {} medals",
            self.kills, self.deaths, self.medals
        )
    }
}

/// Compares decoded event counts against the reference stats summary.
///
/// For every human player in the summary, the expected counts (summed
/// across all of that player's team associations) are compared against
/// the counts aggregated from `events`. Bots are skipped entirely.
///
/// # Arguments
///
/// * `events` - All highlight events decoded from the match's film
/// * `stats` - The independently fetched stats summary for the match
///
/// # Returns
///
/// One formatted message per mismatching player; an empty vector means
/// the film and the stats agree.
///
/// # Example
///
/// ```
/// use film_parser::stats::MatchStats;
/// use film_parser::validate::check;
///
/// let stats: MatchStats = serde_json::from_str(
///     r#"{ "game_category": "slayer", "players": [] }"#,
/// ).unwrap();
/// assert!(check(&[], &stats).is_empty());
/// ```
#[must_use]
pub fn check(events: &[HighlightEvent], stats: &MatchStats) -> Vec<String> {
    let mut decoded: HashMap<u64, EventCounts> = HashMap::new();
    for event in events {
        decoded
            .entry(event.player_id)
            .or_default()
            .record(event.event_kind);
    }

    let mut findings = Vec::new();

    for player in stats.players.iter().filter(|p| p.is_human) {
        let Some(xuid) = player.xuid() else {
            findings.push(format!(
                "{}: unparseable player identifier {:?} in stats summary ({} match)",
                player.gamertag, player.player_id, stats.game_category
            ));
            continue;
        };

        // A player may have stats against more than one team association
        // (team change mid-match); totals are the sum over all of them.
        let mut expected = EventCounts::default();
        for team in &player.team_stats {
            expected.kills += team.kills;
            expected.deaths += team.deaths;
            expected.medals += team.medals.iter().map(|m| m.count).sum::<u32>();
        }

        let actual = decoded.get(&xuid).copied().unwrap_or_default();

        if expected != actual {
            findings.push(format!(
                "{}: stats list {} but the film contained {} ({} match)",
                player.gamertag, expected, actual, stats.game_category
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::HighlightEvent;

    const XUID: u64 = 2_533_274_823_140_123;

    fn event(player_id: u64, kind: EventKind) -> HighlightEvent {
        let (type_hint, flag, code) = match kind {
            EventKind::Kill => (0x16, false, 0),
            EventKind::Death => (0x12, false, 0),
            EventKind::Mode => (0x08, false, 0),
            EventKind::Medal => (0x14, true, 41),
        };
        HighlightEvent::from_raw(
            player_id,
            "EagleEye".to_string(),
            type_hint,
            flag,
            10_000,
            code,
        )
        .unwrap()
    }

    fn summary(kills: u32, deaths: u32, medals: u32, is_human: bool) -> MatchStats {
        let medal_entries = if medals > 0 {
            format!(r#"[{{ "medal_id": 41, "count": {medals} }}]"#)
        } else {
            "[]".to_string()
        };
        let json = format!(
            r#"{{
                "game_category": "slayer",
                "players": [
                    {{
                        "player_id": "xuid({XUID})",
                        "gamertag": "EagleEye",
                        "is_human": {is_human},
                        "team_stats": [
                            {{ "kills": {kills}, "deaths": {deaths}, "medals": {medal_entries} }}
                        ]
                    }}
                ]
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_matching_counts_produce_no_findings() {
        let events = vec![
            event(XUID, EventKind::Kill),
            event(XUID, EventKind::Kill),
            event(XUID, EventKind::Death),
            event(XUID, EventKind::Medal),
            event(XUID, EventKind::Mode),
        ];
        let stats = summary(2, 1, 1, true);
        assert!(check(&events, &stats).is_empty());
    }

    #[test]
    fn test_missing_kill_produces_one_finding() {
        let events = vec![
            event(XUID, EventKind::Kill),
            event(XUID, EventKind::Death),
            event(XUID, EventKind::Medal),
        ];
        let stats = summary(2, 1, 1, true);

        let findings = check(&events, &stats);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("EagleEye"));
        assert!(findings[0].contains("slayer"));
    }

    #[test]
    fn test_bots_are_excluded() {
        // Wildly mismatched counts, but the player is a bot
        let stats = summary(10, 10, 10, false);
        assert!(check(&[], &stats).is_empty());
    }

    #[test]
    fn test_mode_events_do_not_count() {
        let events = vec![event(XUID, EventKind::Mode), event(XUID, EventKind::Mode)];
        let stats = summary(0, 0, 0, true);
        assert!(check(&events, &stats).is_empty());
    }

    #[test]
    fn test_team_change_sums_all_associations() {
        let json = format!(
            r#"{{
                "game_category": "ctf",
                "players": [
                    {{
                        "player_id": "xuid({XUID})",
                        "gamertag": "EagleEye",
                        "is_human": true,
                        "team_stats": [
                            {{ "kills": 3, "deaths": 2, "medals": [{{ "medal_id": 1, "count": 1 }}] }},
                            {{ "kills": 1, "deaths": 0, "medals": [{{ "medal_id": 41, "count": 1 }}] }}
                        ]
                    }}
                ]
            }}"#
        );
        let stats: MatchStats = serde_json::from_str(&json).unwrap();

        let mut events = Vec::new();
        for _ in 0..4 {
            events.push(event(XUID, EventKind::Kill));
        }
        events.push(event(XUID, EventKind::Death));
        events.push(event(XUID, EventKind::Death));
        events.push(event(XUID, EventKind::Medal));
        events.push(event(XUID, EventKind::Medal));

        assert!(check(&events, &stats).is_empty());
    }

    #[test]
    fn test_unparseable_identifier_is_reported_not_fatal() {
        let json = r#"{
            "game_category": "slayer",
            "players": [
                {
                    "player_id": "not-an-id",
                    "gamertag": "EagleEye",
                    "is_human": true,
                    "team_stats": []
                }
            ]
        }"#;
        let stats: MatchStats = serde_json::from_str(json).unwrap();

        let findings = check(&[], &stats);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("unparseable"));
    }

    #[test]
    fn test_events_from_unlisted_players_are_ignored() {
        // The film can contain events for players absent from the stats
        // summary; only listed players are checked
        let events = vec![event(2_600_000_000_000_000, EventKind::Kill)];
        let stats = summary(0, 0, 0, true);
        assert!(check(&events, &stats).is_empty());
    }
}
