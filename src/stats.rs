//! Reference match-statistics data model.
//!
//! The validator cross-checks decoded film events against an
//! authoritative per-player stats summary for the same match. The
//! summary is fetched by the host system from an unrelated stats
//! endpoint and handed over as plain data; this module only defines its
//! shape and the identifier normalization between the two sources.
//!
//! # Identifier forms
//!
//! The film stream carries raw numeric player identifiers (XUIDs), while
//! the stats summary wraps them in a string form such as
//! `"xuid(2533274823140123)"`. [`parse_wrapped_xuid`] normalizes the
//! wrapped form at the comparison boundary.

use serde::Deserialize;

/// Per-match statistics summary used as the validation reference.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchStats {
    /// Game-mode category label for the match (e.g. `"slayer"`).
    ///
    /// Included in discrepancy messages so a reader can recognize modes
    /// that are structurally unreliable (AI-focused modes count kills
    /// against opponents the film never records).
    pub game_category: String,

    /// Per-player entries for the match.
    pub players: Vec<PlayerStats>,
}

/// Statistics for one player across the whole match.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStats {
    /// Player identifier in the stats service's wrapped string form.
    pub player_id: String,

    /// Display name, used in discrepancy messages.
    pub gamertag: String,

    /// Whether this is a human player. Bots do not reliably emit
    /// highlight events and are excluded from validation.
    pub is_human: bool,

    /// Stats per team association. A player who changed teams mid-match
    /// has more than one entry; totals are the sum over all of them.
    pub team_stats: Vec<TeamStats>,
}

impl PlayerStats {
    /// Returns the player's raw numeric identifier, if the wrapped form
    /// parses.
    #[must_use]
    pub fn xuid(&self) -> Option<u64> {
        parse_wrapped_xuid(&self.player_id)
    }
}

/// Statistics recorded against one team association.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamStats {
    /// Kill count.
    pub kills: u32,

    /// Death count.
    pub deaths: u32,

    /// Medal awards, one entry per distinct medal id.
    pub medals: Vec<MedalCount>,
}

/// Award count for one medal id.
#[derive(Debug, Clone, Deserialize)]
pub struct MedalCount {
    /// Numeric medal identifier.
    pub medal_id: u32,

    /// Times the medal was awarded.
    pub count: u32,
}

/// Parses a stats-service player identifier into its raw numeric form.
///
/// Accepts the wrapped form `"xuid(N)"` as well as a bare decimal
/// string. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use film_parser::stats::parse_wrapped_xuid;
///
/// assert_eq!(
///     parse_wrapped_xuid("xuid(2533274823140123)"),
///     Some(2_533_274_823_140_123)
/// );
/// assert_eq!(parse_wrapped_xuid("2533274823140123"), Some(2_533_274_823_140_123));
/// assert_eq!(parse_wrapped_xuid("bid(1.5)"), None);
/// ```
#[must_use]
pub fn parse_wrapped_xuid(id: &str) -> Option<u64> {
    let inner = id
        .strip_prefix("xuid(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(id);

    inner.parse().ok()
}
