use super::champion_stats::ChampionStats;
use super::document::{Metadata, StatisticsDocument};
use super::per_minute;
use super::player_stats::PlayerStats;
use super::records::{best_players, GameExtremes};
use super::team_stats::TeamStats;
use crate::api::models::{MatchDto, MatchInfo, Side};
use crate::champions::ChampionTable;
use crate::error::MatchError;
use crate::roster::{IdentityResolver, RosterTable, UNKNOWN_TEAM};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// `match_details.json`: match id → raw match-v5 payload, in file order.
pub type MatchCollection = IndexMap<String, Value>;

/// Turns a match collection and a roster into a [`StatisticsDocument`].
///
/// Holds no state between calls; every [`compute`](Self::compute) folds into
/// fresh accumulators.
pub struct StatsCalculator {
    champions: ChampionTable,
}

impl StatsCalculator {
    pub fn new(champions: ChampionTable) -> Self {
        StatsCalculator { champions }
    }

    pub fn compute(&self, matches: &MatchCollection, roster: &RosterTable) -> StatisticsDocument {
        info!("Calculating stats for {} matches", matches.len());

        let resolver = IdentityResolver::new(roster);
        let mut accumulator = Accumulator::default();
        let mut processed = 0;
        let mut errors = 0;

        for (match_id, raw) in matches {
            match validate_match(raw) {
                Ok((info, duration)) => {
                    accumulator.fold(match_id, &info, duration, &resolver, &self.champions);
                    processed += 1;
                }
                Err(e) => {
                    warn!("Match {}: {}, skipping", match_id, e);
                    errors += 1;
                }
            }
        }

        info!("Processed {} matches, {} errors", processed, errors);

        accumulator.finish(processed, errors)
    }
}

impl Default for StatsCalculator {
    fn default() -> Self {
        Self::new(ChampionTable::embedded())
    }
}

/// Aggregates with the embedded champion table.
pub fn calculate_stats(matches: &MatchCollection, roster: &RosterTable) -> StatisticsDocument {
    StatsCalculator::default().compute(matches, roster)
}

/// Decodes a payload and checks it can be folded. Nothing is mutated before
/// this passes, so a rejected match leaves no partial trace.
fn validate_match(raw: &Value) -> Result<(MatchInfo, u64), MatchError> {
    let dto = MatchDto::deserialize(raw)?;
    let duration = coerce_duration(&dto.info.game_duration)?;

    if duration <= 0 {
        return Err(MatchError::NonPositiveDuration(duration));
    }
    if dto.info.participants.is_empty() {
        return Err(MatchError::NoParticipants);
    }

    Ok((dto.info, duration as u64))
}

/// Integer seconds from a number, a numeric string, or nothing (0).
pub fn coerce_duration(raw: &Value) -> Result<i64, MatchError> {
    match raw {
        Value::Null => Ok(0),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(|| MatchError::InvalidDuration(number.to_string())),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| MatchError::InvalidDuration(text.clone()))
        }
        other => Err(MatchError::InvalidDuration(other.to_string())),
    }
}

/// Mutable state for one `compute` call.
#[derive(Default)]
struct Accumulator {
    extremes: GameExtremes,
    champions: ChampionStats,
    players: IndexMap<String, PlayerStats>,
    teams: IndexMap<String, TeamStats>,
}

impl Accumulator {
    fn fold(
        &mut self,
        match_id: &str,
        info: &MatchInfo,
        duration: u64,
        resolver: &IdentityResolver,
        champion_table: &ChampionTable,
    ) {
        let label = match_label(info, resolver);
        self.extremes.observe_duration(match_id, duration, &label);

        let side_wins: HashMap<Side, bool> = info
            .teams
            .iter()
            .filter_map(|team| Side::from_team_id(team.team_id).map(|side| (side, team.win)))
            .collect();

        let mut teams_counted: HashSet<&str> = HashSet::new();
        let mut match_kills: u64 = 0;

        for participant in &info.participants {
            let resolved = resolver.resolve(participant.puuid.as_deref());
            let champion = champion_table
                .canonical_name(participant.champion_name.as_deref().unwrap_or("Unknown"));

            if let Some(side) = Side::from_team_id(participant.team_id) {
                if side_wins.get(&side).is_some_and(|&won| won != participant.win) {
                    debug!(
                        "Match {}: {} win flag disagrees with side {}",
                        match_id,
                        resolved.display_name,
                        side.team_id()
                    );
                }
            }

            self.players
                .entry(resolved.display_name.clone())
                .or_insert_with(|| PlayerStats::new(&resolved.display_name, &resolved.team))
                .record_game(participant, &champion, duration);

            let team = self
                .teams
                .entry(resolved.team.clone())
                .or_insert_with(|| TeamStats::new(&resolved.team));

            // The match counts once per team; kills and deaths count for everyone
            if teams_counted.insert(resolved.team.as_str()) {
                team.record_game(participant.win, duration);
            }
            team.add_participant(participant.kills, participant.deaths);

            self.champions.add_pick(&champion, participant.win);

            self.extremes
                .observe_vision(match_id, participant.vision_score, resolved, &champion);
            let cs_per_min = per_minute(participant.creep_score(), duration);
            self.extremes
                .observe_cs_per_min(match_id, cs_per_min, resolved, &champion);

            match_kills += participant.kills as u64;
        }

        self.extremes.observe_match_kills(match_id, match_kills, &label);

        // Bans are counted per entry, so a champion banned by both sides counts twice
        for team in &info.teams {
            for ban in &team.bans {
                if let Some(champion) = champion_table.name_for_id(ban.champion_id) {
                    self.champions.add_ban(champion);
                }
            }
        }
    }

    fn finish(mut self, processed: usize, errors: usize) -> StatisticsDocument {
        for player in self.players.values_mut() {
            player.finalize();
        }
        for team in self.teams.values_mut() {
            team.finalize();
        }

        let records = best_players(&self.players);

        self.champions.finalize();
        let most_picked_champion = self.champions.most_picked();
        let most_banned_champion = self.champions.most_banned();

        let metadata = Metadata {
            total_matches_processed: processed,
            total_errors: errors,
            total_players: self.players.len(),
            total_teams: self.teams.len(),
        };

        let GameExtremes {
            longest_game,
            shortest_game,
            most_kills_game,
            least_kills_game,
            highest_vision_game,
            highest_cs_per_min_game,
            ..
        } = self.extremes;

        StatisticsDocument {
            longest_game,
            shortest_game,
            most_kills_game,
            least_kills_game,
            highest_vision_game,
            highest_cs_per_min_game,
            champion_stats: self.champions,
            player_stats: self.players,
            team_stats: self.teams,
            records,
            most_picked_champion,
            most_banned_champion,
            metadata,
        }
    }
}

/// `"{blue team} vs {red team}"`, each side named after its first listed
/// participant.
fn match_label(info: &MatchInfo, resolver: &IdentityResolver) -> String {
    let mut blue: Option<&str> = None;
    let mut red: Option<&str> = None;

    for participant in &info.participants {
        let slot = match Side::from_team_id(participant.team_id) {
            Some(Side::Blue) => &mut blue,
            Some(Side::Red) => &mut red,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(resolver.resolve(participant.puuid.as_deref()).team.as_str());
        }
    }

    format!(
        "{} vs {}",
        blue.unwrap_or(UNKNOWN_TEAM),
        red.unwrap_or(UNKNOWN_TEAM)
    )
}
