use super::champion_stats::{ChampionStats, MostBanned, MostPicked};
use super::player_stats::PlayerStats;
use super::records::{CsPerMinRecord, DurationRecord, KillsRecord, PlayerRecord, VisionRecord};
use super::team_stats::TeamStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything computed for one edition, saved as `general_stats.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsDocument {
    pub longest_game: DurationRecord,
    pub shortest_game: DurationRecord,
    pub most_kills_game: KillsRecord,
    pub least_kills_game: KillsRecord,
    pub highest_vision_game: VisionRecord,
    pub highest_cs_per_min_game: CsPerMinRecord,
    pub champion_stats: ChampionStats,
    pub player_stats: IndexMap<String, PlayerStats>,
    pub team_stats: IndexMap<String, TeamStats>,
    pub records: IndexMap<String, PlayerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_picked_champion: Option<MostPicked>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_banned_champion: Option<MostBanned>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_matches_processed: usize,
    /// Matches left out of every aggregate (bad duration, no participants,
    /// undecodable payload).
    pub total_errors: usize,
    pub total_players: usize,
    pub total_teams: usize,
}

/// One entry of `team_stats.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBreakdown {
    pub team_stats: TeamStats,
    pub players: IndexMap<String, PlayerStats>,
}

impl StatisticsDocument {
    /// Team stats with the players whose record names that team.
    pub fn team_breakdown(&self) -> IndexMap<String, TeamBreakdown> {
        self.team_stats
            .iter()
            .map(|(team_name, team_stats)| {
                let players = self
                    .players_of(team_name)
                    .map(|player| (player.player_name.clone(), player.clone()))
                    .collect();

                (
                    team_name.clone(),
                    TeamBreakdown {
                        team_stats: team_stats.clone(),
                        players,
                    },
                )
            })
            .collect()
    }

    pub fn players_of<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a PlayerStats> {
        self.player_stats
            .values()
            .filter(move |player| player.team == team_name)
    }
}
