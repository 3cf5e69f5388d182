use super::{format_duration, percentage, round_to};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_kills: u64,
    pub total_deaths: u64,
    /// Seconds, added once per match.
    pub total_game_duration: u64,
    pub winrate: f64,
    pub average_game_duration: f64,
    #[serde(default)]
    pub average_game_duration_formatted: String,
}

impl TeamStats {
    pub fn new(team_name: &str) -> Self {
        TeamStats {
            team_name: team_name.to_string(),
            ..Default::default()
        }
    }

    /// Counts the match itself. Call once per match, for the first of the
    /// team's participants.
    pub fn record_game(&mut self, won: bool, duration: u64) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_game_duration += duration;
    }

    /// Adds one participant's kills and deaths. Call for every participant.
    pub fn add_participant(&mut self, kills: u32, deaths: u32) {
        self.total_kills += kills as u64;
        self.total_deaths += deaths as u64;
    }

    pub fn finalize(&mut self) {
        if self.games_played == 0 {
            return;
        }

        self.winrate = round_to(percentage(self.wins, self.games_played), 2);
        self.average_game_duration =
            round_to(self.total_game_duration as f64 / self.games_played as f64, 0);
        self.average_game_duration_formatted = format_duration(self.average_game_duration);
    }
}
