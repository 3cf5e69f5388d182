use super::{per_minute, percentage, round_to};
use crate::api::models::ParticipantDto;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// One player's games on a single champion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerChampionStats {
    pub games: u32,
    pub wins: u32,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
}

impl PlayerChampionStats {
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.games)
    }
}

/// Running totals for one player, plus the averages filled in by [`finalize`].
///
/// [`finalize`]: PlayerStats::finalize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_name: String,
    pub team: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_assists: u64,
    pub total_cs: u64,
    pub total_vision_score: u64,
    pub total_gold_earned: u64,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
    /// Seconds.
    pub total_game_duration: u64,
    pub champions_played: IndexSet<String>,
    pub champion_stats: IndexMap<String, PlayerChampionStats>,

    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,
    pub average_kda: f64,
    pub average_cs_per_min: f64,
    /// Same value as `average_cs_per_min`; older dashboard pages read this key.
    pub average_cs_per_minute: f64,
    pub average_vision_score: f64,
    pub average_gold_per_min: f64,
    pub average_damage_per_min: f64,
    pub winrate: f64,
    pub unique_champions_played: usize,
}

impl PlayerStats {
    pub fn new(player_name: &str, team: &str) -> Self {
        PlayerStats {
            player_name: player_name.to_string(),
            team: team.to_string(),
            ..Default::default()
        }
    }

    pub fn record_game(&mut self, participant: &ParticipantDto, champion: &str, duration: u64) {
        let won = participant.win;

        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.total_kills += participant.kills as u64;
        self.total_deaths += participant.deaths as u64;
        self.total_assists += participant.assists as u64;
        self.total_cs += participant.creep_score();
        self.total_vision_score += participant.vision_score as u64;
        self.total_gold_earned += participant.gold_earned as u64;
        self.total_damage_dealt += participant.total_damage_dealt_to_champions;
        self.total_damage_taken += participant.total_damage_taken;
        self.total_game_duration += duration;

        self.champions_played.insert(champion.to_string());

        let entry = self
            .champion_stats
            .entry(champion.to_string())
            .or_default();
        entry.games += 1;
        if won {
            entry.wins += 1;
        }
        entry.kills += participant.kills as u64;
        entry.deaths += participant.deaths as u64;
        entry.assists += participant.assists as u64;
    }

    pub fn minutes_played(&self) -> f64 {
        self.total_game_duration as f64 / 60.0
    }

    /// (kills + assists) / deaths, with deaths floored at 1.
    pub fn kda(&self) -> f64 {
        (self.total_kills + self.total_assists) as f64 / self.total_deaths.max(1) as f64
    }

    /// Computes the derived fields. Must run once, after the last game.
    pub fn finalize(&mut self) {
        if self.games_played == 0 {
            return;
        }

        let games = self.games_played as f64;
        self.average_kills = round_to(self.total_kills as f64 / games, 2);
        self.average_deaths = round_to(self.total_deaths as f64 / games, 2);
        self.average_assists = round_to(self.total_assists as f64 / games, 2);
        self.average_vision_score = round_to(self.total_vision_score as f64 / games, 2);
        self.winrate = round_to(percentage(self.wins, self.games_played), 2);
        self.unique_champions_played = self.champions_played.len();

        // Rates use the summed duration, not a mean of per-game rates
        if self.minutes_played() > 0.0 {
            let cs_per_min = round_to(per_minute(self.total_cs, self.total_game_duration), 2);
            self.average_cs_per_min = cs_per_min;
            self.average_cs_per_minute = cs_per_min;
            self.average_gold_per_min =
                round_to(per_minute(self.total_gold_earned, self.total_game_duration), 0);
            self.average_damage_per_min =
                round_to(per_minute(self.total_damage_dealt, self.total_game_duration), 0);
        }

        self.average_kda = round_to(self.kda(), 2);
    }
}
