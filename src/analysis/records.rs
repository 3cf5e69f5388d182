use super::player_stats::PlayerStats;
use super::{format_duration, round_to};
use crate::roster::ResolvedPlayer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Single-game extremes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRecord {
    pub match_id: Option<String>,
    pub duration: u64,
    pub teams: Option<String>,
    pub formatted: String,
}

impl Default for DurationRecord {
    fn default() -> Self {
        DurationRecord {
            match_id: None,
            duration: 0,
            teams: None,
            formatted: format_duration(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KillsRecord {
    pub match_id: Option<String>,
    pub kills: u64,
    pub teams: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionRecord {
    pub match_id: Option<String>,
    pub score: u32,
    pub player: Option<String>,
    pub team: Option<String>,
    pub champion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsPerMinRecord {
    pub match_id: Option<String>,
    pub cs_per_min: f64,
    pub player: Option<String>,
    pub team: Option<String>,
    pub champion: Option<String>,
}

/// Running holders of the single-game extremes. Every comparison is strict,
/// so the first match reaching a value keeps it.
#[derive(Debug, Default)]
pub struct GameExtremes {
    pub longest_game: DurationRecord,
    pub shortest_game: DurationRecord,
    pub most_kills_game: KillsRecord,
    pub least_kills_game: KillsRecord,
    pub highest_vision_game: VisionRecord,
    pub highest_cs_per_min_game: CsPerMinRecord,
    // Unrounded holder value; the record itself reports one decimal
    best_cs_per_min: f64,
}

impl GameExtremes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_duration(&mut self, match_id: &str, duration: u64, teams: &str) {
        let record = || DurationRecord {
            match_id: Some(match_id.to_string()),
            duration,
            teams: Some(teams.to_string()),
            formatted: format_duration(duration as f64),
        };

        if duration > self.longest_game.duration {
            self.longest_game = record();
        }

        if self.shortest_game.match_id.is_none() || duration < self.shortest_game.duration {
            self.shortest_game = record();
        }
    }

    pub fn observe_match_kills(&mut self, match_id: &str, kills: u64, teams: &str) {
        let record = || KillsRecord {
            match_id: Some(match_id.to_string()),
            kills,
            teams: Some(teams.to_string()),
        };

        if kills > self.most_kills_game.kills {
            self.most_kills_game = record();
        }

        if self.least_kills_game.match_id.is_none() || kills < self.least_kills_game.kills {
            self.least_kills_game = record();
        }
    }

    pub fn observe_vision(
        &mut self,
        match_id: &str,
        score: u32,
        player: &ResolvedPlayer,
        champion: &str,
    ) {
        if score > self.highest_vision_game.score {
            self.highest_vision_game = VisionRecord {
                match_id: Some(match_id.to_string()),
                score,
                player: Some(player.display_name.clone()),
                team: Some(player.team.clone()),
                champion: Some(champion.to_string()),
            };
        }
    }

    pub fn observe_cs_per_min(
        &mut self,
        match_id: &str,
        cs_per_min: f64,
        player: &ResolvedPlayer,
        champion: &str,
    ) {
        if cs_per_min > self.best_cs_per_min {
            self.best_cs_per_min = cs_per_min;
            self.highest_cs_per_min_game = CsPerMinRecord {
                match_id: Some(match_id.to_string()),
                cs_per_min: round_to(cs_per_min, 1),
                player: Some(player.display_name.clone()),
                team: Some(player.team.clone()),
                champion: Some(champion.to_string()),
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Best player per statistic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStat {
    TotalKills,
    TotalDeaths,
    TotalAssists,
    AverageKills,
    AverageDeaths,
    AverageAssists,
    AverageKda,
    AverageCsPerMin,
    AverageVisionScore,
    AverageGoldPerMin,
    AverageDamagePerMin,
    UniqueChampionsPlayed,
    Winrate,
}

impl RecordStat {
    pub const ALL: [RecordStat; 13] = [
        RecordStat::TotalKills,
        RecordStat::TotalDeaths,
        RecordStat::TotalAssists,
        RecordStat::AverageKills,
        RecordStat::AverageDeaths,
        RecordStat::AverageAssists,
        RecordStat::AverageKda,
        RecordStat::AverageCsPerMin,
        RecordStat::AverageVisionScore,
        RecordStat::AverageGoldPerMin,
        RecordStat::AverageDamagePerMin,
        RecordStat::UniqueChampionsPlayed,
        RecordStat::Winrate,
    ];

    /// Key in the `records` map, matching the player field name.
    pub fn key(self) -> &'static str {
        match self {
            RecordStat::TotalKills => "total_kills",
            RecordStat::TotalDeaths => "total_deaths",
            RecordStat::TotalAssists => "total_assists",
            RecordStat::AverageKills => "average_kills",
            RecordStat::AverageDeaths => "average_deaths",
            RecordStat::AverageAssists => "average_assists",
            RecordStat::AverageKda => "average_kda",
            RecordStat::AverageCsPerMin => "average_cs_per_min",
            RecordStat::AverageVisionScore => "average_vision_score",
            RecordStat::AverageGoldPerMin => "average_gold_per_min",
            RecordStat::AverageDamagePerMin => "average_damage_per_min",
            RecordStat::UniqueChampionsPlayed => "unique_champions_played",
            RecordStat::Winrate => "winrate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStat::TotalKills => "Total Kills",
            RecordStat::TotalDeaths => "Total Deaths",
            RecordStat::TotalAssists => "Total Assists",
            RecordStat::AverageKills => "Average Kills",
            RecordStat::AverageDeaths => "Average Deaths",
            RecordStat::AverageAssists => "Average Assists",
            RecordStat::AverageKda => "Average KDA",
            RecordStat::AverageCsPerMin => "Average CS/min",
            RecordStat::AverageVisionScore => "Average Vision Score",
            RecordStat::AverageGoldPerMin => "Average Gold/min",
            RecordStat::AverageDamagePerMin => "Average Damage/min",
            RecordStat::UniqueChampionsPlayed => "Unique Champions",
            RecordStat::Winrate => "Winrate %",
        }
    }

    pub fn value(self, stats: &PlayerStats) -> f64 {
        match self {
            RecordStat::TotalKills => stats.total_kills as f64,
            RecordStat::TotalDeaths => stats.total_deaths as f64,
            RecordStat::TotalAssists => stats.total_assists as f64,
            RecordStat::AverageKills => stats.average_kills,
            RecordStat::AverageDeaths => stats.average_deaths,
            RecordStat::AverageAssists => stats.average_assists,
            RecordStat::AverageKda => stats.average_kda,
            RecordStat::AverageCsPerMin => stats.average_cs_per_min,
            RecordStat::AverageVisionScore => stats.average_vision_score,
            RecordStat::AverageGoldPerMin => stats.average_gold_per_min,
            RecordStat::AverageDamagePerMin => stats.average_damage_per_min,
            RecordStat::UniqueChampionsPlayed => stats.unique_champions_played as f64,
            RecordStat::Winrate => stats.winrate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub stat_name: String,
    pub player: Option<String>,
    pub team: Option<String>,
    pub value: f64,
}

/// Best player for every [`RecordStat`]. Players must already be finalized.
pub fn best_players(players: &IndexMap<String, PlayerStats>) -> IndexMap<String, PlayerRecord> {
    RecordStat::ALL
        .iter()
        .map(|&stat| (stat.key().to_string(), best_player(players, stat)))
        .collect()
}

fn best_player(players: &IndexMap<String, PlayerStats>, stat: RecordStat) -> PlayerRecord {
    let mut best: Option<(&String, &PlayerStats, f64)> = None;

    for (name, stats) in players {
        let value = stat.value(stats);
        match best {
            Some((_, _, best_value)) if value <= best_value => {}
            _ => best = Some((name, stats, value)),
        }
    }

    match best {
        Some((name, stats, value)) => PlayerRecord {
            stat_name: stat.label().to_string(),
            player: Some(name.clone()),
            team: Some(stats.team.clone()),
            value: round_to(value, 2),
        },
        None => PlayerRecord {
            stat_name: stat.label().to_string(),
            player: None,
            team: None,
            value: 0.0,
        },
    }
}
