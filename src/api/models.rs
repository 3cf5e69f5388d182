use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

// Match V5 response
#[derive(Debug, Deserialize, Default)]
pub struct MatchDto {
    #[serde(default)]
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds. Kept raw: older payloads and hand-edited files carry it as a
    /// string or a float.
    #[serde(default)]
    pub game_duration: Value,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub team_id: i32,
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: u64,
    #[serde(default)]
    pub total_damage_taken: u64,
    #[serde(default)]
    pub win: bool,
}

impl ParticipantDto {
    /// Lane minions plus jungle monsters.
    pub fn creep_score(&self) -> u64 {
        self.total_minions_killed as u64 + self.neutral_minions_killed as u64
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    pub team_id: i32,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub bans: Vec<BanDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BanDto {
    /// -1 when the pick turn was skipped.
    #[serde(default)]
    pub champion_id: i64,
}

/// The two sides of a Summoner's Rift match, tagged 100 and 200 in payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_id(team_id: i32) -> Option<Self> {
        match team_id {
            100 => Some(Side::Blue),
            200 => Some(Side::Red),
            _ => None,
        }
    }

    pub fn team_id(self) -> i32 {
        match self {
            Side::Blue => 100,
            Side::Red => 200,
        }
    }
}

// Data Dragon Champion response
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
}
