use occilan_stats::{MatchCollection, RosterTable};
use serde_json::{json, Value};

/// Builds one participant entry of a match-v5 payload.
#[derive(Clone)]
pub struct ParticipantBuilder {
    puuid: String,
    team_id: i32,
    champion: String,
    kills: u32,
    deaths: u32,
    assists: u32,
    minions: u32,
    monsters: u32,
    vision: u32,
    gold: u32,
    damage_dealt: u64,
    damage_taken: u64,
    win: bool,
}

impl ParticipantBuilder {
    pub fn new(puuid: &str, team_id: i32) -> Self {
        Self {
            puuid: puuid.to_string(),
            team_id,
            champion: "Ahri".to_string(),
            kills: 0,
            deaths: 0,
            assists: 0,
            minions: 0,
            monsters: 0,
            vision: 10,
            gold: 10_000,
            damage_dealt: 15_000,
            damage_taken: 15_000,
            win: false,
        }
    }

    pub fn champion(mut self, champion: &str) -> Self {
        self.champion = champion.to_string();
        self
    }

    pub fn kda(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self
    }

    pub fn cs(mut self, minions: u32, monsters: u32) -> Self {
        self.minions = minions;
        self.monsters = monsters;
        self
    }

    pub fn vision(mut self, vision: u32) -> Self {
        self.vision = vision;
        self
    }

    pub fn win(mut self, win: bool) -> Self {
        self.win = win;
        self
    }

    pub fn build(&self) -> Value {
        json!({
            "puuid": self.puuid,
            "teamId": self.team_id,
            "championName": self.champion,
            "kills": self.kills,
            "deaths": self.deaths,
            "assists": self.assists,
            "totalMinionsKilled": self.minions,
            "neutralMinionsKilled": self.monsters,
            "visionScore": self.vision,
            "goldEarned": self.gold,
            "totalDamageDealtToChampions": self.damage_dealt,
            "totalDamageTaken": self.damage_taken,
            "win": self.win
        })
    }
}

/// Builds a full match payload (`{"info": {...}}`).
pub struct MatchBuilder {
    duration: Value,
    participants: Vec<ParticipantBuilder>,
    blue_win: bool,
    blue_bans: Vec<i64>,
    red_bans: Vec<i64>,
}

impl MatchBuilder {
    pub fn new(duration: u64) -> Self {
        Self::with_raw_duration(json!(duration))
    }

    pub fn with_raw_duration(duration: Value) -> Self {
        Self {
            duration,
            participants: Vec::new(),
            blue_win: true,
            blue_bans: Vec::new(),
            red_bans: Vec::new(),
        }
    }

    /// Five blue players `{blue}_1..5` against five red players `{red}_1..5`,
    /// every participant with the given kills.
    pub fn five_v_five(mut self, blue: &str, red: &str, blue_wins: bool, kills: u32) -> Self {
        self.blue_win = blue_wins;
        for idx in 1..=5 {
            self.participants.push(
                ParticipantBuilder::new(&format!("{}_{}", blue, idx), 100)
                    .kda(kills, 1, 1)
                    .win(blue_wins),
            );
        }
        for idx in 1..=5 {
            self.participants.push(
                ParticipantBuilder::new(&format!("{}_{}", red, idx), 200)
                    .kda(kills, 1, 1)
                    .win(!blue_wins),
            );
        }
        self
    }

    pub fn participant(mut self, participant: ParticipantBuilder) -> Self {
        self.participants.push(participant);
        self
    }

    /// Replaces the participant at `idx`.
    pub fn replace(mut self, idx: usize, participant: ParticipantBuilder) -> Self {
        self.participants[idx] = participant;
        self
    }

    pub fn blue_wins(mut self, blue_win: bool) -> Self {
        self.blue_win = blue_win;
        self
    }

    pub fn bans(mut self, blue: &[i64], red: &[i64]) -> Self {
        self.blue_bans = blue.to_vec();
        self.red_bans = red.to_vec();
        self
    }

    pub fn build(&self) -> Value {
        let bans = |ids: &[i64]| -> Vec<Value> {
            ids.iter().map(|id| json!({ "championId": id })).collect()
        };

        json!({
            "metadata": { "dataVersion": "2" },
            "info": {
                "gameDuration": self.duration,
                "gameCreation": 1_718_000_000_000i64,
                "participants": self.participants.iter().map(|p| p.build()).collect::<Vec<_>>(),
                "teams": [
                    { "teamId": 100, "win": self.blue_win, "bans": bans(&self.blue_bans) },
                    { "teamId": 200, "win": !self.blue_win, "bans": bans(&self.red_bans) }
                ]
            }
        })
    }
}

/// Builds a `teams_with_puuid.json` roster.
#[derive(Default)]
pub struct RosterBuilder {
    teams: serde_json::Map<String, Value>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `{prefix}_1..5` as `{Team}{n}#EUW`.
    pub fn team(mut self, name: &str, prefix: &str) -> Self {
        let players: Vec<Value> = (1..=5)
            .map(|idx| {
                json!({
                    "puuid": format!("{}_{}", prefix, idx),
                    "gameName": format!("{}{}", name, idx),
                    "tagLine": "EUW"
                })
            })
            .collect();
        self.teams
            .insert(name.to_string(), json!({ "players": players }));
        self
    }

    pub fn build(self) -> RosterTable {
        serde_json::from_value(Value::Object(self.teams)).expect("roster should decode")
    }
}

pub fn collection(matches: Vec<(&str, Value)>) -> MatchCollection {
    matches
        .into_iter()
        .map(|(id, payload)| (id.to_string(), payload))
        .collect()
}
