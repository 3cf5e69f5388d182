use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNKNOWN_PLAYER: &str = "Unknown Player";
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// `teams_with_puuid.json`: team name → registered players, in file order.
pub type RosterTable = IndexMap<String, RosterTeam>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterTeam {
    #[serde(default)]
    pub players: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterPlayer {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default, rename = "gameName", skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    // Older exports use snake_case; both spellings may sit on one entry.
    #[serde(default, rename = "game_name", skip_serializing_if = "Option::is_none")]
    pub game_name_snake: Option<String>,
    #[serde(default, rename = "tagLine", skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
    #[serde(default, rename = "tag_line", skip_serializing_if = "Option::is_none")]
    pub tag_line_snake: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl RosterPlayer {
    /// `Name#TAG`, the key players are aggregated under. camelCase keys win
    /// over their snake_case spelling.
    pub fn display_name(&self) -> String {
        let name = self.game_name.as_deref().or(self.game_name_snake.as_deref());
        let tag = self.tag_line.as_deref().or(self.tag_line_snake.as_deref());
        format!("{}#{}", name.unwrap_or("Unknown"), tag.unwrap_or("0000"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub team: String,
    pub display_name: String,
}

impl ResolvedPlayer {
    fn unknown() -> Self {
        ResolvedPlayer {
            team: UNKNOWN_TEAM.to_string(),
            display_name: UNKNOWN_PLAYER.to_string(),
        }
    }
}

/// Maps a participant's PUUID to its roster team and display name.
pub struct IdentityResolver {
    index: HashMap<String, ResolvedPlayer>,
    unknown: ResolvedPlayer,
}

impl IdentityResolver {
    pub fn new(roster: &RosterTable) -> Self {
        let mut index = HashMap::new();

        for (team_name, team) in roster {
            for player in &team.players {
                let Some(puuid) = player.puuid.as_deref().filter(|p| !p.is_empty()) else {
                    continue;
                };

                // First team listing the PUUID keeps it
                index
                    .entry(puuid.to_string())
                    .or_insert_with(|| ResolvedPlayer {
                        team: team_name.clone(),
                        display_name: player.display_name(),
                    });
            }
        }

        IdentityResolver {
            index,
            unknown: ResolvedPlayer::unknown(),
        }
    }

    pub fn resolve(&self, puuid: Option<&str>) -> &ResolvedPlayer {
        puuid
            .and_then(|p| self.index.get(p))
            .unwrap_or(&self.unknown)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
