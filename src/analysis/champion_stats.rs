use super::{percentage, round_to};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tournament-wide pick, ban and win counts, keyed by canonical champion name
/// in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionStats {
    pub picks: IndexMap<String, u32>,
    pub bans: IndexMap<String, u32>,
    pub wins: IndexMap<String, u32>,
    #[serde(default)]
    pub winrates: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostPicked {
    pub champion: String,
    pub picks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostBanned {
    pub champion: String,
    pub bans: u32,
}

impl ChampionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pick(&mut self, champion: &str, won: bool) {
        *self.picks.entry(champion.to_string()).or_insert(0) += 1;
        let wins = self.wins.entry(champion.to_string()).or_insert(0);
        if won {
            *wins += 1;
        }
    }

    pub fn add_ban(&mut self, champion: &str) {
        *self.bans.entry(champion.to_string()).or_insert(0) += 1;
    }

    pub fn win_rate(&self, champion: &str) -> f64 {
        let picks = self.picks.get(champion).copied().unwrap_or(0);
        let wins = self.wins.get(champion).copied().unwrap_or(0);
        percentage(wins, picks)
    }

    /// Fills `winrates` from the final pick and win counts.
    pub fn finalize(&mut self) {
        self.winrates = self
            .picks
            .keys()
            .map(|champion| (champion.clone(), round_to(self.win_rate(champion), 2)))
            .collect();
    }

    pub fn most_picked(&self) -> Option<MostPicked> {
        first_max(&self.picks).map(|(champion, picks)| MostPicked { champion, picks })
    }

    pub fn most_banned(&self) -> Option<MostBanned> {
        first_max(&self.bans).map(|(champion, bans)| MostBanned { champion, bans })
    }

    /// Picked champions by descending pick count, insertion order among ties.
    pub fn by_picks(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .picks
            .iter()
            .map(|(champion, picks)| (champion.as_str(), *picks))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Highest count; on ties the entry inserted first wins.
fn first_max(counts: &IndexMap<String, u32>) -> Option<(String, u32)> {
    let mut best: Option<(&String, u32)> = None;
    for (champion, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((champion, count)),
        }
    }
    best.map(|(champion, count)| (champion.clone(), count))
}
