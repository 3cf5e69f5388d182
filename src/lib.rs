//! Tournament statistics for League of Legends editions.
//!
//! [`analysis::calculator::StatsCalculator`] folds a match collection
//! (`match_details.json`) and a roster (`teams_with_puuid.json`) into a
//! [`analysis::document::StatisticsDocument`]. The rest of the crate loads and
//! saves those documents and prints them.

pub mod analysis;
pub mod api;
pub mod champions;
pub mod config;
pub mod display;
pub mod error;
pub mod roster;
pub mod storage;

pub use analysis::calculator::{calculate_stats, MatchCollection, StatsCalculator};
pub use analysis::document::StatisticsDocument;
pub use champions::ChampionTable;
pub use error::{AppError, MatchError};
pub use roster::{IdentityResolver, RosterTable};
