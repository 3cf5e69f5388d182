pub mod calculator;
pub mod champion_stats;
pub mod document;
pub mod player_stats;
pub mod records;
pub mod team_stats;

/// Rounds half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `total` per minute over `seconds`; 0 when no time was played.
pub fn per_minute(total: u64, seconds: u64) -> f64 {
    let minutes = seconds as f64 / 60.0;
    if minutes > 0.0 {
        total as f64 / minutes
    } else {
        0.0
    }
}

/// Share of `part` in `whole` as a percentage; 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// `M:SS`, e.g. `25:07`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
