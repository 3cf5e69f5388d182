use crate::analysis::document::StatisticsDocument;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TeamRow {
    team: String,
    games: String,
    record: String,
    win_rate: String,
    kills: String,
    deaths: String,
    avg_duration: String,
}

#[derive(Tabled)]
struct RecordRow {
    stat: String,
    player: String,
    team: String,
    value: String,
}

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    picks: String,
    bans: String,
    win_rate: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_statistics(edition: u32, stats: &StatisticsDocument, top_n: usize) {
    println!(
        "\n{}",
        format!("📊 Edition {} Statistics", edition).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let meta = &stats.metadata;
    println!(
        "{} {} matches, {} players, {} teams",
        "📈 Processed:".bold(),
        meta.total_matches_processed.to_string().green(),
        meta.total_players,
        meta.total_teams
    );
    if meta.total_errors > 0 {
        println!(
            "{} {} matches skipped (see logs)",
            "⚠️".yellow(),
            meta.total_errors.to_string().red()
        );
    }

    display_game_extremes(stats);
    display_teams(stats);
    display_records(stats);
    display_champions(stats, top_n);
}

fn display_game_extremes(stats: &StatisticsDocument) {
    if stats.longest_game.match_id.is_none() {
        return;
    }

    println!("\n{}", "⏱️  GAME RECORDS".bold().cyan());
    println!(
        "  Longest game:  {} ({})",
        stats.longest_game.formatted.bold(),
        stats.longest_game.teams.as_deref().unwrap_or("-")
    );
    println!(
        "  Shortest game: {} ({})",
        stats.shortest_game.formatted.bold(),
        stats.shortest_game.teams.as_deref().unwrap_or("-")
    );
    println!(
        "  Most kills:    {} ({})",
        stats.most_kills_game.kills.to_string().bold(),
        stats.most_kills_game.teams.as_deref().unwrap_or("-")
    );
    println!(
        "  Least kills:   {} ({})",
        stats.least_kills_game.kills.to_string().bold(),
        stats.least_kills_game.teams.as_deref().unwrap_or("-")
    );

    let vision = &stats.highest_vision_game;
    if let Some(player) = &vision.player {
        println!(
            "  Best vision:   {} by {} on {}",
            vision.score.to_string().bold(),
            player,
            vision.champion.as_deref().unwrap_or("-")
        );
    }

    let farm = &stats.highest_cs_per_min_game;
    if let Some(player) = &farm.player {
        println!(
            "  Best CS/min:   {} by {} on {}",
            format!("{:.1}", farm.cs_per_min).bold(),
            player,
            farm.champion.as_deref().unwrap_or("-")
        );
    }
}

fn display_teams(stats: &StatisticsDocument) {
    if stats.team_stats.is_empty() {
        return;
    }

    println!("\n{}", "🏆 TEAMS".bold().cyan());

    let mut teams: Vec<_> = stats.team_stats.values().collect();
    teams.sort_by(|a, b| b.winrate.partial_cmp(&a.winrate).unwrap_or(std::cmp::Ordering::Equal));

    let rows: Vec<TeamRow> = teams
        .into_iter()
        .map(|team| TeamRow {
            team: team.team_name.clone(),
            games: team.games_played.to_string(),
            record: format!("{}W / {}L", team.wins, team.losses),
            win_rate: format!("{:.1}%", team.winrate),
            kills: team.total_kills.to_string(),
            deaths: team.total_deaths.to_string(),
            avg_duration: team.average_game_duration_formatted.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_records(stats: &StatisticsDocument) {
    if stats.player_stats.is_empty() {
        return;
    }

    println!("\n{}", "🥇 PLAYER RECORDS".bold().cyan());

    let rows: Vec<RecordRow> = stats
        .records
        .values()
        .map(|record| RecordRow {
            stat: record.stat_name.clone(),
            player: record.player.clone().unwrap_or_else(|| "-".to_string()),
            team: record.team.clone().unwrap_or_else(|| "-".to_string()),
            value: format!("{:.2}", record.value),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_champions(stats: &StatisticsDocument, top_n: usize) {
    let champions = &stats.champion_stats;
    if champions.picks.is_empty() {
        return;
    }

    println!("\n{}", format!("🐉 TOP {} CHAMPIONS", top_n).bold().cyan());

    let rows: Vec<ChampionRow> = champions
        .by_picks()
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, (champion, picks))| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: champion.to_string(),
            picks: picks.to_string(),
            bans: champions.bans.get(champion).copied().unwrap_or(0).to_string(),
            win_rate: format!("{:.1}%", champions.win_rate(champion)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(most_banned) = &stats.most_banned_champion {
        println!(
            "\n{} {} ({} bans)",
            "🚫 Most banned:".bold().red(),
            most_banned.champion,
            most_banned.bans
        );
    }

    println!();
}
