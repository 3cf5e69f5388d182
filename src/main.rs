use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use occilan_stats::analysis::document::Metadata;
use occilan_stats::config::Config;
use occilan_stats::display::output::{
    display_error, display_info, display_statistics, display_success, display_warning,
};
use occilan_stats::storage::{list_editions, EditionStore};
use occilan_stats::{AppError, ChampionTable, StatisticsDocument, StatsCalculator};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "OcciLan Stats")]
#[command(about = "Compute tournament statistics from stored match data", long_about = None)]
struct Args {
    /// Directory holding the edition_N folders (overrides OCCILAN_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Champion table to use instead of the built-in one
    /// (our format or a Data Dragon champion.json)
    #[arg(long, global = true)]
    champions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate match_details.json into general_stats.json and team_stats.json
    Compute {
        /// Edition number
        #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
        edition: Option<u32>,

        /// Process every edition in the data directory
        #[arg(long)]
        all: bool,

        /// Print the statistics without writing any file
        #[arg(long)]
        no_save: bool,

        /// Number of champions to display (default: 10)
        #[arg(short, long, default_value = "10")]
        top_n: usize,
    },

    /// Print the saved statistics of an edition
    Show {
        /// Edition number
        #[arg(short, long)]
        edition: u32,

        /// Number of champions to display (default: 10)
        #[arg(short, long, default_value = "10")]
        top_n: usize,
    },

    /// List the editions found in the data directory
    List,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(champions) = args.champions {
        config.champion_table = Some(champions);
    }

    init_tracing(&config);
    tracing::debug!("Using data directory {}", config.data_dir.display());

    match args.command {
        Command::Compute {
            edition,
            all,
            no_save,
            top_n,
        } => {
            let calculator = StatsCalculator::new(load_champion_table(&config)?);
            let editions = if all {
                list_editions(&config.data_dir)?
            } else {
                edition.into_iter().collect()
            };

            if editions.is_empty() {
                bail!("No editions found in {}", config.data_dir.display());
            }

            if editions.len() == 1 {
                let store = open_store(&config, editions[0])?;
                let stats = compute_edition(&calculator, &store, !no_save)?;
                display_statistics(store.edition, &stats, top_n);
            } else {
                let pb = ProgressBar::new(editions.len() as u64);
                pb.set_message("Computing editions");
                let (summaries, failed) =
                    compute_editions(&config, &calculator, editions, !no_save, &pb);

                pb.finish_with_message("✓ Editions computed");

                for (edition, metadata) in summaries {
                    display_success(&format!(
                        "Edition {}: {} matches, {} players, {} teams",
                        edition,
                        metadata.total_matches_processed,
                        metadata.total_players,
                        metadata.total_teams
                    ));
                    if metadata.total_errors > 0 {
                        display_warning(&format!(
                            "Edition {}: {} matches skipped",
                            edition, metadata.total_errors
                        ));
                    }
                }

                if !failed.is_empty() {
                    bail!("Failed to compute editions {:?}", failed);
                }
            }
        }

        Command::Show { edition, top_n } => {
            let store = open_store(&config, edition)?;
            let stats = store
                .load_general_stats()
                .context("Run `compute` for this edition first")?;
            display_statistics(edition, &stats, top_n);
        }

        Command::List => {
            let editions = list_editions(&config.data_dir)?;
            if editions.is_empty() {
                display_info(&format!(
                    "No editions in {}",
                    config.data_dir.display()
                ));
            }
            for edition in editions {
                let store = EditionStore::new(&config.data_dir, edition);
                match store.load_general_stats() {
                    Ok(stats) => display_success(&format!(
                        "Edition {} ({} matches, {} teams)",
                        edition,
                        stats.metadata.total_matches_processed,
                        stats.metadata.total_teams
                    )),
                    Err(AppError::MissingDocument(_)) => {
                        display_info(&format!("Edition {} (no statistics yet)", edition))
                    }
                    Err(e) => display_warning(&format!("Edition {}: {}", edition, e)),
                }
            }
        }
    }

    Ok(())
}

fn load_champion_table(config: &Config) -> Result<ChampionTable> {
    match &config.champion_table {
        Some(path) => Ok(ChampionTable::from_path(path)?),
        None => Ok(ChampionTable::embedded()),
    }
}

fn open_store(config: &Config, edition: u32) -> Result<EditionStore> {
    let store = EditionStore::new(&config.data_dir, edition).with_backup(config.backup);
    if !store.exists() {
        return Err(AppError::EditionNotFound(edition).into());
    }
    Ok(store)
}

/// Computes every edition, reporting failures without stopping the batch.
fn compute_editions(
    config: &Config,
    calculator: &StatsCalculator,
    editions: Vec<u32>,
    save: bool,
    pb: &ProgressBar,
) -> (Vec<(u32, Metadata)>, Vec<u32>) {
    let mut summaries = Vec::new();
    let mut failed = Vec::new();

    for edition in editions {
        let result = open_store(config, edition)
            .and_then(|store| compute_edition(calculator, &store, save));
        match result {
            Ok(stats) => summaries.push((edition, stats.metadata)),
            Err(e) => {
                pb.suspend(|| display_error(&format!("Edition {}: {:#}", edition, e)));
                failed.push(edition);
            }
        }
        pb.inc(1);
    }

    (summaries, failed)
}

fn compute_edition(
    calculator: &StatsCalculator,
    store: &EditionStore,
    save: bool,
) -> Result<StatisticsDocument> {
    let matches = store
        .load_match_details()
        .with_context(|| format!("Loading matches for edition {}", store.edition))?;
    let roster = store
        .load_roster()
        .with_context(|| format!("Loading roster for edition {}", store.edition))?;

    if matches.is_empty() {
        tracing::warn!("Edition {}: no match details found", store.edition);
    }
    if roster.is_empty() {
        tracing::warn!(
            "Edition {}: empty roster, every player will be unresolved",
            store.edition
        );
    }

    let stats = calculator.compute(&matches, &roster);

    if save {
        store.save_general_stats(&stats)?;
        store.save_team_stats(&stats)?;
        tracing::info!(
            "Edition {}: saved statistics to {}",
            store.edition,
            store.edition_dir().display()
        );
    }

    Ok(stats)
}
