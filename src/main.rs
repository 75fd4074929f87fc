use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_almanac::calculate::records::HistoryFilter;
use league_almanac::calculate::{
    head_to_head, keepers, power, rank_points, records, standings,
};
use league_almanac::config::EngineConfig;
use league_almanac::models::{
    KeeperCandidate, Matchup, TeamDirectory, TeamId, TeamSeasons, TeamSnapshot, TeamWeekly,
};

#[derive(Parser)]
#[command(name = "league-almanac")]
#[command(about = "Cross-league fantasy sports aggregation and ranking engine")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score team snapshots against the category slate
    Overall {
        /// JSON file with an array of team snapshots
        #[arg(long)]
        snapshots: PathBuf,
    },

    /// Compute power rankings from weekly results
    Power {
        /// JSON file with per-team weekly results
        #[arg(long)]
        weekly: PathBuf,
    },

    /// Replay the head-to-head history of two teams
    HeadToHead {
        /// JSON file with the matchups between the two teams
        #[arg(long)]
        matchups: PathBuf,

        /// First team id
        #[arg(long)]
        team1: String,

        /// Second team id
        #[arg(long)]
        team2: String,
    },

    /// List eligible keepers with their computed rounds
    Keepers {
        /// JSON file with an array of keeper candidates
        #[arg(long)]
        candidates: PathBuf,
    },

    /// Aggregate multi-season standings
    Standings {
        /// JSON file with per-owner season records
        #[arg(long)]
        seasons: PathBuf,

        /// First year to include
        #[arg(long)]
        start_year: Option<i32>,

        /// Last year to include
        #[arg(long)]
        end_year: Option<i32>,

        /// Only owners active in the most recent season
        #[arg(long)]
        active: bool,
    },

    /// League-history records (margins, weeks, seasons)
    Records {
        /// JSON file with the full matchup history
        #[arg(long)]
        matchups: PathBuf,

        /// JSON file with team snapshots for display names
        #[arg(long)]
        snapshots: Option<PathBuf>,

        /// Which record book to compute
        #[arg(long, value_enum)]
        kind: RecordKind,

        /// How many records to include
        #[arg(long, default_value = "10")]
        count: usize,

        /// First year to include
        #[arg(long)]
        start_year: Option<i32>,

        /// Last year to include
        #[arg(long)]
        end_year: Option<i32>,

        /// Include playoff matchups
        #[arg(long)]
        playoffs: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordKind {
    Blowouts,
    Closest,
    BestWeeks,
    WorstWeeks,
    BestSeasons,
    WorstSeasons,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.json_logs);

    let config = if cli.config.exists() {
        EngineConfig::from_file(&cli.config)?
    } else {
        debug!("no config file at {:?}, using defaults", cli.config);
        EngineConfig::default()
    };

    match cli.command {
        Commands::Overall { snapshots } => {
            let snapshots: Vec<TeamSnapshot> = read_json(&snapshots)?;
            let ranking = rank_points::score_teams(&config.slate, &snapshots)?;
            print_json(&ranking)
        }

        Commands::Power { weekly } => {
            let weekly: Vec<TeamWeekly> = read_json(&weekly)?;
            let factors = power::derive_factors(&weekly, &config.thresholds);
            let rankings = power::power_rankings(&factors, &config.power_weights)?;
            print_json(&rankings)
        }

        Commands::HeadToHead {
            matchups,
            team1,
            team2,
        } => {
            let matchups: Vec<Matchup> = read_json(&matchups)?;
            let record = head_to_head::head_to_head(
                &TeamId::from(team1),
                &TeamId::from(team2),
                &matchups,
            )?;
            print_json(&record)
        }

        Commands::Keepers { candidates } => {
            let candidates: Vec<KeeperCandidate> = read_json(&candidates)?;
            let options = keepers::eligible_keepers(&config.keeper, &candidates);
            print_json(&options)
        }

        Commands::Standings {
            seasons,
            start_year,
            end_year,
            active,
        } => {
            let teams: Vec<TeamSeasons> = read_json(&seasons)?;
            let range = match (start_year, end_year) {
                (None, None) => None,
                (start, end) => {
                    let known: Vec<i32> = teams
                        .iter()
                        .flat_map(|t| t.seasons.iter().map(|s| s.year))
                        .collect();
                    let first = known.iter().min().copied().unwrap_or(0);
                    let last = known.iter().max().copied().unwrap_or(0);
                    Some((start.unwrap_or(first), end.unwrap_or(last)))
                }
            };
            let table = standings::standings(&teams, range, active)?;
            print_json(&table)
        }

        Commands::Records {
            matchups,
            snapshots,
            kind,
            count,
            start_year,
            end_year,
            playoffs,
        } => {
            let matchups: Vec<Matchup> = read_json(&matchups)?;
            let directory = match snapshots {
                Some(path) => {
                    let snapshots: Vec<TeamSnapshot> = read_json(&path)?;
                    TeamDirectory::from_snapshots(&snapshots)
                }
                None => TeamDirectory::new(),
            };
            let filter = HistoryFilter {
                start_year,
                end_year,
                include_playoffs: playoffs,
            };

            match kind {
                RecordKind::Blowouts => print_json(&records::matchup_margins(
                    &matchups, &directory, &filter, count, true,
                )?),
                RecordKind::Closest => print_json(&records::matchup_margins(
                    &matchups, &directory, &filter, count, false,
                )?),
                RecordKind::BestWeeks => print_json(&records::week_scores(
                    &matchups, &directory, &filter, count, true,
                )?),
                RecordKind::WorstWeeks => print_json(&records::week_scores(
                    &matchups, &directory, &filter, count, false,
                )?),
                RecordKind::BestSeasons => print_json(&records::season_deviations(
                    &matchups, &directory, &filter, count, true,
                )?),
                RecordKind::WorstSeasons => print_json(&records::season_deviations(
                    &matchups, &directory, &filter, count, false,
                )?),
            }
        }
    }
}

fn init_logging(level: &str, json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
