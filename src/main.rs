use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use cup_standings::category::{unique_age_groups, unique_divisions, unique_genders, Division, Gender};
use cup_standings::config::Config;
use cup_standings::filter::{self, CategoryFilter};
use cup_standings::models::TournamentResult;
use cup_standings::output::{self, StandingRow};
use cup_standings::scoring::{self, ScoringTable};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_NOT_FOUND: i32 = 5;

const DEFAULT_DATA: &str = "data/*.json";

#[derive(Subcommand, Debug)]
enum Commands {
    /// Team standings for one tournament
    Teams(ListArgs),
    /// Club standings for one tournament
    Clubs(ListArgs),
    /// Season team standings across all loaded tournaments
    OverallTeams(ListArgs),
    /// Season club standings across all loaded tournaments
    OverallClubs(ListArgs),
    /// Every scored placement of one team across the season
    Team {
        team_id: String,
    },
    /// A club's teams and total for one tournament
    Club {
        club_id: String,
        #[arg(short, long)]
        tournament: Option<String>,
    },
    /// Age groups, genders and divisions present in the data
    Categories,
    /// Show the active points table
    Rules,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Tournament id (defaults to the first loaded tournament)
    #[arg(short, long)]
    tournament: Option<String>,

    /// Age group, e.g. U12
    #[arg(long)]
    age: Option<String>,

    /// Boys, Girls or Mixed
    #[arg(long, value_parser = parse_gender)]
    gender: Option<Gender>,

    /// COPA, LIGA or Other
    #[arg(long, value_parser = parse_division)]
    division: Option<Division>,

    /// Maximum rows to print (defaults to the configured limit)
    #[arg(short, long)]
    limit: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write JSON output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ListArgs {
    fn category_filter(&self) -> CategoryFilter {
        CategoryFilter {
            age: self.age.clone(),
            gender: self.gender,
            division: self.division,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::parse(s).ok_or_else(|| format!("unknown gender '{}' (Boys, Girls, Mixed)", s))
}

fn parse_division(s: &str) -> Result<Division, String> {
    Division::parse(s).ok_or_else(|| format!("unknown division '{}' (COPA, LIGA, Other)", s))
}

#[derive(Parser, Debug)]
#[command(name = "cup-standings")]
#[command(about = "Team and club standings for youth cup tournaments", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/cup-standings/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Tournament JSON file or glob pattern (overrides the config file)
    #[arg(short, long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = match cup_standings::config::load_config(cli.config.as_ref().map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring_config = config.scoring();
    if let Err(errors) = scoring::validate_scoring(&scoring_config) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let table = scoring_config.table();

    if let Commands::Rules = cli.command {
        println!("{}", output::format_rules(&table));
        std::process::exit(EXIT_SUCCESS);
    }

    let pattern = cli
        .data
        .clone()
        .or_else(|| config.data.clone())
        .unwrap_or_else(|| DEFAULT_DATA.to_string());

    let tournaments = match cup_standings::data::load_tournaments(&pattern) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Data error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };
    log::info!("Loaded {} tournaments from {}", tournaments.len(), pattern);

    let code = match run(cli.command, &config, &table, &tournaments) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_DATA
        }
    };
    std::process::exit(code);
}

fn run(
    command: Commands,
    config: &Config,
    table: &ScoringTable,
    tournaments: &[TournamentResult],
) -> Result<i32> {
    let use_colors = output::should_use_colors();

    match command {
        Commands::Teams(args) => {
            let Some(tournament) = select_tournament(tournaments, args.tournament.as_deref()) else {
                return Ok(EXIT_NOT_FOUND);
            };
            let rows = filter::filter_rows(&tournament.results, &args.category_filter());
            let scores = scoring::score_teams_with(&rows, table);
            let limit = args.limit.unwrap_or(config.limit());
            print_tournament_header(tournament, use_colors);
            emit(&args, &scores[..limit.min(scores.len())], StandingRow::from_team, use_colors)?;
        }
        Commands::Clubs(args) => {
            let Some(tournament) = select_tournament(tournaments, args.tournament.as_deref()) else {
                return Ok(EXIT_NOT_FOUND);
            };
            let rows = filter::filter_rows(&tournament.results, &args.category_filter());
            let clubs = scoring::aggregate_clubs(&scoring::score_teams_with(&rows, table));
            let limit = args.limit.unwrap_or(config.limit());
            print_tournament_header(tournament, use_colors);
            emit(&args, &clubs[..limit.min(clubs.len())], StandingRow::from_club, use_colors)?;
        }
        Commands::OverallTeams(args) => {
            let scores = filter::filter_team_scores(
                scoring::overall_teams_with(tournaments, table),
                &args.category_filter(),
            );
            let limit = args.limit.unwrap_or(config.limit());
            emit(&args, &scores[..limit.min(scores.len())], StandingRow::from_overall_team, use_colors)?;
        }
        Commands::OverallClubs(args) => {
            if !args.category_filter().is_empty() {
                log::warn!("Category filters are ignored for season club standings");
            }
            let clubs = scoring::overall_clubs_with(tournaments, table);
            let limit = args.limit.unwrap_or(config.limit());
            emit(&args, &clubs[..limit.min(clubs.len())], StandingRow::from_overall_club, use_colors)?;
        }
        Commands::Team { team_id } => match filter::team_history(tournaments, &team_id, table) {
            Some(history) => println!("{}", output::format_team_history(&history, use_colors)),
            None => {
                eprintln!("No scored placements found for team '{}'", team_id);
                return Ok(EXIT_NOT_FOUND);
            }
        },
        Commands::Club { club_id, tournament } => {
            let Some(tournament) = select_tournament(tournaments, tournament.as_deref()) else {
                return Ok(EXIT_NOT_FOUND);
            };
            match filter::club_breakdown(tournament, &club_id, table) {
                Some((club, teams)) => {
                    print_tournament_header(tournament, use_colors);
                    println!("{}", output::format_club_breakdown(&club, &teams, use_colors));
                }
                None => {
                    eprintln!(
                        "Club '{}' has no scored teams in {}",
                        club_id, tournament.tournament_name
                    );
                    return Ok(EXIT_NOT_FOUND);
                }
            }
        }
        Commands::Categories => {
            let names = filter::category_names(tournaments);
            println!(
                "{}",
                output::format_categories(
                    &unique_age_groups(&names),
                    &unique_genders(&names),
                    &unique_divisions(&names)
                )
            );
        }
        // Handled before data is loaded
        Commands::Rules => {}
    }

    Ok(EXIT_SUCCESS)
}

/// Pick the requested tournament, or the first one when none was asked for.
/// Reports the problem on stderr when nothing matches.
fn select_tournament<'a>(
    tournaments: &'a [TournamentResult],
    tournament_id: Option<&str>,
) -> Option<&'a TournamentResult> {
    let found = match tournament_id {
        Some(id) => cup_standings::data::find_tournament(tournaments, id),
        None => tournaments.first(),
    };
    if found.is_none() {
        match tournament_id {
            Some(id) => eprintln!("Unknown tournament id '{}'", id),
            None => eprintln!("No tournaments loaded"),
        }
    }
    found
}

fn print_tournament_header(tournament: &TournamentResult, use_colors: bool) {
    use owo_colors::OwoColorize;

    let title = format!("{} {}", tournament.tournament_name, tournament.season);
    if use_colors {
        eprintln!("{}", title.bold());
    } else {
        eprintln!("{}", title);
    }
}

fn emit<'a, T, F>(args: &ListArgs, entries: &'a [T], to_row: F, use_colors: bool) -> Result<()>
where
    T: Serialize,
    F: Fn(&'a T) -> StandingRow<'a>,
{
    match args.format {
        Format::Json => match &args.output {
            Some(path) => {
                output::write_json(path, entries)?;
                eprintln!("Wrote {} entries to {}", entries.len(), path.display());
            }
            None => println!("{}", output::to_json(entries)?),
        },
        Format::Tsv => {
            let rows: Vec<StandingRow> = entries.iter().map(to_row).collect();
            println!("{}", output::format_tsv(&rows));
        }
        Format::Table => {
            let rows: Vec<StandingRow> = entries.iter().map(to_row).collect();
            println!("{}", output::format_table(&rows, use_colors));
        }
    }
    if args.output.is_some() && args.format != Format::Json {
        log::warn!("--output only applies to --format json; printed to stdout instead");
    }
    Ok(())
}
