//! Hoops CLI
//!
//! 시드 기반 시즌 시뮬레이션과 스냅샷 확인 도구

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use hoops_core::engine::standings::sorted;
use hoops_core::generator::{find_template, TEAM_TEMPLATES};
use hoops_core::season::champion;
use hoops_core::{seeded_rng, snapshot, Division, EngineConfig, GameState, LeagueEngine, Phase};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Run and inspect basketball league seasons", long_about = None)]
struct Cli {
    /// Engine config JSON (defaults to the built-in balance)
    #[arg(long, global = true, env = "HOOPS_ENGINE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the starting league
    Teams,

    /// Play whole seasons for one club
    Simulate {
        /// Club id (see `teams`)
        #[arg(long)]
        team: String,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 1)]
        seasons: u32,

        /// Write a binary snapshot of the final state
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the final state as JSON instead of the season reports
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Summarise a snapshot file
    Inspect { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let engine = LeagueEngine::with_config(load_config(cli.config.as_deref())?)
        .context("engine config rejected")?;

    match cli.command {
        Commands::Teams => print_teams(),
        Commands::Simulate { team, seed, seasons, out, json } => {
            let state = run_seasons(&engine, &team, seed, seasons, !json)?;
            if json {
                println!("{}", snapshot::to_json(&state)?);
            }
            if let Some(path) = out {
                snapshot::write_to_path(&path, &state)
                    .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
                log::info!("snapshot written to {}", path.display());
            }
        }
        Commands::Inspect { path } => {
            let state = snapshot::read_from_path(&path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            print_summary(&state);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = EngineConfig::from_json(&json)
        .with_context(|| format!("invalid config {}", path.display()))?;
    log::info!("loaded engine config from {}", path.display());
    Ok(config)
}

fn run_seasons(
    engine: &LeagueEngine,
    team: &str,
    seed: u64,
    seasons: u32,
    report: bool,
) -> Result<GameState> {
    let Some(template) = find_template(team) else {
        anyhow::bail!("unknown team `{team}` (run `hoops teams` for the list)");
    };
    log::info!("managing {} ({}, prestige {})", template.name, template.division, template.prestige);

    let mut rng = seeded_rng(seed);
    let mut state = engine.initialize_game(team, &mut rng)?;

    for _ in 0..seasons {
        if let Some(bonus) = engine.roll_season_bonus_choices(&mut rng).first().copied() {
            state = engine.choose_season_bonus(&state, bonus).into_state();
        }
        state = engine.start_regular_season(&state);
        while state.phase == Phase::Regular {
            state = engine.simulate_week(&state, None, &mut rng);
        }
        state = engine.simulate_all_playoffs(&state, &mut rng);
        if report {
            print_season(&state);
        }

        state = engine.start_new_season(&state, &mut rng);
        if let Some(reason) = state.game_over_reason {
            println!("\nGAME OVER: {reason}");
            break;
        }
    }
    Ok(state)
}

fn print_teams() {
    for division in Division::ALL {
        println!("{division}");
        for t in TEAM_TEMPLATES.iter().filter(|t| t.division == division) {
            println!("  {:<22} {:<24} prestige {}  budget {}", t.id, t.name, t.prestige, t.budget);
        }
    }
}

fn print_season(state: &GameState) {
    println!("\n=== Season {} ===", state.season);
    println!("Modifier: {} ({})", state.season_modifier.name(), state.season_modifier.description());
    if let Some(bonus) = state.season_bonus {
        println!("Bonus:    {} ({})", bonus.name(), bonus.description());
    }
    for division in Division::ALL {
        println!("{division}");
        for (rank, entry) in sorted(state.division_standings(division)).iter().enumerate() {
            let marker = if entry.team_id == state.selected_team_id { "*" } else { " " };
            println!(
                "{marker}{:>2}. {:<22} {:>2}-{:<2} {:+5}",
                rank + 1,
                entry.team_id,
                entry.wins,
                entry.losses,
                entry.point_differential()
            );
        }
    }
    let viewer = state.selected_team_id.as_str();
    let home_games: Vec<_> = state.schedule.iter().filter(|r| r.home_team_id == viewer).collect();
    let home_wins = home_games.iter().filter(|r| r.winner_id() == viewer).count();
    println!("Home record: {}-{}", home_wins, home_games.len() - home_wins);
    if let Some(champ) = champion(state) {
        println!("Champion: {champ}");
    }
    let f = &state.finances;
    println!(
        "Finances: tickets {} sponsors {} prizes {} wages {} transfers {} -> balance {}",
        f.ticket_income,
        f.sponsor_income,
        f.prize_income,
        f.total_wages,
        f.transfer_spending,
        f.season_end_balance()
    );
}

fn print_summary(state: &GameState) {
    println!("Club:    {}", state.selected_team_id);
    println!("Season:  {} week {} ({})", state.season, state.week, state.phase);
    println!("Balance: {}", state.finances.balance);
    if let Some(team) = state.selected_team() {
        println!("Division: {}  prestige {}  roster {}", team.division, team.prestige, team.players.len());
    }
    if let Some(reason) = state.game_over_reason {
        println!("Game over: {reason}");
    }
}
