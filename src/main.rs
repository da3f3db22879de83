use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use seabattle::{init_logging_with, AiController, Board, Game, GameReport, Seat, ShotsGrid};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level (off, error, warn, info, debug, trace); overrides SEABATTLE_LOG"
    )]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one AI-vs-AI game and print the final boards.
    Selfplay {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Play many AI-vs-AI games and summarize shots needed to win.
    Bench {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Fire a number of AI shots at a random fleet and print the heatmap.
    Heatmap {
        #[arg(long, default_value_t = 0)]
        shots: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            info!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn selfplay(seed: Option<u64>, as_json: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new(&mut rng)?;
    let report = game.play(&mut rng)?;

    if as_json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    for seat in [Seat::First, Seat::Second] {
        println!("{:?} seat fleet:\n{}\n", seat, game.board(seat));
    }
    println!(
        "Winner: {:?} ({} shots vs {}, {} turns)",
        report.winner,
        report.shots[report.winner.index()],
        report.shots[report.winner.other().index()],
        report.turns
    );
    Ok(())
}

fn bench(games: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut reports: Vec<GameReport> = Vec::with_capacity(games);
    for _ in 0..games {
        let mut game = Game::new(&mut rng)?;
        reports.push(game.play(&mut rng)?);
    }

    let winning: Vec<usize> = reports
        .iter()
        .map(|r| r.shots[r.winner.index()])
        .collect();
    let first_wins = reports.iter().filter(|r| r.winner == Seat::First).count();
    let mean = if winning.is_empty() {
        0.0
    } else {
        winning.iter().sum::<usize>() as f64 / winning.len() as f64
    };

    let result = json!({
        "games": games,
        "first_seat_wins": first_wins,
        "winning_shots": {
            "mean": mean,
            "min": winning.iter().min(),
            "max": winning.iter().max(),
        },
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn heatmap(shots: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut board = Board::new();
    board.random_fleet(&mut rng)?;

    let mut ai = AiController::new();
    let mut grid = ShotsGrid::new();
    let mut hits = 0;
    for _ in 0..shots {
        let outcome = ai.take_turn(&mut board, &mut grid, &mut rng)?;
        if outcome.result.is_hit() {
            hits += 1;
        }
        if outcome.is_game_over() {
            break;
        }
    }

    let mut map = seabattle::ProbabilityMap::new();
    map.compute(&board);
    println!("Board after {} shots ({} hits):\n{}\n", shots, hits, board);
    println!("Placement density:\n{}", map);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_level);

    match cli.command {
        Commands::Selfplay { seed, json } => selfplay(seed, json),
        Commands::Bench { games, seed } => bench(games, seed),
        Commands::Heatmap { shots, seed } => heatmap(shots, seed),
    }
}
