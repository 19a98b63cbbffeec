//! Command-line entry point, grounded on `cli/src/main.rs`'s overall shape
//! (parse args, read/decode, solve, pretty-print) with `docopt!` replaced by
//! `clap` derive subcommands (spec.md §6 "generate"/"solve" per variant) and
//! `cli/src/error.rs`'s `AppError` composition replaced by `CliError`
//! (`thiserror`).

mod config;
mod error;
mod params;
mod pprint;
mod solve_output;

use clap::{Parser, Subcommand};
use error::CliResult;
use puzzle_core::{Difficulty, PuzzleRng, Size, Verdict};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "puzzle-cli", about = "Generate and solve Walls, Alcazar, and Stellar grid puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a Walls puzzle.
    Walls {
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        difficulty: Option<char>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_pretty: bool,
    },
    /// Generate an Alcazar puzzle.
    Alcazar {
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        difficulty: Option<char>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_pretty: bool,
    },
    /// Generate a Stellar puzzle.
    Stellar {
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        difficulty: Option<char>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_pretty: bool,
    },
    /// Solve a puzzle description.
    Solve {
        #[arg(long, value_enum)]
        variant: Variant,
        #[arg(long)]
        desc: String,
        #[arg(long)]
        size: String,
        #[arg(long, default_value_t = 'h')]
        difficulty: char,
        #[arg(long)]
        no_pretty: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Variant {
    Walls,
    Alcazar,
    Stellar,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn rng_for(seed: Option<u64>) -> PuzzleRng {
    match seed {
        Some(s) => PuzzleRng::from_u64(s),
        None => PuzzleRng::from_u64(std::process::id() as u64),
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let cfg = config::load()?;

    match cli.command {
        Command::Walls { size, difficulty, seed, no_pretty } => {
            let size = params::parse_size_wh(&size.or(cfg.walls.size).unwrap_or_else(|| "3x3".into()))?;
            let difficulty = params::parse_difficulty(
                difficulty.or(cfg.walls.difficulty).unwrap_or('e'),
                &[Difficulty::Easy, Difficulty::Normal, Difficulty::Tricky, Difficulty::Hard],
            )?;
            let start = Instant::now();
            let mut rng = rng_for(seed);
            let board = puzzle_walls::generate(size, difficulty, &mut rng);
            log::info!("generated walls {size:?} {difficulty:?} in {:?}", start.elapsed());
            println!("{}", params::format_param_wh(size, difficulty));
            println!("{}", puzzle_walls::desc::encode(&board));
            if !no_pretty && pprint::is_pprintable() {
                print!("{}", pprint::render_walls(&board));
            }
        }
        Command::Alcazar { size, difficulty, seed, no_pretty } => {
            let size = params::parse_size_wh(&size.or(cfg.alcazar.size).unwrap_or_else(|| "3x3".into()))?;
            let difficulty = params::parse_difficulty(
                difficulty.or(cfg.alcazar.difficulty).unwrap_or('e'),
                &[Difficulty::Easy, Difficulty::Normal, Difficulty::Hard],
            )?;
            let start = Instant::now();
            let mut rng = rng_for(seed);
            let board = puzzle_alcazar::generate(size, difficulty, &mut rng);
            log::info!("generated alcazar {size:?} {difficulty:?} in {:?}", start.elapsed());
            println!("{}", params::format_param_wh(size, difficulty));
            println!("{}", puzzle_alcazar::desc::encode(&board));
            if !no_pretty && pprint::is_pprintable() {
                print!("{}", pprint::render_alcazar(&board));
            }
        }
        Command::Stellar { size, difficulty, seed, no_pretty } => {
            let n = params::parse_size_n(&size.or(cfg.stellar.size).unwrap_or_else(|| "5".into()))?;
            let difficulty = params::parse_difficulty(
                difficulty.or(cfg.stellar.difficulty).unwrap_or('n'),
                &[Difficulty::Normal, Difficulty::Hard],
            )?;
            let start = Instant::now();
            let mut rng = rng_for(seed);
            let board = puzzle_stellar::generate(n, difficulty, &mut rng);
            log::info!("generated stellar {n} {difficulty:?} in {:?}", start.elapsed());
            println!("{}", params::format_param_n(n, difficulty));
            println!("{}", puzzle_stellar::desc::encode(&board));
            if !no_pretty && pprint::is_pprintable() {
                print!("{}", pprint::render_stellar(&board));
            }
        }
        Command::Solve { variant, desc, size, difficulty, no_pretty } => {
            let start = Instant::now();
            match variant {
                Variant::Walls => {
                    let size = params::parse_size_wh(&size)?;
                    let original = puzzle_walls::desc::decode(size, &desc)?;
                    let mut solved = original.clone();
                    let target = params::parse_difficulty(
                        difficulty,
                        &[Difficulty::Easy, Difficulty::Normal, Difficulty::Tricky, Difficulty::Hard],
                    )?;
                    let verdict = puzzle_walls::solve_to_quiescence(&mut solved, target).unwrap_or(Verdict::Invalid);
                    print_solve_result(verdict, &solve_output::diff_walls(&original, &solved));
                    if !no_pretty && pprint::is_pprintable() {
                        print!("{}", pprint::render_walls(&solved));
                    }
                }
                Variant::Alcazar => {
                    let size = params::parse_size_wh(&size)?;
                    let original = puzzle_alcazar::desc::decode(size, &desc)?;
                    let mut solved = original.clone();
                    let target = params::parse_difficulty(
                        difficulty,
                        &[Difficulty::Easy, Difficulty::Normal, Difficulty::Hard],
                    )?;
                    let verdict = puzzle_alcazar::solve_to_quiescence(&mut solved, target).unwrap_or(Verdict::Invalid);
                    print_solve_result(verdict, &solve_output::diff_alcazar(&original, &solved));
                    if !no_pretty && pprint::is_pprintable() {
                        print!("{}", pprint::render_alcazar(&solved));
                    }
                }
                Variant::Stellar => {
                    let n = params::parse_size_n(&size)?;
                    let original = puzzle_stellar::desc::decode(Size::new(n, n), &desc)?;
                    let mut solved = original.clone();
                    let target = params::parse_difficulty(difficulty, &[Difficulty::Normal, Difficulty::Hard])?;
                    let verdict = puzzle_stellar::solve(&mut solved, target).unwrap_or(Verdict::Invalid);
                    print_solve_result(verdict, &solve_output::diff_stellar(&original, &solved));
                    if !no_pretty && pprint::is_pprintable() {
                        print!("{}", pprint::render_stellar(&solved));
                    }
                }
            }
            log::info!("solved {} in {:?}", variant_name(variant), start.elapsed());
        }
    }
    Ok(())
}

fn variant_name(v: Variant) -> &'static str {
    match v {
        Variant::Walls => "walls",
        Variant::Alcazar => "alcazar",
        Variant::Stellar => "stellar",
    }
}

fn print_solve_result(verdict: Verdict, move_string: &str) {
    let tag = match verdict {
        Verdict::Solved => "SOLVED",
        Verdict::Ambiguous => "AMBIGUOUS",
        Verdict::Invalid => "INVALID",
    };
    println!("{tag}");
    println!("{move_string}");
}
