//! Command-line front end: generate puzzles, solve grid strings, and run
//! a scripted demo session against the state machine.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::process::ExitCode;
use sudoku_engine::{Difficulty, GameMode, Generator, Grid, Solver};
use sudoku_session::{GameSession, Leaderboard, LocalLeaderboard, ScoreEntry};

#[derive(Parser)]
#[command(name = "sudoku", about = "Sudoku puzzle generator and solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle and print it with its solution.
    Generate {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve an 81-character grid string (digits 1-9, `0` or `.` empty).
    Solve { puzzle: String },
    /// Run a scripted demo session: hints, a move, undo, auto-solve.
    Play {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
        difficulty: DifficultyArg,
        #[arg(long)]
        seed: Option<u64>,
        /// Submit the result to the local leaderboard under this name.
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

fn generator_for(seed: Option<u64>) -> Generator {
    match seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { difficulty, seed } => generate(difficulty.into(), seed),
        Command::Solve { puzzle } => solve(&puzzle),
        Command::Play {
            difficulty,
            seed,
            name,
        } => play(difficulty.into(), seed, name),
    }
}

fn generate(difficulty: Difficulty, seed: Option<u64>) -> ExitCode {
    let mut generator = generator_for(seed);
    let puzzle = generator.generate(difficulty);
    let solution = match Solver::new().solve(&puzzle) {
        Some(solution) => solution,
        None => {
            eprintln!("internal error: generated puzzle has no solution");
            return ExitCode::FAILURE;
        }
    };

    println!("{} puzzle ({} givens):", difficulty, puzzle.filled_count());
    println!("{}", puzzle);
    println!("{}", puzzle.to_string_compact());
    println!();
    println!("Solution:");
    println!("{}", solution);
    ExitCode::SUCCESS
}

fn solve(puzzle: &str) -> ExitCode {
    let grid = match Grid::from_string(puzzle) {
        Some(grid) => grid,
        None => {
            eprintln!("invalid grid string: expected 81 cells of 1-9, 0, or .");
            return ExitCode::FAILURE;
        }
    };

    match Solver::new().solve(&grid) {
        Some(solution) => {
            println!("{}", solution);
            println!("{}", solution.to_string_compact());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("no solution");
            ExitCode::FAILURE
        }
    }
}

fn play(difficulty: Difficulty, seed: Option<u64>, name: Option<String>) -> ExitCode {
    let mut generator = generator_for(seed);
    let mut session = match GameSession::with_generator(&mut generator, difficulty, GameMode::Play)
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("New {} game:", session.difficulty());
    println!("{}", session.current());

    if let Some(hint) = session.hint() {
        println!(
            "Hint: ({}, {}) = {} ({} left)",
            hint.pos.row,
            hint.pos.col,
            hint.value,
            session.hints_remaining()
        );
    }

    // One throwaway move, taken back.
    if let Some(pos) = session.current().first_empty() {
        session.set_value(pos.row, pos.col, Some(1));
        session.undo();
        info!("move and undo exercised at ({}, {})", pos.row, pos.col);
    }

    session.solve();
    println!();
    println!("Auto-solved in {}:", session.timer_string());
    println!("{}", session.current());

    if let Some(name) = name {
        let board = LocalLeaderboard::new();
        let entry = ScoreEntry {
            name,
            time_secs: session.timer_secs(),
            difficulty: session.difficulty(),
            date: today(),
        };
        if let Err(e) = board.submit(entry) {
            eprintln!("leaderboard submission failed: {}", e);
            return ExitCode::FAILURE;
        }
        match board.top(Some(session.difficulty()), 10) {
            Ok(top) => {
                println!();
                println!("Top {} times:", session.difficulty());
                for (rank, entry) in top.iter().enumerate() {
                    println!(
                        "{:>2}. {:<16} {:>4}s  {}",
                        rank + 1,
                        entry.name,
                        entry.time_secs,
                        entry.date
                    );
                }
            }
            Err(e) => eprintln!("could not read leaderboard: {}", e),
        }
    }

    ExitCode::SUCCESS
}

/// Today's date as ISO `YYYY-MM-DD`.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
