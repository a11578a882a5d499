use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event};
use keysnake::config::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_SNAKE_LENGTH, GridSize, THEMES, Theme,
    theme_by_name,
};
use keysnake::game::{GameSession, GameStatus};
use keysnake::input::{GameInput, map_key};
use keysnake::renderer;
use keysnake::score::{load_high_score, save_high_score};
use keysnake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Keypress-driven terminal snake: one key, one step.")]
struct Cli {
    /// Field height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    rows: u16,

    /// Field width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    cols: u16,

    /// Starting snake length.
    #[arg(long, default_value_t = DEFAULT_SNAKE_LENGTH)]
    length: u16,

    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme name.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(&theme) = theme_by_name(&cli.theme) else {
        let names: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
        eprintln!("Unknown theme '{}'. Available: {}", cli.theme, names.join(", "));
        return ExitCode::from(2);
    };

    if let Err(message) = validate_dimensions(&cli) {
        eprintln!("{message}");
        return ExitCode::from(2);
    }

    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Warning: could not read high score: {error}");
            0
        }
    };

    let mut terminal = match TerminalSession::enter() {
        Ok(terminal) => terminal,
        Err(error) => {
            eprintln!("Failed to set up the terminal: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, theme, high_score, &mut terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            drop(terminal);
            eprintln!("Terminal i/o failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn validate_dimensions(cli: &Cli) -> Result<(), String> {
    let cells = usize::from(cli.rows) * usize::from(cli.cols);
    if cli.rows < 2 || cli.cols < 2 {
        return Err(format!(
            "Field must be at least 2x2, got {}x{}",
            cli.rows, cli.cols
        ));
    }
    if cli.length < 2 {
        return Err(format!("Snake length must be at least 2, got {}", cli.length));
    }
    if usize::from(cli.length) >= cells {
        return Err(format!(
            "Snake length {} does not leave a free cell on a {}x{} field",
            cli.length, cli.rows, cli.cols
        ));
    }
    let seed_capacity = u32::from(cli.rows) + u32::from(cli.cols) - 1;
    if u32::from(cli.length) > seed_capacity {
        return Err(format!(
            "Snake length {} cannot be seeded on a {}x{} field (max {seed_capacity})",
            cli.length, cli.rows, cli.cols
        ));
    }

    Ok(())
}

fn run(
    cli: &Cli,
    theme: Theme,
    mut high_score: u32,
    terminal: &mut TerminalSession,
) -> io::Result<()> {
    let size = GridSize {
        rows: cli.rows,
        cols: cli.cols,
    };
    let mut game = new_session(size, cli.length, cli.seed);
    let mut started = false;
    let mut score_recorded = false;

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, &theme, high_score, !started))?;

        // No timer: the game advances strictly in lockstep with key events.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(input) = map_key(key) else {
            continue;
        };

        match input {
            GameInput::Quit => break,
            GameInput::Confirm if !started => started = true,
            GameInput::Confirm if game.status != GameStatus::Playing => {
                game = new_session(size, cli.length, cli.seed);
                score_recorded = false;
            }
            GameInput::Turn(turn) if started => {
                let _ = game.step(turn);

                if game.status != GameStatus::Playing && !score_recorded {
                    score_recorded = true;
                    if game.score > high_score {
                        high_score = game.score;
                        if let Err(error) = save_high_score(high_score) {
                            eprintln!("Failed to save high score: {error}");
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn new_session(size: GridSize, length: u16, seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::new_with_seed(size, length, seed),
        None => GameSession::new(size, length),
    }
}
