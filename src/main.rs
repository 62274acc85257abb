use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use snake_arcade::config::{DEFAULT_GRID, THEME_CLASSIC};
use snake_arcade::game::GameState;
use snake_arcade::input::{poll_input, GameInput};
use snake_arcade::renderer;

/// Input poll budget per loop pass; keeps the UI responsive between ticks.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for a reproducible food/special-food sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let result = run(cli);
    cleanup_terminal()?;
    result
}

fn run(cli: Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed),
        None => GameState::new(DEFAULT_GRID),
    };

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        if let Some(game_input) = poll_input(INPUT_POLL_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Start => state.start(),
                GameInput::Pause => state.toggle_pause(),
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        // The interval is re-read every pass so boosts and level-ups take
        // effect on the next scheduling decision, not mid-tick.
        if last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        default_hook(panic_info);
    }));
}
