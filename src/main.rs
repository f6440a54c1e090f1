use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use skull_snake::config::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_TICK_INTERVAL_MS, GameConfig, GridSize, WallMode,
};
use skull_snake::game::GameState;
use skull_snake::input::{self, GameInput};
use skull_snake::renderer;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    cols: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    rows: u16,

    /// Milliseconds between movement ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for reproducible fruit and skull placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Select the deadly wall mode instead of wrap-around.
    #[arg(long = "deadly-walls")]
    deadly_walls: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let wall_mode = if cli.deadly_walls {
        WallMode::Deadly
    } else {
        WallMode::Wrap
    };
    let config = GameConfig::new(
        GridSize {
            cols: cli.cols,
            rows: cli.rows,
        },
        cli.tick_ms,
        wall_mode,
    )
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error.to_string()))?;

    install_panic_hook();

    let result = run(config, cli.seed);
    cleanup_terminal()?;
    result
}

fn run(config: GameConfig, seed: Option<u64>) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = GameState::new(config.size, config.wall_mode, &mut rng);

    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state))?;

        if let Some(game_input) = poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => state = state.apply_direction(direction),
                GameInput::Pause => state = state.toggle_pause(),
                GameInput::Confirm if state.status.is_terminal() => {
                    state = GameState::new(config.size, config.wall_mode, &mut rng);
                    last_tick = Instant::now();
                }
                GameInput::Confirm => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            state = state.step(&mut rng);
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(Duration::from_millis(0))? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(input::translate_key(key)),
        _ => Ok(None),
    }
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
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
