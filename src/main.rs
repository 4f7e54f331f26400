mod build_info;
mod constants;
mod game;
mod input;
mod ui;

use constants::TICK_INTERVAL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{process_input, process_tick};
use game::types::{GameMode, GameWorld};
use input::{map_key, KeyAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skyward - a terminal flappy-bird arcade game\n");
                println!("Usage: skyward\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("In-game: Space/Up/Enter to flap, 1-3 to pick a mode, Q to quit.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Always restore the terminal, even if the loop errored.
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The frame loop: drain input, advance the fixed-timestep simulation, draw.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut world = GameWorld::new(GameMode::Classic);
    let mut rng = rand::thread_rng();

    let mut last_frame = Instant::now();
    let mut accumulator_ms: u64 = 0;

    loop {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                match map_key(&key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Game(game_input) => process_input(&mut world, game_input),
                    KeyAction::None => {}
                }
            }
        }

        // Fixed 20ms simulation steps, decoupled from the render cadence.
        let now = Instant::now();
        accumulator_ms += now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        // After a stall (terminal suspend, etc.) drop the backlog instead of
        // fast-forwarding the bird into the floor.
        accumulator_ms = accumulator_ms.min(250);
        while accumulator_ms >= TICK_INTERVAL_MS {
            process_tick(&mut world, &mut rng);
            accumulator_ms -= TICK_INTERVAL_MS;
        }

        terminal.draw(|frame| ui::draw_ui(frame, &world))?;
    }
}
