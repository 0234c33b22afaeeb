mod app;
mod domain;
mod editor;
mod events;
mod input;
mod persistence;
mod ticket;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::{run_effect, spawn_input_thread, Effect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "rodo")]
#[command(about = "A keyboard-driven terminal to-do list", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the location of the data file
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Path) => {
            let path = persistence::data_file()?;
            println!("{}", path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A store error ends up here: printed to stderr, exit code 1
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    spawn_input_thread(tx.clone());

    let mut app = AppState::new();

    // The startup load is the first deferred effect; the list stays
    // empty until its completion event arrives
    run_effect(Effect::Load, tx.clone());

    terminal.draw(|f| ui::render(f, &app))?;

    loop {
        let event = rx.recv()?;
        if let Some(effect) = app.update(event) {
            run_effect(effect, tx.clone());
        }

        // One render per event, including the final error display
        terminal.draw(|f| ui::render(f, &app))?;

        if app.should_quit {
            break;
        }
    }

    match app.last_error.take() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
