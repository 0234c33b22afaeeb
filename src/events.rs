use crate::domain::Todo;
use crate::persistence::{self, StoreError};
use crate::ticket;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::Sender;
use std::thread;

/// Everything the state machine reacts to: key presses plus the
/// completion messages of deferred effects.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Startup load finished
    Loaded(Vec<Todo>),
    /// Quit-time save finished
    Saved,
    /// Ticket hand-off finished (outcome intentionally opaque)
    TicketOpened,
    Error(StoreError),
}

/// Deferred I/O requested by a state transition. Effects run off the
/// event loop and report back through the event channel.
#[derive(Debug)]
pub enum Effect {
    Load,
    Save(Vec<Todo>),
    OpenTicket(Todo),
}

/// Forward terminal key presses into the event channel. Exits when the
/// receiving end is gone.
pub fn spawn_input_thread(tx: Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

/// Run one effect on its own thread; the outcome comes back as a new
/// event on the same channel the key presses use.
pub fn run_effect(effect: Effect, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let event = match effect {
            Effect::Load => match persistence::load_todos() {
                Ok(todos) => AppEvent::Loaded(todos),
                Err(err) => AppEvent::Error(err),
            },
            Effect::Save(todos) => match persistence::save_todos(&todos) {
                Ok(()) => AppEvent::Saved,
                Err(err) => AppEvent::Error(err),
            },
            Effect::OpenTicket(todo) => {
                ticket::open_for(&todo);
                AppEvent::TicketOpened
            }
        };
        let _ = tx.send(event);
    });
}
