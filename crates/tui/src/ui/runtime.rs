//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Drive a single event loop that routes input to the main view and
//!   executes returned `Effect`s against the app.
//! - Render only when `App` marks itself dirty.
//!
//! A dedicated input thread blocks on `crossterm::event::read()` and
//! forwards events over a channel; keeping the blocking read on one OS
//! thread avoids lost or delayed events in some terminals.

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::ui::main_component::MainView;
use classboard_types::Msg;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    // Mouse movement is noise for this UI.
                    if let Event::Mouse(mouse) = &event {
                        if mouse.kind == event::MouseEventKind::Moved {
                            continue;
                        }
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn is_quit(key: &crossterm::event::KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Runs the event loop until the user quits.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut main_view = MainView::default();
    let mut input = spawn_input_thread();

    let mut tick = time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let size = terminal.size()?;
    app.update(Msg::Resize(size.width, size.height));

    let result = loop {
        if app.take_dirty() {
            if let Err(e) = terminal.draw(|frame| main_view.render(frame, frame.area(), &mut app)) {
                break Err(e.into());
            }
        }

        tokio::select! {
            maybe_event = input.recv() => {
                let Some(event) = maybe_event else { break Ok(()) };
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if is_quit(&key) {
                            break Ok(());
                        }
                        let effects = main_view.handle_key_events(&mut app, key);
                        app.apply_effects(effects);
                        app.mark_dirty();
                    }
                    Event::Mouse(mouse) => {
                        let effects = main_view.handle_mouse_events(&mut app, mouse);
                        app.apply_effects(effects);
                        app.mark_dirty();
                    }
                    Event::Resize(cols, rows) => {
                        app.update(Msg::Resize(cols, rows));
                    }
                    _ => {}
                }
            }
            _ = tick.tick() => {
                app.update(Msg::Tick);
            }
            _ = signal::ctrl_c() => {
                break Ok(());
            }
        }
    };

    cleanup_terminal(&mut terminal)?;
    result
}
