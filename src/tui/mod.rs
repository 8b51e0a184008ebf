//! Terminal user interface for mocktest.

mod app;
mod components;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

use crate::config::Config;
use crate::core::view::Screen;
use crate::core::ViewState;

pub use app::App;
use components::{
    dashboard_event, generator_event, render_creator, render_dashboard, render_generator,
};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event loop encounters an error.
pub fn run(config: Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    tracing::debug!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }
    }
    Ok(())
}

/// Draw the screen selected by the view controller.
fn render(frame: &mut Frame, app: &mut App) {
    let full_area = frame.area();

    // Horizontal padding around all screens
    let area = Rect::new(
        full_area.x + 1,
        full_area.y,
        full_area.width.saturating_sub(2),
        full_area.height,
    );

    match app.controller.screen() {
        Screen::Dashboard => render_dashboard(frame, area, app.config.tui.instructions),
        Screen::Creator => render_creator(frame, area, &mut app.creator),
        Screen::Generator { test_data } => render_generator(frame, area, test_data),
    }
}

/// Route a key press to the mounted screen.
fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.view_state() {
        ViewState::Dashboard => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            } else if let Some(event) = dashboard_event(key) {
                app.on_dashboard(event);
            }
        }
        ViewState::Creator => {
            if let Some(event) = app.creator.handle_key(key) {
                app.on_creator(event);
            }
        }
        ViewState::Generator => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            } else if let Some(event) = generator_event(key) {
                app.on_generator(event);
            }
        }
    }
}
