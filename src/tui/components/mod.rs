//! TUI components for rendering the three screens.

mod creator;
mod dashboard;
mod generator;
mod selector;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub use creator::{CreatorView, render_creator};
pub use dashboard::{dashboard_event, render_dashboard};
pub use generator::{generator_event, render_generator};

/// Brand colors.
const BRAND_TEAL: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);
const DIALOG_BG: Color = Color::Rgb(30, 32, 38);
const SELECTED_BG: Color = Color::Rgb(45, 48, 55);
const ERROR_RED: Color = Color::Rgb(220, 90, 90);
const SUCCESS_GREEN: Color = Color::Rgb(110, 190, 120);
const TIP_COLOR: Color = Color::Rgb(180, 160, 100);

/// Build a `key action  key action` hint line.
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(BRAND_TEAL)));
        spans.push(Span::styled(format!(" {action}  "), Style::default().fg(DIMMED)));
    }
    Line::from(spans)
}
