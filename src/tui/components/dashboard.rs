//! Dashboard screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{BRAND_TEAL, DIMMED, TIP_COLOR, key_hints};
use crate::build_info;
use crate::core::Board;
use crate::core::view::DashboardEvent;

/// Title banner lines.
const BANNER: &[&str] = &[
    "█▀▄▀█ █▀█ █▀▀ █▄▀   ▀█▀ █▀▀ █▀ ▀█▀",
    "█ ▀ █ █▄█ █▄▄ █ █    █  ██▄ ▄█  █ ",
];

const SUBTITLE: &str = "curriculum-based mock test generator";

const INSTRUCTIONS: &[&str] = &[
    "Select your education board: CBSE, ICSE, IB, Cambridge IGCSE or State Board",
    "Choose your grade level and subject according to the board curriculum",
    "Enter a topic from the curriculum for your test",
    "Check the validation summary so the test stays curriculum-aligned",
    "Pick a paper type that matches your board's exam pattern",
];

/// Map a key press to a dashboard intent.
#[must_use]
pub fn dashboard_event(key: KeyEvent) -> Option<DashboardEvent> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('c') => Some(DashboardEvent::CreateTest),
        KeyCode::Char('r') => Some(DashboardEvent::ViewReviews),
        _ => None,
    }
}

/// Render the dashboard.
#[allow(clippy::cast_possible_truncation)]
pub fn render_dashboard(frame: &mut Frame, area: Rect, show_instructions: bool) {
    let instructions_height = if show_instructions {
        INSTRUCTIONS.len() as u16 + 2
    } else {
        0
    };
    let boards_height = Board::ALL.len() as u16 + 2;

    let [banner_area, instructions_area, boards_area, _, footer_area] = Layout::vertical([
        Constraint::Length(BANNER.len() as u16 + 2),
        Constraint::Length(instructions_height),
        Constraint::Length(boards_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut banner: Vec<Line> = BANNER
        .iter()
        .map(|line| Line::styled(*line, Style::default().fg(BRAND_TEAL)))
        .collect();
    banner.push(Line::styled(
        SUBTITLE,
        Style::default().fg(DIMMED).add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        banner_area,
    );

    if show_instructions {
        let lines: Vec<Line> = INSTRUCTIONS
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(TIP_COLOR)),
                    Span::raw(*step),
                ])
            })
            .collect();
        let block = Block::default()
            .title(" How it works ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIMMED));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            instructions_area,
        );
    }

    let lines: Vec<Line> = Board::ALL
        .iter()
        .map(|board| {
            let info = board.info();
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", info.name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<46}", info.full_name), Style::default().fg(DIMMED)),
                Span::styled(format!("grades {}", info.grades), Style::default().fg(DIMMED)),
            ])
        })
        .collect();
    let block = Block::default()
        .title(" Supported boards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIMMED));
    frame.render_widget(Paragraph::new(lines).block(block), boards_area);

    let [hints_area, version_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(footer_area);
    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("Enter", "create test"),
            ("r", "reviews"),
            ("q", "quit"),
        ])),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(build_info::short_version())
            .alignment(Alignment::Right)
            .style(Style::default().fg(DIMMED)),
        version_area,
    );
}
