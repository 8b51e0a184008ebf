//! Generator screen: shows the submitted test configuration.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{BRAND_TEAL, DIMMED, TIP_COLOR, key_hints};
use crate::core::TestPayload;
use crate::core::curriculum::describe_paper_type;
use crate::core::view::GeneratorEvent;

/// How many matched curriculum topics to list.
const MAX_MATCHED_TOPICS: usize = 3;

/// Map a key press to a generator intent.
///
/// `n` ("generate new") and `b` are aliases for going back to the form.
#[must_use]
pub fn generator_event(key: KeyEvent) -> Option<GeneratorEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b' | 'n') | KeyCode::Backspace => {
            Some(GeneratorEvent::BackToCreator)
        }
        _ => None,
    }
}

/// Render the generator screen for `test_data`.
pub fn render_generator(frame: &mut Frame, area: Rect, test_data: Option<&TestPayload>) {
    let [title_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = test_data.map_or_else(
        || "Mock Test".to_string(),
        |data| format!("{} Mock Test", data.subject),
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            title,
            Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title_area,
    );

    match test_data {
        Some(data) => render_test_info(frame, body_area, data),
        None => render_no_data(frame, body_area),
    }

    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("Esc", "back to create"),
            ("n", "generate new"),
            ("q", "quit"),
        ])),
        footer_area,
    );
}

fn render_test_info(frame: &mut Frame, area: Rect, data: &TestPayload) {
    let label = |text: &'static str| Span::styled(format!("{text:<14}"), Style::default().fg(DIMMED));
    let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

    let mut lines = vec![
        Line::from(vec![label("Board"), value(data.board.to_string())]),
        Line::from(vec![label("Grade"), value(data.grade_label.clone())]),
        Line::from(vec![label("Subject"), value(data.subject.clone())]),
        Line::from(vec![label("Topic"), value(data.topic.clone())]),
        Line::from(vec![label("Paper type"), value(data.paper_type.clone())]),
        Line::from(vec![
            label("Format"),
            value(describe_paper_type(&data.paper_type).to_string()),
        ]),
        Line::from(vec![
            label("Answers"),
            value(if data.include_answers { "shown" } else { "hidden" }.to_string()),
        ]),
    ];

    if !data.matched_topics.is_empty() {
        let matched: Vec<&str> = data
            .matched_topics
            .iter()
            .take(MAX_MATCHED_TOPICS)
            .map(String::as_str)
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Matched curriculum topics: ", Style::default().fg(TIP_COLOR)),
            value(matched.join(", ")),
        ]));
    }
    if !data.curriculum_topics.is_empty() {
        lines.push(Line::styled(
            format!(
                "{} topics in the {} {} {} curriculum",
                data.curriculum_topics.len(),
                data.board,
                data.grade_label,
                data.subject
            ),
            Style::default().fg(DIMMED),
        ));
    }

    let block = Block::default()
        .title(" Test information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_TEAL));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_no_data(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" No test data found ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TIP_COLOR));
    frame.render_widget(
        Paragraph::new(vec![
            Line::default(),
            Line::from("No mock test has been generated yet."),
            Line::from("Go back and create a test first."),
        ])
        .alignment(Alignment::Center)
        .block(block),
        area,
    );
}
