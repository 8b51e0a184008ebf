//! Dropdown list selector for the form's choice fields.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::{BRAND_TEAL, DIALOG_BG, DIMMED, SELECTED_BG, key_hints};

/// Selector popup state.
pub struct ListSelector {
    /// Popup title.
    title: String,
    /// Options to display.
    options: Vec<String>,
    /// Currently highlighted index.
    selected: usize,
    /// List widget state.
    list_state: ListState,
}

impl ListSelector {
    /// Create a selector, highlighting `current` if it is one of the options.
    #[must_use]
    pub fn new(title: impl Into<String>, options: Vec<String>, current: Option<&str>) -> Self {
        let selected = current
            .and_then(|c| options.iter().position(|o| o == c))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            title: title.into(),
            options,
            selected,
            list_state,
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.options.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Index of the highlighted option.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.options.is_empty()).then_some(self.selected)
    }

    /// The highlighted option.
    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }
}

/// Render the selector as a popup centered in `area`.
#[allow(clippy::cast_possible_truncation)]
pub fn render_selector(frame: &mut Frame, area: Rect, selector: &mut ListSelector) {
    let width = (area.width * 2 / 3).clamp(20, 60).min(area.width);
    let height = (selector.options.len() as u16 + 5).min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", selector.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_TEAL))
        .style(Style::default().bg(DIALOG_BG));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [list_area, help_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let selected_idx = selector.selected;
    let items: Vec<ListItem> = selector
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = idx == selected_idx;
            let style = if is_selected {
                Style::default()
                    .bg(SELECTED_BG)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", if is_selected { "▸" } else { " " }), style),
                Span::styled(option.clone(), style),
            ]))
        })
        .collect();

    frame.render_stateful_widget(List::new(items), list_area, &mut selector.list_state);

    let help = Paragraph::new(key_hints(&[
        ("↑↓", "navigate"),
        ("Enter", "select"),
        ("Esc", "close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(DIMMED));
    frame.render_widget(help, help_area);
}
