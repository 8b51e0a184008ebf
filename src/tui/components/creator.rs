//! Creator screen: the test-creation form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::selector::{ListSelector, render_selector};
use super::{BRAND_TEAL, DIMMED, ERROR_RED, SELECTED_BG, SUCCESS_GREEN, key_hints};
use crate::core::curriculum::{Board, describe_paper_type};
use crate::core::form::{Field, TestForm};
use crate::core::view::CreatorEvent;
use crate::core::TestPayload;

const PLACEHOLDER: &str = "Select an option...";
const MAX_SUGGESTIONS: usize = 16;

/// Focusable rows, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(Field),
    Generate,
}

const FOCUS_ORDER: [Focus; 7] = [
    Focus::Field(Field::Board),
    Focus::Field(Field::Grade),
    Focus::Field(Field::Subject),
    Focus::Field(Field::Topic),
    Focus::Field(Field::PaperType),
    Focus::Field(Field::IncludeAnswers),
    Focus::Generate,
];

/// Creator screen state. Rebuilt every time the screen is entered.
pub struct CreatorView {
    form: TestForm,
    focus: usize,
    selector: Option<(Field, ListSelector)>,
    error: Option<String>,
}

impl CreatorView {
    #[must_use]
    pub const fn new(form: TestForm) -> Self {
        Self {
            form,
            focus: 0,
            selector: None,
            error: None,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &TestForm {
        &self.form
    }

    /// Last submission error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_selector_open(&self) -> bool {
        self.selector.is_some()
    }

    /// Whether key presses are being captured as topic text.
    #[must_use]
    pub const fn is_editing_text(&self) -> bool {
        self.selector.is_none() && matches!(self.focused(), Focus::Field(Field::Topic))
    }

    const fn focused(&self) -> Focus {
        FOCUS_ORDER[self.focus]
    }

    /// Handle a key press, returning an intent for the view controller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<CreatorEvent<TestPayload>> {
        if self.selector.is_some() {
            self.handle_selector_key(key.code);
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(CreatorEvent::BackToDashboard),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FOCUS_ORDER.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
            }
            KeyCode::Enter => return self.activate(),
            KeyCode::Char(' ') if self.focused() == Focus::Field(Field::IncludeAnswers) => {
                self.form.toggle_include_answers();
            }
            KeyCode::Char(c)
                if self.is_editing_text() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.form.push_topic_char(c);
                self.error = None;
            }
            KeyCode::Backspace if self.is_editing_text() => {
                self.form.pop_topic_char();
                self.error = None;
            }
            _ => {}
        }
        None
    }

    fn activate(&mut self) -> Option<CreatorEvent<TestPayload>> {
        match self.focused() {
            Focus::Field(Field::Topic) => {
                self.focus += 1;
                None
            }
            Focus::Field(Field::IncludeAnswers) => {
                self.form.toggle_include_answers();
                None
            }
            Focus::Field(field) => {
                self.open_selector(field);
                None
            }
            Focus::Generate => match self.form.submit() {
                Ok(payload) => Some(CreatorEvent::CreateMockTest(payload)),
                Err(e) => {
                    tracing::debug!(error = %e, "form rejected");
                    self.error = Some(e.to_string());
                    None
                }
            },
        }
    }

    fn options(&self, field: Field) -> Vec<String> {
        match field {
            Field::Board => Board::ALL.iter().map(ToString::to_string).collect(),
            Field::Grade => self
                .form
                .grade_options()
                .into_iter()
                .map(|g| g.label)
                .collect(),
            Field::Subject => owned(self.form.subject_options()),
            Field::PaperType => owned(self.form.paper_type_options()),
            Field::Topic | Field::IncludeAnswers => Vec::new(),
        }
    }

    fn open_selector(&mut self, field: Field) {
        let options = self.options(field);
        if options.is_empty() {
            self.error = Some(match field {
                Field::Grade => "select a board first".to_string(),
                _ => "select a board and grade first".to_string(),
            });
            return;
        }
        let current = self.display_value(field);
        let selector = ListSelector::new(field.label(), options, current.as_deref());
        self.selector = Some((field, selector));
        self.error = None;
    }

    fn handle_selector_key(&mut self, code: KeyCode) {
        let Some((field, selector)) = self.selector.as_mut() else {
            return;
        };
        match code {
            KeyCode::Up | KeyCode::Char('k') => selector.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => selector.select_next(),
            KeyCode::Esc => self.selector = None,
            KeyCode::Enter => {
                let field = *field;
                let index = selector.selected_index();
                let choice = selector.selected_option().map(ToString::to_string);
                self.selector = None;
                if let (Some(index), Some(choice)) = (index, choice) {
                    self.apply_choice(field, index, choice);
                }
            }
            _ => {}
        }
    }

    fn apply_choice(&mut self, field: Field, index: usize, choice: String) {
        match field {
            Field::Board => {
                if let Some(board) = Board::ALL.get(index) {
                    self.form.set_board(*board);
                }
            }
            Field::Grade => {
                if let Some(grade) = self.form.grade_options().get(index) {
                    self.form.set_grade(grade.number);
                }
            }
            Field::Subject => self.form.set_subject(choice),
            Field::PaperType => self.form.set_paper_type(choice),
            Field::Topic | Field::IncludeAnswers => {}
        }
        self.focus = (self.focus + 1).min(FOCUS_ORDER.len() - 1);
    }

    fn display_value(&self, field: Field) -> Option<String> {
        match field {
            Field::Board => self.form.board().map(|b| b.to_string()),
            Field::Grade => self.form.grade_label(),
            Field::Subject => self.form.subject().map(ToString::to_string),
            Field::Topic => Some(self.form.topic().to_string()).filter(|t| !t.is_empty()),
            Field::PaperType => self.form.paper_type().map(ToString::to_string),
            Field::IncludeAnswers => {
                Some(if self.form.include_answers() { "[x]" } else { "[ ]" }.to_string())
            }
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Render the creator form.
#[allow(clippy::cast_possible_truncation)]
pub fn render_creator(frame: &mut Frame, area: Rect, view: &mut CreatorView) {
    let [title_area, fields_area, summary_area, error_area, suggestions_area, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(FOCUS_ORDER.len() as u16 + 2),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Create a curriculum-aligned mock test",
            Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let lines: Vec<Line> = FOCUS_ORDER
        .iter()
        .enumerate()
        .map(|(idx, focus)| field_line(view, idx, *focus))
        .collect();
    let block = Block::default()
        .title(" Test details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIMMED));
    frame.render_widget(Paragraph::new(lines).block(block), fields_area);

    let checks = view.form.checks();
    let mut lines: Vec<Line> = checks
        .iter()
        .map(|check| {
            let (mark, color) = if check.passed {
                ("✓", SUCCESS_GREEN)
            } else {
                ("✗", ERROR_RED)
            };
            Line::from(vec![
                Span::styled(format!(" {mark} "), Style::default().fg(color)),
                Span::styled(
                    format!("{}: ", check.field.label().to_uppercase()),
                    Style::default().fg(DIMMED),
                ),
                Span::raw(check.message.clone()),
            ])
        })
        .collect();
    if view.form.is_valid() {
        lines.push(Line::styled(
            " All validations passed. Ready to create the test.",
            Style::default().fg(SUCCESS_GREEN),
        ));
    }
    let block = Block::default()
        .title(" Validation summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIMMED));
    frame.render_widget(Paragraph::new(lines).block(block), summary_area);

    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" {error}"),
                Style::default().fg(ERROR_RED),
            )),
            error_area,
        );
    }

    let suggestions = view.form.topic_suggestions();
    if !suggestions.is_empty() {
        let block = Block::default()
            .title(" Suggested topics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIMMED));
        frame.render_widget(
            Paragraph::new(suggestion_lines(suggestions)).block(block),
            suggestions_area,
        );
    }

    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("↑↓/Tab", "move"),
            ("Enter", "select"),
            ("Space", "toggle"),
            ("Esc", "back to dashboard"),
        ])),
        footer_area,
    );

    if let Some((_, selector)) = view.selector.as_mut() {
        render_selector(frame, area, selector);
    }
}

fn field_line(view: &CreatorView, idx: usize, focus: Focus) -> Line<'static> {
    let focused = idx == view.focus && view.selector.is_none();
    let row_style = if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    };
    let marker = Span::styled(if focused { " ▸ " } else { "   " }, row_style.fg(BRAND_TEAL));

    let Focus::Field(field) = focus else {
        return Line::from(vec![
            marker,
            Span::styled(
                "[ Generate test ]",
                row_style.fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            ),
        ]);
    };

    let label = Span::styled(format!("{:<14}", field.label()), row_style.fg(DIMMED));
    let mut spans = vec![marker, label];
    match view.display_value(field) {
        Some(value) => spans.push(Span::styled(value, row_style.fg(Color::White))),
        None if field == Field::Topic => {
            spans.push(Span::styled(topic_placeholder(&view.form), row_style.fg(DIMMED)));
        }
        None => spans.push(Span::styled(PLACEHOLDER, row_style.fg(DIMMED))),
    }
    if focused && field == Field::Topic {
        spans.push(Span::styled("▏", row_style.fg(BRAND_TEAL)));
    }
    if field == Field::PaperType {
        if let Some(paper) = view.form.paper_type() {
            spans.push(Span::styled(
                format!("  {}", describe_paper_type(paper)),
                row_style.fg(DIMMED),
            ));
        }
    }
    Line::from(spans)
}

fn topic_placeholder(form: &TestForm) -> String {
    let examples = form.curriculum_topics();
    if examples.is_empty() {
        "type a topic or chapter".to_string()
    } else {
        format!("e.g., {}", examples[..examples.len().min(3)].join(", "))
    }
}

/// Two columns of curriculum topics, capped at `MAX_SUGGESTIONS`.
fn suggestion_lines(topics: &[&str]) -> Vec<Line<'static>> {
    let shown = &topics[..topics.len().min(MAX_SUGGESTIONS)];
    let rows = shown.len().div_ceil(2);
    let mut lines: Vec<Line> = (0..rows)
        .map(|row| {
            let mut spans = vec![Span::raw(format!(" • {:<32}", shown[row]))];
            if let Some(right) = shown.get(row + rows) {
                spans.push(Span::raw(format!(" • {right}")));
            }
            Line::from(spans)
        })
        .collect();
    if topics.len() > shown.len() {
        lines.push(Line::styled(
            format!(" ... and {} more topics", topics.len() - shown.len()),
            Style::default().fg(DIMMED),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{render, text};
    use super::*;

    fn press(view: &mut CreatorView, code: KeyCode) -> Option<CreatorEvent<TestPayload>> {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut CreatorView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    /// Pick the option at `steps` below the current highlight.
    fn choose(view: &mut CreatorView, steps: usize) {
        assert!(press(view, KeyCode::Enter).is_none());
        assert!(view.is_selector_open());
        for _ in 0..steps {
            press(view, KeyCode::Down);
        }
        press(view, KeyCode::Enter);
        assert!(!view.is_selector_open());
    }

    #[test]
    fn esc_goes_back_to_dashboard() {
        let mut view = CreatorView::new(TestForm::default());
        assert_eq!(
            press(&mut view, KeyCode::Esc),
            Some(CreatorEvent::BackToDashboard)
        );
    }

    #[test]
    fn esc_closes_selector_first() {
        let mut view = CreatorView::new(TestForm::default());
        press(&mut view, KeyCode::Enter);
        assert!(view.is_selector_open());
        assert_eq!(press(&mut view, KeyCode::Esc), None);
        assert!(!view.is_selector_open());
        assert_eq!(view.form().board(), None);
    }

    #[test]
    fn grade_needs_a_board() {
        let mut view = CreatorView::new(TestForm::default());
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Enter);
        assert!(!view.is_selector_open());
        assert_eq!(view.error(), Some("select a board first"));
    }

    #[test]
    fn fills_and_submits_the_form() {
        let mut view = CreatorView::new(TestForm::default());

        choose(&mut view, 0); // Board: CBSE
        choose(&mut view, 9); // Grade 10
        choose(&mut view, 0); // Subject: Mathematics
        assert!(view.is_editing_text());
        type_text(&mut view, "Probability");
        press(&mut view, KeyCode::Enter);
        choose(&mut view, 0); // Paper type: 40 MCQs
        press(&mut view, KeyCode::Char(' ')); // Show answers
        press(&mut view, KeyCode::Tab);

        let Some(CreatorEvent::CreateMockTest(payload)) = press(&mut view, KeyCode::Enter) else {
            panic!("expected a submitted form, error: {:?}", view.error());
        };
        assert_eq!(payload.board, Board::Cbse);
        assert_eq!(payload.grade, 10);
        assert_eq!(payload.subject, "Mathematics");
        assert_eq!(payload.topic, "Probability");
        assert_eq!(payload.paper_type, "40 MCQs");
        assert!(payload.include_answers);
    }

    #[test]
    fn invalid_form_shows_error_instead_of_submitting() {
        let mut view = CreatorView::new(TestForm::new(Some(Board::Icse), false));
        press(&mut view, KeyCode::BackTab);
        assert_eq!(press(&mut view, KeyCode::Enter), None);
        assert_eq!(view.error(), Some("please select a grade"));
    }

    #[test]
    fn typing_outside_topic_is_ignored() {
        let mut view = CreatorView::new(TestForm::default());
        type_text(&mut view, "abc");
        assert_eq!(view.form().topic(), "");
    }

    #[test]
    fn backspace_edits_topic() {
        let mut form = TestForm::new(Some(Board::Cbse), false);
        form.set_grade(9);
        form.set_subject("English");
        let mut view = CreatorView::new(form);
        for _ in 0..3 {
            press(&mut view, KeyCode::Down);
        }
        type_text(&mut view, "Poems");
        press(&mut view, KeyCode::Backspace);
        press(&mut view, KeyCode::Backspace);
        assert_eq!(view.form().topic(), "Poe");
    }

    #[test]
    fn renders_fields_and_summary() {
        let mut view = CreatorView::new(TestForm::new(Some(Board::Ib), false));
        let buffer = render(90, 24, |f| {
            let area = f.area();
            render_creator(f, area, &mut view);
        });
        let screen = text(&buffer);
        assert!(screen.contains("Test details"));
        assert!(screen.contains("IB"));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("BOARD: IB selected"));
        assert!(screen.contains("please select a grade"));
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn mathematics_form() -> TestForm {
        let mut form = TestForm::new(Some(Board::Cbse), false);
        form.set_grade(10);
        form.set_subject("Mathematics");
        form
    }

    #[test]
    fn topic_placeholder_lists_curriculum_examples() {
        let mut view = CreatorView::new(mathematics_form());
        let buffer = render(100, 30, |f| {
            let area = f.area();
            render_creator(f, area, &mut view);
        });
        let screen = text(&buffer);
        assert!(screen.contains("e.g., Real Numbers, Polynomials, Linear Equations"));
        assert!(!screen.contains("Suggested topics"));
    }

    #[test]
    fn off_curriculum_topic_renders_suggestions() {
        let mut form = mathematics_form();
        form.set_topic("Astrophysics");
        let mut view = CreatorView::new(form);
        let buffer = render(100, 40, |f| {
            let area = f.area();
            render_creator(f, area, &mut view);
        });
        let screen = text(&buffer);
        assert!(screen.contains("Suggested topics"));
        assert!(screen.contains("Real Numbers"));
        assert!(screen.contains("Fractions"));
        assert!(!screen.contains("more topics"));
    }

    #[test]
    fn suggestions_are_capped() {
        let topics: Vec<String> = (1..=20).map(|n| format!("Topic {n}")).collect();
        let topics: Vec<&str> = topics.iter().map(String::as_str).collect();

        let lines = suggestion_lines(&topics);
        assert_eq!(lines.len(), 9);
        assert!(line_text(&lines[0]).contains("Topic 1 "));
        assert!(line_text(&lines[0]).contains("Topic 9"));
        assert!(!lines.iter().any(|l| line_text(l).contains("Topic 17")));
        assert_eq!(line_text(&lines[8]), " ... and 4 more topics");
    }

    #[test]
    fn renders_open_selector() {
        let mut view = CreatorView::new(TestForm::default());
        press(&mut view, KeyCode::Enter);
        let buffer = render(90, 24, |f| {
            let area = f.area();
            render_creator(f, area, &mut view);
        });
        assert!(text(&buffer).contains("State Board"));
    }
}
