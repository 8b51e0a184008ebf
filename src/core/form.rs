//! Test-creation form and the payload it produces.

use super::curriculum::{self, Board};
use super::error::{Result, ValidationError};

/// A completed, validated test configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPayload {
    pub board: Board,
    pub grade: u8,
    /// Board-specific grade label, e.g. `DP - Grade 11`.
    pub grade_label: String,
    pub subject: String,
    pub topic: String,
    pub paper_type: String,
    /// Whether answers should be shown with the generated test.
    pub include_answers: bool,
    /// Full curriculum listing for the subject.
    pub curriculum_topics: Vec<String>,
    /// Curriculum topics that matched `topic`.
    pub matched_topics: Vec<String>,
}

/// Form field, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Board,
    Grade,
    Subject,
    Topic,
    PaperType,
    IncludeAnswers,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Grade => "Grade",
            Self::Subject => "Subject",
            Self::Topic => "Topic",
            Self::PaperType => "Paper type",
            Self::IncludeAnswers => "Show answers",
        }
    }
}

/// One line of the validation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub field: Field,
    pub passed: bool,
    pub message: String,
}

/// In-progress test form.
///
/// Setters reset the fields that depend on the one being changed, so a
/// subject can never outlive the board it was picked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestForm {
    board: Option<Board>,
    grade: Option<u8>,
    subject: Option<String>,
    topic: String,
    paper_type: Option<String>,
    include_answers: bool,
}

impl TestForm {
    /// Empty form with the given defaults.
    #[must_use]
    pub fn new(board: Option<Board>, include_answers: bool) -> Self {
        Self {
            board,
            include_answers,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn board(&self) -> Option<Board> {
        self.board
    }

    #[must_use]
    pub const fn grade(&self) -> Option<u8> {
        self.grade
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn paper_type(&self) -> Option<&str> {
        self.paper_type.as_deref()
    }

    #[must_use]
    pub const fn include_answers(&self) -> bool {
        self.include_answers
    }

    /// Label of the selected grade for the selected board.
    #[must_use]
    pub fn grade_label(&self) -> Option<String> {
        Some(curriculum::grade_label(self.board?, self.grade?))
    }

    pub fn set_board(&mut self, board: Board) {
        if self.board != Some(board) {
            self.board = Some(board);
            self.grade = None;
            self.subject = None;
            self.topic.clear();
            self.paper_type = None;
        }
    }

    pub fn set_grade(&mut self, grade: u8) {
        if self.grade != Some(grade) {
            self.grade = Some(grade);
            self.subject = None;
            self.topic.clear();
            self.paper_type = None;
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        let subject = subject.into();
        if self.subject.as_deref() != Some(subject.as_str()) {
            self.subject = Some(subject);
            self.topic.clear();
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn push_topic_char(&mut self, c: char) {
        self.topic.push(c);
    }

    pub fn pop_topic_char(&mut self) {
        self.topic.pop();
    }

    pub fn set_paper_type(&mut self, paper_type: impl Into<String>) {
        self.paper_type = Some(paper_type.into());
    }

    pub const fn toggle_include_answers(&mut self) {
        self.include_answers = !self.include_answers;
    }

    /// Grade choices for the selected board.
    #[must_use]
    pub fn grade_options(&self) -> Vec<curriculum::GradeOption> {
        self.board.map(Board::grade_options).unwrap_or_default()
    }

    /// Subject choices for the selected board and grade.
    #[must_use]
    pub fn subject_options(&self) -> &'static [&'static str] {
        match (self.board, self.grade) {
            (Some(board), Some(grade)) => board.subjects(grade),
            _ => &[],
        }
    }

    /// Paper-type choices for the selected board and grade.
    #[must_use]
    pub fn paper_type_options(&self) -> &'static [&'static str] {
        match (self.board, self.grade) {
            (Some(board), Some(grade)) => board.paper_types(grade),
            _ => &[],
        }
    }

    /// Curriculum topics for the selected subject.
    #[must_use]
    pub fn curriculum_topics(&self) -> &'static [&'static str] {
        match self.subject.as_deref() {
            Some(subject) => curriculum::topics(subject),
            None => &[],
        }
    }

    /// Check the topic against the subject's curriculum.
    ///
    /// Subjects with no curriculum listing accept any non-empty topic.
    pub fn validate_topic(&self) -> Result<Vec<&'static str>> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        let curriculum = self.curriculum_topics();
        if curriculum.is_empty() {
            return Ok(Vec::new());
        }
        let matched = curriculum::matching_topics(topic, curriculum);
        if matched.is_empty() {
            return Err(ValidationError::TopicNotInCurriculum {
                topic: topic.to_string(),
                subject: self.subject.clone().unwrap_or_default(),
            });
        }
        Ok(matched)
    }

    /// Curriculum topics to offer when the typed topic is not in the listing.
    #[must_use]
    pub fn topic_suggestions(&self) -> &'static [&'static str] {
        match self.validate_topic() {
            Err(ValidationError::TopicNotInCurriculum { .. }) => self.curriculum_topics(),
            _ => &[],
        }
    }

    /// Validation summary for board, grade, subject and topic.
    #[must_use]
    pub fn checks(&self) -> Vec<Check> {
        let board = match self.board {
            Some(board) => pass(Field::Board, format!("{board} selected")),
            None => fail(Field::Board, &ValidationError::MissingBoard),
        };
        let grade = match self.grade_label() {
            Some(label) => pass(Field::Grade, format!("{label} selected")),
            None => fail(Field::Grade, &ValidationError::MissingGrade),
        };
        let subject = match self.subject() {
            Some(subject) => pass(Field::Subject, format!("{subject} selected")),
            None => fail(Field::Subject, &ValidationError::MissingSubject),
        };
        let topic = if self.subject.is_none() && !self.topic.trim().is_empty() {
            fail(Field::Topic, &ValidationError::MissingSubject)
        } else {
            match self.validate_topic() {
                Ok(_) => pass(
                    Field::Topic,
                    format!("'{}' is curriculum-aligned", self.topic.trim()),
                ),
                Err(e) => fail(Field::Topic, &e),
            }
        };
        vec![board, grade, subject, topic]
    }

    /// Whether every summary check passes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks().iter().all(|check| check.passed)
    }

    /// Validate and build the payload.
    pub fn submit(&self) -> Result<TestPayload> {
        let board = self.board.ok_or(ValidationError::MissingBoard)?;
        let grade = self.grade.ok_or(ValidationError::MissingGrade)?;
        let subject = self.subject.clone().ok_or(ValidationError::MissingSubject)?;
        let matched = self.validate_topic()?;
        let paper_type = self
            .paper_type
            .clone()
            .ok_or(ValidationError::MissingPaperType)?;

        Ok(TestPayload {
            board,
            grade,
            grade_label: curriculum::grade_label(board, grade),
            subject,
            topic: self.topic.trim().to_string(),
            paper_type,
            include_answers: self.include_answers,
            curriculum_topics: owned_strings(self.curriculum_topics()),
            matched_topics: owned_strings(&matched),
        })
    }
}

fn pass(field: Field, message: String) -> Check {
    Check {
        field,
        passed: true,
        message,
    }
}

fn fail(field: Field, error: &ValidationError) -> Check {
    Check {
        field,
        passed: false,
        message: error.to_string(),
    }
}

fn owned_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TestForm {
        let mut form = TestForm::new(Some(Board::Cbse), false);
        form.set_grade(10);
        form.set_subject("Mathematics");
        form.set_topic("Trigonometry");
        form.set_paper_type("40 MCQs");
        form
    }

    #[test]
    fn complete_form_submits() {
        let payload = filled().submit().unwrap();
        assert_eq!(payload.board, Board::Cbse);
        assert_eq!(payload.grade, 10);
        assert_eq!(payload.grade_label, "Grade 10");
        assert_eq!(payload.subject, "Mathematics");
        assert_eq!(payload.paper_type, "40 MCQs");
        assert_eq!(payload.matched_topics, vec!["Trigonometry".to_string()]);
        assert!(payload.curriculum_topics.contains(&"Statistics".to_string()));
        assert!(!payload.include_answers);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = TestForm::default();
        assert_eq!(form.submit(), Err(ValidationError::MissingBoard));

        form.set_board(Board::Icse);
        assert_eq!(form.submit(), Err(ValidationError::MissingGrade));

        form.set_grade(7);
        assert_eq!(form.submit(), Err(ValidationError::MissingSubject));

        form.set_subject("Science");
        assert_eq!(form.submit(), Err(ValidationError::MissingTopic));

        form.set_topic("light");
        assert_eq!(form.submit(), Err(ValidationError::MissingPaperType));

        form.set_paper_type("30 MCQs");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn off_curriculum_topic_is_rejected() {
        let mut form = filled();
        form.set_topic("Photosynthesis");
        assert_eq!(
            form.submit(),
            Err(ValidationError::TopicNotInCurriculum {
                topic: "Photosynthesis".to_string(),
                subject: "Mathematics".to_string(),
            })
        );
        assert!(!form.is_valid());
    }

    #[test]
    fn suggestions_only_for_off_curriculum_topics() {
        let mut form = filled();
        assert!(form.topic_suggestions().is_empty());

        form.set_topic("Photosynthesis");
        assert_eq!(form.topic_suggestions(), form.curriculum_topics());
        assert!(form.topic_suggestions().contains(&"Probability"));

        form.set_topic("");
        assert!(form.topic_suggestions().is_empty());
    }

    #[test]
    fn subject_without_curriculum_accepts_any_topic() {
        let mut form = TestForm::new(Some(Board::Ib), true);
        form.set_grade(8);
        form.set_subject("Design");
        form.set_topic("User-centred prototyping");
        form.set_paper_type("Criterion-Based Assessment");

        let payload = form.submit().unwrap();
        assert_eq!(payload.grade_label, "MYP - Grade 8");
        assert!(payload.matched_topics.is_empty());
        assert!(payload.include_answers);
    }

    #[test]
    fn changing_board_resets_dependent_fields() {
        let mut form = filled();
        form.set_board(Board::Ib);
        assert_eq!(form.grade(), None);
        assert_eq!(form.subject(), None);
        assert_eq!(form.topic(), "");
        assert_eq!(form.paper_type(), None);
    }

    #[test]
    fn reselecting_same_value_keeps_dependents() {
        let mut form = filled();
        form.set_board(Board::Cbse);
        form.set_grade(10);
        form.set_subject("Mathematics");
        assert_eq!(form, filled());
    }

    #[test]
    fn changing_grade_resets_subject_and_paper() {
        let mut form = filled();
        form.set_grade(11);
        assert_eq!(form.board(), Some(Board::Cbse));
        assert_eq!(form.subject(), None);
        assert_eq!(form.paper_type(), None);
    }

    #[test]
    fn changing_subject_resets_topic_only() {
        let mut form = filled();
        form.set_subject("Science");
        assert_eq!(form.topic(), "");
        assert_eq!(form.paper_type(), Some("40 MCQs"));
    }

    #[test]
    fn checks_summarize_progress() {
        let mut form = TestForm::new(Some(Board::Cbse), false);
        let checks = form.checks();
        assert_eq!(checks.len(), 4);
        assert!(checks[0].passed);
        assert!(checks[1..].iter().all(|c| !c.passed));
        assert_eq!(checks[1].message, "please select a grade");

        form.set_grade(10);
        form.set_subject("Mathematics");
        form.set_topic("  polynomials ");
        assert!(form.is_valid());
        assert_eq!(form.checks()[3].message, "'polynomials' is curriculum-aligned");
    }

    #[test]
    fn options_follow_selection() {
        let mut form = TestForm::default();
        assert!(form.grade_options().is_empty());
        assert!(form.subject_options().is_empty());

        form.set_board(Board::StateBoard);
        assert_eq!(form.grade_options().len(), 12);
        assert!(form.paper_type_options().is_empty());

        form.set_grade(12);
        assert!(form.paper_type_options().contains(&"HSC Board Pattern"));
    }

    #[test]
    fn topic_editing() {
        let mut form = filled();
        form.pop_topic_char();
        assert_eq!(form.topic(), "Trigonometr");
        form.push_topic_char('y');
        assert_eq!(form.topic(), "Trigonometry");
        form.toggle_include_answers();
        assert!(form.include_answers());
    }
}
