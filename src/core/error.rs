//! Error types for the core module.

/// Reasons a test form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No education board selected.
    #[error("please select a board")]
    MissingBoard,

    /// No grade selected.
    #[error("please select a grade")]
    MissingGrade,

    /// No subject selected.
    #[error("please select a subject")]
    MissingSubject,

    /// Topic left empty.
    #[error("please enter a topic")]
    MissingTopic,

    /// Topic does not match any curriculum topic for the subject.
    #[error("topic '{topic}' doesn't match the {subject} curriculum")]
    TopicNotInCurriculum {
        /// The rejected topic.
        topic: String,
        /// Subject whose curriculum was checked.
        subject: String,
    },

    /// No paper type selected.
    #[error("please select a paper type")]
    MissingPaperType,
}

/// Strict parsing failures for user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unrecognized view tag.
    #[error("unknown view: {0}")]
    UnknownView(String),

    /// Unrecognized board name.
    #[error("unknown board: {0}")]
    UnknownBoard(String),
}

/// Result type alias for form validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
