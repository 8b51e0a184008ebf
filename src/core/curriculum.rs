//! Built-in curriculum catalog: boards, grades, subjects, topics and paper
//! types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ParseError;

/// Education board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Board {
    Cbse,
    Icse,
    Ib,
    CambridgeIgcse,
    StateBoard,
}

/// Descriptive information about a board, shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct BoardInfo {
    pub name: &'static str,
    pub full_name: &'static str,
    pub philosophy: &'static str,
    pub grades: &'static str,
    pub specialties: &'static [&'static str],
}

impl Board {
    /// All boards in display order.
    pub const ALL: [Self; 5] = [
        Self::Cbse,
        Self::Icse,
        Self::Ib,
        Self::CambridgeIgcse,
        Self::StateBoard,
    ];

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cbse => "CBSE",
            Self::Icse => "ICSE",
            Self::Ib => "IB",
            Self::CambridgeIgcse => "Cambridge IGCSE",
            Self::StateBoard => "State Board",
        }
    }

    /// Long-form description of the board.
    #[must_use]
    pub const fn info(self) -> BoardInfo {
        match self {
            Self::Cbse => BoardInfo {
                name: "CBSE",
                full_name: "Central Board of Secondary Education",
                philosophy: "Holistic development with practical application",
                grades: "1-12",
                specialties: &[
                    "Indian cultural context",
                    "Application-based learning",
                    "Comprehensive coverage",
                ],
            },
            Self::Icse => BoardInfo {
                name: "ICSE",
                full_name: "Indian Certificate of Secondary Education",
                philosophy: "Analytical thinking with detailed study approach",
                grades: "1-12",
                specialties: &[
                    "British educational system",
                    "Detailed explanations",
                    "Analytical questions",
                ],
            },
            Self::Ib => BoardInfo {
                name: "IB",
                full_name: "International Baccalaureate",
                philosophy: "Inquiry-based learning with international mindedness",
                grades: "PYP, MYP, DP (1-12)",
                specialties: &[
                    "Global perspectives",
                    "Critical thinking",
                    "Conceptual understanding",
                ],
            },
            Self::CambridgeIgcse => BoardInfo {
                name: "Cambridge IGCSE",
                full_name: "Cambridge International General Certificate",
                philosophy: "International perspective with academic excellence",
                grades: "1-12",
                specialties: &[
                    "International standards",
                    "University preparation",
                    "Global contexts",
                ],
            },
            Self::StateBoard => BoardInfo {
                name: "State Board",
                full_name: "Regional State Education Boards",
                philosophy: "Regional relevance with accessible education",
                grades: "1-12",
                specialties: &[
                    "Local contexts",
                    "Regional curriculum",
                    "State-specific examples",
                ],
            },
        }
    }

    /// Grade choices offered for this board.
    #[must_use]
    pub fn grade_options(self) -> Vec<GradeOption> {
        (1..=12)
            .map(|number| GradeOption {
                number,
                label: grade_label(self, number),
            })
            .collect()
    }

    /// Subjects available for a grade.
    #[must_use]
    pub fn subjects(self, grade: u8) -> &'static [&'static str] {
        match (self, GradeBand::of(grade)) {
            (_, None) => &[],
            (Self::Ib, Some(GradeBand::Primary)) => {
                &["Mathematics", "Language and Literature", "Science", "Arts"]
            }
            (Self::Ib, Some(GradeBand::Middle | GradeBand::Secondary)) => &[
                "Mathematics",
                "Sciences",
                "Language and Literature",
                "Individuals and Societies",
                "Design",
            ],
            (Self::Ib, Some(GradeBand::Senior)) => &[
                "Mathematics: Analysis and Approaches",
                "Physics",
                "Chemistry",
                "Biology",
                "Economics",
                "English A",
            ],
            (Self::CambridgeIgcse, Some(GradeBand::Secondary)) => &[
                "Mathematics",
                "Physics",
                "Chemistry",
                "Biology",
                "English as a Second Language",
                "Computer Science",
            ],
            (_, Some(GradeBand::Primary)) => {
                &["Mathematics", "English", "Environmental Studies", "Science"]
            }
            (_, Some(GradeBand::Middle | GradeBand::Secondary)) => {
                &["Mathematics", "Science", "English", "Social Science"]
            }
            (_, Some(GradeBand::Senior)) => {
                &["Physics", "Chemistry", "Biology", "Mathematics", "English"]
            }
        }
    }

    /// Paper formats available for a grade.
    #[must_use]
    pub fn paper_types(self, grade: u8) -> &'static [&'static str] {
        let Some(band) = GradeBand::of(grade) else {
            return &[];
        };
        match (self, band) {
            (Self::Cbse, GradeBand::Primary) => {
                &["Foundation Test (20 Mixed)", "15 Activity Skills Practice"]
            }
            (Self::Cbse, GradeBand::Middle) => &[
                "25 MCQs Practice",
                "20 Mixed Questions",
                "Board Pattern Paper 1",
            ],
            (Self::Cbse, GradeBand::Secondary) => &[
                "40 MCQs",
                "Board Pattern Paper 1",
                "Board Pattern Paper 2",
                "Sample Paper Format",
            ],
            (Self::Cbse, GradeBand::Senior) => &[
                "40 MCQs",
                "15 Short + 15 Long",
                "Board Pattern Paper 2",
                "Sample Paper Format",
            ],
            (Self::Icse, GradeBand::Primary) => &["Primary Assessment"],
            (Self::Icse, GradeBand::Middle) => &["30 MCQs", "20 Mixed Questions"],
            (Self::Icse, GradeBand::Secondary) => {
                &["ICSE Board Format Paper 1", "ICSE Board Format Paper 2"]
            }
            (Self::Icse, GradeBand::Senior) => &["ISC Theory Paper", "ISC Practical Paper"],
            (Self::Ib, GradeBand::Primary) => {
                &["25 Exploration Inquiry Tasks", "15 Activity Skills Practice"]
            }
            (Self::Ib, GradeBand::Middle | GradeBand::Secondary) => {
                &["Criterion-Based Assessment", "Personal Project Questions"]
            }
            (Self::Ib, GradeBand::Senior) => &["DP Theory Paper", "Data Analysis Paper"],
            (Self::CambridgeIgcse, GradeBand::Primary) => &["Cambridge Primary Test"],
            (Self::CambridgeIgcse, GradeBand::Middle) => &["Checkpoint Assessment"],
            (Self::CambridgeIgcse, GradeBand::Secondary) => {
                &["IGCSE Theory Paper", "IGCSE Practical Paper"]
            }
            (Self::CambridgeIgcse, GradeBand::Senior) => &["A-Level Paper"],
            (Self::StateBoard, GradeBand::Primary) => &["20 Mixed Questions", "Oral Assessment"],
            (Self::StateBoard, GradeBand::Middle) => &["20 Mixed Questions"],
            (Self::StateBoard, GradeBand::Secondary) => {
                &["State Board Exam Pattern", "Certificate Practice Paper"]
            }
            (Self::StateBoard, GradeBand::Senior) => {
                &["HSC Board Pattern", "State Board Exam Pattern"]
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|board| board.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownBoard(s.to_string()))
    }
}

/// A selectable grade with its board-specific label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOption {
    pub number: u8,
    pub label: String,
}

/// Label for a grade, e.g. `Grade 7` or `MYP - Grade 7` for IB.
#[must_use]
pub fn grade_label(board: Board, grade: u8) -> String {
    match board {
        Board::Ib => {
            let programme = match grade {
                0..=5 => "PYP",
                6..=10 => "MYP",
                _ => "DP",
            };
            format!("{programme} - Grade {grade}")
        }
        _ => format!("Grade {grade}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GradeBand {
    Primary,
    Middle,
    Secondary,
    Senior,
}

impl GradeBand {
    const fn of(grade: u8) -> Option<Self> {
        match grade {
            1..=5 => Some(Self::Primary),
            6..=8 => Some(Self::Middle),
            9 | 10 => Some(Self::Secondary),
            11 | 12 => Some(Self::Senior),
            _ => None,
        }
    }
}

/// Curriculum topics for a subject.
///
/// Subjects without a curriculum listing return an empty slice, in which
/// case any non-empty topic is accepted.
#[must_use]
pub fn topics(subject: &str) -> &'static [&'static str] {
    match subject {
        "Mathematics" | "Mathematics: Analysis and Approaches" => &[
            "Real Numbers",
            "Polynomials",
            "Linear Equations",
            "Quadratic Equations",
            "Trigonometry",
            "Coordinate Geometry",
            "Statistics",
            "Probability",
            "Calculus",
            "Algebra",
            "Geometry",
            "Fractions",
        ],
        "Science" | "Sciences" => &[
            "Life Processes",
            "Light",
            "Electricity",
            "Carbon Compounds",
            "Heredity",
            "Chemical Reactions",
            "Laws of Motion",
            "Photosynthesis",
            "Management of Natural Resources",
        ],
        "Physics" => &[
            "Kinematics",
            "Laws of Motion",
            "Work and Energy",
            "Gravitation",
            "Thermodynamics",
            "Waves",
            "Optics",
            "Electrostatics",
            "Current Electricity",
            "Magnetism",
        ],
        "Chemistry" => &[
            "Atomic Structure",
            "Chemical Bonding",
            "Periodic Table",
            "States of Matter",
            "Equilibrium",
            "Redox Reactions",
            "Organic Chemistry",
            "Electrochemistry",
        ],
        "Biology" => &[
            "Cell Structure",
            "Genetics",
            "Evolution",
            "Human Physiology",
            "Plant Physiology",
            "Ecology",
            "Biotechnology",
        ],
        "English" | "English A" | "English as a Second Language" | "Language and Literature" => &[
            "Reading Comprehension",
            "Grammar",
            "Literature",
            "Writing Skills",
            "Poetry",
            "Drama",
        ],
        "Social Science" | "Individuals and Societies" => &[
            "Nationalism in Europe",
            "India Size and Location",
            "Democracy",
            "Development",
            "Sectors of Economy",
            "Consumer Rights",
            "Geography",
            "Civics",
        ],
        "Environmental Studies" => &[
            "Plants Around Us",
            "Animals",
            "Water",
            "Food",
            "Family and Friends",
            "Our Environment",
        ],
        _ => &[],
    }
}

/// Curriculum topics that match a free-text topic.
///
/// Matching is a case-insensitive substring test in either direction.
#[must_use]
pub fn matching_topics<'a>(topic: &str, curriculum: &[&'a str]) -> Vec<&'a str> {
    let needle = topic.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    curriculum
        .iter()
        .copied()
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.contains(&needle) || needle.contains(&candidate)
        })
        .collect()
}

/// Question-format description for a paper type.
#[must_use]
pub fn describe_paper_type(paper_type: &str) -> &'static str {
    const FORMATS: &[(&[&str], &str)] = &[
        (&["40 MCQs"], "40 Multiple Choice Questions"),
        (&["30 MCQs"], "30 Multiple Choice Questions"),
        (&["25 MCQs", "25 MCQ"], "25 Multiple Choice Questions"),
        (&["20 Mixed"], "20 Mixed Questions (MCQ + Short)"),
        (&["15 Short + 15 Long"], "15 Short + 15 Long Answer Questions"),
        (&["15 Activity", "Skills Practice"], "15 Hands-on Activity Tasks"),
        (&["25 Exploration", "Inquiry Tasks"], "25 Inquiry-based Questions"),
        (
            &["Primary Assessment", "Foundation Test"],
            "20 Age-appropriate Mixed Questions",
        ),
        (&["Board Pattern Paper 1"], "25 MCQs + 15 Short Answers"),
        (&["Board Pattern Paper 2"], "10 Short + 10 Long Answer Questions"),
        (&["Sample Paper Format", "Mock"], "Full Board Exam Pattern"),
        (&["ICSE Board Format Paper 1"], "40 Multiple Choice Questions"),
        (&["ICSE Board Format Paper 2"], "Descriptive Answer Questions"),
        (&["Theory"], "Theory Questions (Mixed Format)"),
        (&["Practical"], "Practical-based Questions"),
        (&["A-Level"], "Advanced Level Questions"),
        (&["HSC Board Pattern"], "40 Higher Secondary Questions"),
        (&["State Board"], "State Board Exam Pattern"),
        (&["Criterion-Based"], "25 Criterion-based Questions"),
        (&["Personal Project"], "15 Research Questions"),
        (&["Certificate Practice"], "40 Certificate Exam Questions"),
        (&["Data Analysis"], "Data Analysis & Application"),
        (&["Cambridge Primary"], "20 Primary Level Questions"),
        (&["Checkpoint"], "30 Checkpoint Assessment Questions"),
        (&["Oral Assessment"], "10 Oral Questions"),
    ];

    FORMATS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| paper_type.contains(*n)))
        .map_or("Custom Question Format", |&(_, description)| description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_names_round_trip_case_insensitively() {
        for board in Board::ALL {
            assert_eq!(board.name().to_lowercase().parse::<Board>(), Ok(board));
            assert_eq!(board.info().name, board.name());
        }
        assert_eq!(
            "Edexcel".parse::<Board>(),
            Err(ParseError::UnknownBoard("Edexcel".to_string()))
        );
    }

    #[test]
    fn ib_grades_use_programme_labels() {
        let grades = Board::Ib.grade_options();
        assert_eq!(grades.len(), 12);
        assert_eq!(grades[0].label, "PYP - Grade 1");
        assert_eq!(grades[6].label, "MYP - Grade 7");
        assert_eq!(grades[11].label, "DP - Grade 12");

        let cbse = Board::Cbse.grade_options();
        assert_eq!(cbse[9].label, "Grade 10");
        assert_eq!(cbse[9].number, 10);
    }

    #[test]
    fn every_board_and_grade_has_subjects_and_papers() {
        for board in Board::ALL {
            for grade in 1..=12 {
                assert!(!board.subjects(grade).is_empty(), "{board} grade {grade}");
                assert!(!board.paper_types(grade).is_empty(), "{board} grade {grade}");
            }
            assert!(board.subjects(0).is_empty());
            assert!(board.paper_types(13).is_empty());
        }
    }

    #[test]
    fn senior_subjects_split_sciences() {
        assert!(Board::Cbse.subjects(11).contains(&"Physics"));
        assert!(!Board::Cbse.subjects(10).contains(&"Physics"));
        assert!(Board::CambridgeIgcse.subjects(9).contains(&"Computer Science"));
    }

    #[test]
    fn topic_matching_works_both_directions() {
        let curriculum = topics("Mathematics");
        assert_eq!(matching_topics("trig", curriculum), vec!["Trigonometry"]);
        assert_eq!(
            matching_topics("Applications of Trigonometry", curriculum),
            vec!["Trigonometry"]
        );
        assert!(matching_topics("Photosynthesis", curriculum).is_empty());
        assert!(matching_topics("   ", curriculum).is_empty());
    }

    #[test]
    fn unknown_subject_has_no_topics() {
        assert!(topics("Design").is_empty());
    }

    #[test]
    fn paper_descriptions_use_first_match() {
        assert_eq!(describe_paper_type("40 MCQs"), "40 Multiple Choice Questions");
        assert_eq!(
            describe_paper_type("Board Pattern Paper 2"),
            "10 Short + 10 Long Answer Questions"
        );
        assert_eq!(
            describe_paper_type("HSC Board Pattern"),
            "40 Higher Secondary Questions"
        );
        assert_eq!(
            describe_paper_type("State Board Exam Pattern"),
            "State Board Exam Pattern"
        );
        assert_eq!(
            describe_paper_type("ICSE Board Format Paper 2"),
            "Descriptive Answer Questions"
        );
        assert_eq!(describe_paper_type("Weekly quiz"), "Custom Question Format");
    }

    #[test]
    fn every_catalog_paper_type_has_a_known_format() {
        for board in Board::ALL {
            for grade in 1..=12 {
                for paper in board.paper_types(grade) {
                    assert_ne!(describe_paper_type(paper), "Custom Question Format", "{paper}");
                }
            }
        }
    }
}
