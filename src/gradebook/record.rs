//! Record types and field validation for the record store
//!
//! Validation rules are bounds checks plus an ASCII-alphabetic content check
//! on text fields:
//! - student id: 1..=999, name: 2..=19 chars, faculty: 5..=29 chars
//! - exam id: 1..=499, written duration: 40..=180 minutes,
//!   digital software name: 3..=19 chars
//! - grade: 0..=100

/// A student record. Text fields are validated before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub faculty: String,
}

/// Kind tag plus kind-specific payload of an exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamKind {
    Written { duration: i32 },
    Digital { software: String },
}

impl ExamKind {
    /// The `Type: ..., Info: ...` suffix used by grade search output.
    pub fn summary(&self) -> String {
        match self {
            ExamKind::Written { duration } => format!("Type: WRITTEN, Info: {}", duration),
            ExamKind::Digital { software } => format!("Type: DIGITAL, Info: {}", software),
        }
    }
}

/// An exam record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    pub id: i32,
    pub kind: ExamKind,
}

/// A grade for one (exam, student) pair. Pairs are not deduplicated; a later
/// record for the same pair shadows earlier ones by array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub exam_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

pub fn student_id_in_range(id: i32) -> bool {
    (1..=999).contains(&id)
}

pub fn exam_id_in_range(id: i32) -> bool {
    (1..=499).contains(&id)
}

pub fn grade_in_range(grade: i32) -> bool {
    (0..=100).contains(&grade)
}

pub fn duration_in_range(duration: i32) -> bool {
    (40..=180).contains(&duration)
}

/// Upper and lower case English letters only.
fn is_alphabetic(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn valid_name(name: &str) -> bool {
    (2..=19).contains(&name.len()) && is_alphabetic(name)
}

pub fn valid_faculty(faculty: &str) -> bool {
    (5..=29).contains(&faculty.len()) && is_alphabetic(faculty)
}

pub fn valid_software(software: &str) -> bool {
    (3..=19).contains(&software.len()) && is_alphabetic(software)
}
