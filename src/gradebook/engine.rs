//! Dispatcher and handlers for the record store
//!
//! [`GradebookEngine::run`] drives the read/dispatch/mutate/report loop over
//! a token stream. Each handler performs its checks in the contract order
//! (duplicate/existence, then id range, then field format) and reports
//! exactly one transcript line; the first failing check wins and leaves the
//! store untouched.
//!
//! Argument reading is interleaved with checking: a handler that fails
//! before reaching an argument leaves it in the stream, and the dispatcher
//! then skips the leftover tokens as unrecognized keywords.

use tracing::debug;

use super::command::{Keyword, TokenReader};
use super::errors::Result;
use super::record::{
    Exam, ExamKind, Grade, Student, duration_in_range, exam_id_in_range, grade_in_range,
    student_id_in_range, valid_faculty, valid_name, valid_software,
};
use super::store::RecordStore;
use crate::transcript::Transcript;

/// The record-store interpreter: one store, one transcript, one run loop.
#[derive(Debug, Default)]
pub struct GradebookEngine {
    store: RecordStore,
    transcript: Transcript,
}

impl GradebookEngine {
    pub fn new() -> Self {
        GradebookEngine::default()
    }

    /// Process the whole token stream until `END` or end of input.
    pub fn run(&mut self, input: &str) -> Result<()> {
        let mut reader = TokenReader::new(input);
        while let Some(token) = reader.next_keyword_token() {
            match Keyword::parse(token) {
                Some(Keyword::End) => break,
                Some(keyword) => {
                    debug!(?keyword, "dispatching command");
                    self.dispatch(keyword, &mut reader)?;
                }
                // Unrecognized keywords fail open: no output, no state change.
                None => {}
            }
        }
        Ok(())
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn say(&mut self, line: String) {
        self.transcript.push(line);
    }

    fn dispatch(&mut self, keyword: Keyword, reader: &mut TokenReader) -> Result<()> {
        match keyword {
            Keyword::AddStudent => self.add_student(reader),
            Keyword::AddExam => self.add_exam(reader),
            Keyword::AddGrade => self.add_grade(reader),
            Keyword::UpdateExam => self.update_exam(reader),
            Keyword::UpdateGrade => self.update_grade(reader),
            Keyword::SearchStudent => self.search_student(reader),
            Keyword::SearchGrade => self.search_grade(reader),
            Keyword::DeleteStudent => self.delete_student(reader),
            Keyword::ListAllStudents => {
                self.list_all_students();
                Ok(())
            }
            // END is handled by the run loop.
            Keyword::End => Ok(()),
        }
    }

    fn add_student(&mut self, reader: &mut TokenReader) -> Result<()> {
        let id = reader.next_i32("student id")?;
        let name = reader.next_token("student name")?.to_string();
        let faculty = reader.next_token("student faculty")?.to_string();

        if self.store.student_exists(id) {
            self.say(format!("Student: {} already exists", id));
            return Ok(());
        }
        if !student_id_in_range(id) {
            self.say("Invalid student id".to_string());
            return Ok(());
        }
        if !valid_name(&name) {
            self.say("Invalid name".to_string());
            return Ok(());
        }
        if !valid_faculty(&faculty) {
            self.say("Invalid faculty".to_string());
            return Ok(());
        }

        self.store.add_student(Student { id, name, faculty });
        self.say(format!("Student: {} added", id));
        Ok(())
    }

    /// Read the exam kind token and its payload, validating the payload
    /// against its kind's bounds. Returns `Ok(None)` after reporting when
    /// the kind or payload is invalid.
    fn read_exam_kind(&mut self, reader: &mut TokenReader) -> Result<Option<ExamKind>> {
        let kind = reader.next_token("exam type")?;
        match kind {
            "WRITTEN" => {
                let duration = reader.next_i32("exam duration")?;
                if !duration_in_range(duration) {
                    self.say("Invalid duration".to_string());
                    return Ok(None);
                }
                Ok(Some(ExamKind::Written { duration }))
            }
            "DIGITAL" => {
                let software = reader.next_token("exam software")?.to_string();
                if !valid_software(&software) {
                    self.say("Invalid software".to_string());
                    return Ok(None);
                }
                Ok(Some(ExamKind::Digital { software }))
            }
            _ => {
                self.say("Invalid exam type".to_string());
                Ok(None)
            }
        }
    }

    fn add_exam(&mut self, reader: &mut TokenReader) -> Result<()> {
        let id = reader.next_i32("exam id")?;

        if self.store.exam_exists(id) {
            self.say(format!("Exam: {} already exists", id));
            return Ok(());
        }
        if !exam_id_in_range(id) {
            self.say("Invalid exam id".to_string());
            return Ok(());
        }
        let Some(kind) = self.read_exam_kind(reader)? else {
            return Ok(());
        };

        self.store.add_exam(Exam { id, kind });
        self.say(format!("Exam: {} added", id));
        Ok(())
    }

    fn add_grade(&mut self, reader: &mut TokenReader) -> Result<()> {
        let exam_id = reader.next_i32("exam id")?;
        let student_id = reader.next_i32("student id")?;
        let grade = reader.next_i32("grade")?;

        if !self.store.exam_exists(exam_id) {
            self.say("Exam not found".to_string());
            return Ok(());
        }
        if !exam_id_in_range(exam_id) {
            self.say("Invalid exam id".to_string());
            return Ok(());
        }
        if !self.store.student_exists(student_id) {
            self.say("Student not found".to_string());
            return Ok(());
        }
        if !student_id_in_range(student_id) {
            self.say("Invalid student id".to_string());
            return Ok(());
        }
        if !grade_in_range(grade) {
            self.say("Invalid grade".to_string());
            return Ok(());
        }

        self.store.add_grade(Grade {
            exam_id,
            student_id,
            grade,
        });
        self.say(format!("Grade {} added for the student: {}", grade, student_id));
        Ok(())
    }

    fn search_student(&mut self, reader: &mut TokenReader) -> Result<()> {
        let id = reader.next_i32("student id")?;

        let Some(student) = self.store.student(id) else {
            self.say("Student not found".to_string());
            return Ok(());
        };
        if !student_id_in_range(id) {
            self.say("Invalid student id".to_string());
            return Ok(());
        }

        let line = record_line(student);
        self.say(line);
        Ok(())
    }

    fn search_grade(&mut self, reader: &mut TokenReader) -> Result<()> {
        let exam_id = reader.next_i32("exam id")?;
        let student_id = reader.next_i32("student id")?;

        if !self.store.exam_exists(exam_id) {
            self.say("Exam not found".to_string());
            return Ok(());
        }
        if !exam_id_in_range(exam_id) {
            self.say("Invalid exam id".to_string());
            return Ok(());
        }
        if !self.store.student_exists(student_id) {
            self.say("Student not found".to_string());
            return Ok(());
        }
        if !student_id_in_range(student_id) {
            self.say("Invalid student id".to_string());
            return Ok(());
        }

        let Some(index) = self.store.last_grade_index(exam_id, student_id) else {
            self.say("Grade not found".to_string());
            return Ok(());
        };

        let line = match (
            self.store.exam(exam_id),
            self.store.student(student_id),
            self.store.grade(index),
        ) {
            (Some(exam), Some(student), Some(grade)) => format!(
                "Exam: {}, Student: {}, Name: {}, Grade: {}, {}",
                exam.id,
                student.id,
                student.name,
                grade.grade,
                exam.kind.summary()
            ),
            // Existence was checked above; an absent record here means the
            // store indices are inconsistent.
            _ => "Grade not found".to_string(),
        };
        self.say(line);
        Ok(())
    }

    fn update_exam(&mut self, reader: &mut TokenReader) -> Result<()> {
        let id = reader.next_i32("exam id")?;

        if !self.store.exam_exists(id) {
            self.say("Exam not found".to_string());
            return Ok(());
        }
        let Some(kind) = self.read_exam_kind(reader)? else {
            return Ok(());
        };

        if let Some(exam) = self.store.exam_mut(id) {
            exam.kind = kind;
        }
        self.say(format!("Exam: {} updated", id));
        Ok(())
    }

    fn update_grade(&mut self, reader: &mut TokenReader) -> Result<()> {
        let exam_id = reader.next_i32("exam id")?;
        let student_id = reader.next_i32("student id")?;
        let grade = reader.next_i32("grade")?;

        let Some(index) = self.store.last_grade_index(exam_id, student_id) else {
            self.say("Grade not found".to_string());
            return Ok(());
        };
        if !grade_in_range(grade) {
            self.say("Invalid grade".to_string());
            return Ok(());
        }

        if let Some(record) = self.store.grade_mut(index) {
            record.grade = grade;
        }
        self.say(format!(
            "Grade {} updated for the student: {}",
            grade, student_id
        ));
        Ok(())
    }

    fn delete_student(&mut self, reader: &mut TokenReader) -> Result<()> {
        let id = reader.next_i32("student id")?;
        self.store.delete_student(id);
        // Reported unconditionally, even when the id never existed.
        self.say(format!("Student: {} deleted", id));
        Ok(())
    }

    fn list_all_students(&mut self) {
        let lines: Vec<String> = self.store.students_live().map(record_line).collect();
        for line in lines {
            self.say(line);
        }
    }
}

fn record_line(student: &Student) -> String {
    format!(
        "ID: {}, Name: {}, Faculty: {}",
        student.id, student.name, student.faculty
    )
}
