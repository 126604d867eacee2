//! Slot arenas and the record store
//!
//! Records live in append-only slot arenas:
//! - Every insertion appends a new slot; slots are never reclaimed or
//!   reused, so a record's slot index is stable for the life of the run.
//! - Deletion flips the slot to [`SlotState::Tombstone`] in place. The total
//!   slot count is unchanged by deletion and observable through
//!   [`Arena::slot_count`].
//! - A tombstoned id is invisible to existence checks, so the same id may be
//!   added again later; the re-add appends a fresh slot.
//!
//! Students and exams carry an id → slot index side map so existence checks
//! don't rescan the arena; grades keep the plain linear scan because lookups
//! must find the *last* record for an (exam, student) pair.

use rustc_hash::FxHashMap;

use super::record::{Exam, Grade, Student};

/// Liveness flag of one arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Live,
    Tombstone,
}

/// One append-only slot holding a record and its liveness flag.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    pub record: T,
    pub state: SlotState,
}

/// Append-only arena of record slots with tombstone deletion.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    /// Append a record, returning its permanent slot index.
    pub fn push(&mut self, record: T) -> usize {
        self.slots.push(Slot {
            record,
            state: SlotState::Live,
        });
        self.slots.len() - 1
    }

    /// Borrow the record in a slot if the slot is live.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(slot) if slot.state == SlotState::Live => Some(&slot.record),
            _ => None,
        }
    }

    /// Mutably borrow the record in a slot if the slot is live.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.state == SlotState::Live => Some(&mut slot.record),
            _ => None,
        }
    }

    /// Mark a slot as deleted. The slot itself stays in place.
    pub fn tombstone(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.state = SlotState::Tombstone;
        }
    }

    /// Total number of slots, tombstones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Live records in insertion order.
    pub fn iter_live(&self) -> impl Iterator<Item = &T> {
        self.slots
            .iter()
            .filter(|slot| slot.state == SlotState::Live)
            .map(|slot| &slot.record)
    }

    /// Live (index, record) pairs in insertion order.
    pub fn iter_live_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.state == SlotState::Live)
            .map(|(i, slot)| (i, &slot.record))
    }
}

/// The process-wide entity store for the record-store program.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Arena<Student>,
    exams: Arena<Exam>,
    grades: Arena<Grade>,

    /// Live student id → slot index. Entries are removed on deletion so a
    /// deleted id no longer counts as existing.
    student_index: FxHashMap<i32, usize>,

    /// Live exam id → slot index.
    exam_index: FxHashMap<i32, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    pub fn student_exists(&self, id: i32) -> bool {
        self.student_index.contains_key(&id)
    }

    pub fn exam_exists(&self, id: i32) -> bool {
        self.exam_index.contains_key(&id)
    }

    /// Append a student. The caller has already rejected duplicates.
    pub fn add_student(&mut self, student: Student) {
        let id = student.id;
        let index = self.students.push(student);
        self.student_index.insert(id, index);
    }

    /// Append an exam. The caller has already rejected duplicates.
    pub fn add_exam(&mut self, exam: Exam) {
        let id = exam.id;
        let index = self.exams.push(exam);
        self.exam_index.insert(id, index);
    }

    /// Append a grade. Duplicate (exam, student) pairs are allowed; later
    /// records shadow earlier ones by position.
    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    pub fn student(&self, id: i32) -> Option<&Student> {
        self.student_index
            .get(&id)
            .and_then(|&index| self.students.get(index))
    }

    pub fn exam(&self, id: i32) -> Option<&Exam> {
        self.exam_index
            .get(&id)
            .and_then(|&index| self.exams.get(index))
    }

    pub fn exam_mut(&mut self, id: i32) -> Option<&mut Exam> {
        match self.exam_index.get(&id) {
            Some(&index) => self.exams.get_mut(index),
            None => None,
        }
    }

    /// Scan every grade slot and keep the index of the *last* live record
    /// matching the pair. The full scan is the lookup contract: the store
    /// never deduplicates, so only position distinguishes an update.
    pub fn last_grade_index(&self, exam_id: i32, student_id: i32) -> Option<usize> {
        let mut found = None;
        for (index, grade) in self.grades.iter_live_indexed() {
            if grade.exam_id == exam_id && grade.student_id == student_id {
                found = Some(index);
            }
        }
        found
    }

    pub fn grade(&self, index: usize) -> Option<&Grade> {
        self.grades.get(index)
    }

    pub fn grade_mut(&mut self, index: usize) -> Option<&mut Grade> {
        self.grades.get_mut(index)
    }

    /// Tombstone every student slot with this id and every grade slot owned
    /// by it. Succeeds (silently) even when nothing matches.
    pub fn delete_student(&mut self, id: i32) {
        let doomed: Vec<usize> = self
            .students
            .iter_live_indexed()
            .filter(|(_, student)| student.id == id)
            .map(|(index, _)| index)
            .collect();
        for index in doomed {
            self.students.tombstone(index);
        }
        self.student_index.remove(&id);

        let doomed_grades: Vec<usize> = self
            .grades
            .iter_live_indexed()
            .filter(|(_, grade)| grade.student_id == id)
            .map(|(index, _)| index)
            .collect();
        for index in doomed_grades {
            self.grades.tombstone(index);
        }
    }

    /// Live students in insertion order.
    pub fn students_live(&self) -> impl Iterator<Item = &Student> {
        self.students.iter_live()
    }

    /// Total student slots including tombstones.
    pub fn student_slot_count(&self) -> usize {
        self.students.slot_count()
    }

    /// Total grade slots including tombstones.
    pub fn grade_slot_count(&self) -> usize {
        self.grades.slot_count()
    }
}
