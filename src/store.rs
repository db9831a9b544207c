//! In-memory student store.
//!
//! An ordered `Vec<Student>` behind a [`parking_lot::Mutex`]. Every operation
//! holds the lock for its whole read-modify-write sequence, so concurrent
//! creates never hand out the same id and concurrent updates or deletes never
//! act on a stale position. Lookups are linear scans.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::student::{self, Student, StudentId, StudentInput};

/// The record store shared by every handler.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: Mutex<Vec<Student>>,
}

impl StudentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `students` in the given order. Records are trusted and
    /// not re-validated.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self { students: Mutex::new(students) }
    }

    /// A store holding the five demo records, ids 1 to 5.
    pub fn seeded() -> Self {
        Self::with_students(student::seed())
    }

    pub fn len(&self) -> usize {
        self.students.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.lock().is_empty()
    }

    /// Every student, in insertion order.
    pub fn list_all(&self) -> Vec<Student> {
        self.students.lock().clone()
    }

    pub fn get_by_id(&self, id: StudentId) -> Result<Student, ApiError> {
        self.students.lock()
            .iter()
            .find(|s| s.student_id == id)
            .cloned()
            .ok_or_else(|| {
                debug!(student_id = id, "lookup missed");
                ApiError::NotFound(id)
            })
    }

    /// Students whose course matches `name`, ignoring case and surrounding
    /// whitespace on both sides.
    pub fn list_by_course(&self, name: &str) -> Vec<Student> {
        self.filter(|s| s.studies(name))
    }

    /// Students whose gender matches `gender` under the same rule as
    /// [`list_by_course`](Self::list_by_course).
    pub fn list_by_gender(&self, gender: &str) -> Vec<Student> {
        self.filter(|s| s.has_gender(gender))
    }

    /// Appends a validated student under the next id: the last record's id
    /// plus one, or 1 on an empty store. `input.student_id` is ignored.
    pub fn create(&self, input: StudentInput) -> Student {
        let mut students = self.students.lock();
        let student_id = students.last().map_or(1, |last| last.student_id + 1);
        let student = Student::from_input(student_id, input);
        students.push(student.clone());
        info!(student_id, total = students.len(), "student created");
        student
    }

    /// Replaces the whole record carrying `student.student_id`, keeping its
    /// position. The store is untouched when no record matches.
    pub fn update(&self, student: Student) -> Result<Student, ApiError> {
        let mut students = self.students.lock();
        let id = student.student_id;
        let Some(slot) = students.iter_mut().find(|s| s.student_id == id) else {
            debug!(student_id = id, "update missed");
            return Err(ApiError::NotFound(id));
        };
        *slot = student.clone();
        info!(student_id = id, "student updated");
        Ok(student)
    }

    /// Removes the first record with `id` and returns it.
    pub fn delete(&self, id: StudentId) -> Result<Student, ApiError> {
        let mut students = self.students.lock();
        let Some(pos) = students.iter().position(|s| s.student_id == id) else {
            debug!(student_id = id, "delete missed");
            return Err(ApiError::NotFound(id));
        };
        let removed = students.remove(pos);
        info!(student_id = id, total = students.len(), "student deleted");
        Ok(removed)
    }

    fn filter(&self, pred: impl Fn(&Student) -> bool) -> Vec<Student> {
        self.students.lock()
            .iter()
            .filter(|s| pred(s))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn input(name: &str) -> StudentInput {
        StudentInput {
            student_id: Some(500),
            full_names: name.into(),
            email: "someone@example.com".into(),
            gender: "Female".into(),
            course: "Physics".into(),
        }
    }

    fn ids(students: &[Student]) -> Vec<StudentId> {
        students.iter().map(|s| s.student_id).collect()
    }

    #[test]
    fn first_create_on_empty_store_gets_id_one() {
        let store = StudentStore::new();
        assert!(store.is_empty());
        let created = store.create(input("Grace Hopper"));
        assert_eq!(created.student_id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_follows_last_id_and_ignores_client_id() {
        let store = StudentStore::seeded();
        let created = store.create(input("Grace Hopper"));
        assert_eq!(created.student_id, 6);
        assert_eq!(store.len(), 6);
        assert_eq!(store.list_all().last(), Some(&created));
    }

    #[test]
    fn get_by_id_finds_every_present_id() {
        let store = StudentStore::seeded();
        for id in 1..=5 {
            assert_eq!(store.get_by_id(id).unwrap().student_id, id);
        }
        assert_eq!(store.get_by_id(42), Err(ApiError::NotFound(42)));
    }

    #[test]
    fn course_filter_ignores_case_and_whitespace() {
        let store = StudentStore::seeded();
        let exact = store.list_by_course("Computer Science");
        let loose = store.list_by_course("  computer SCIENCE  ");
        assert_eq!(ids(&exact), [1, 5]);
        assert_eq!(exact, loose);
        assert!(store.list_by_course("Astrology").is_empty());
    }

    #[test]
    fn gender_filter_preserves_insertion_order() {
        let store = StudentStore::seeded();
        assert_eq!(ids(&store.list_by_gender("female")), [2, 4, 5]);
        assert_eq!(ids(&store.list_by_gender(" MALE ")), [1, 3]);
    }

    #[test]
    fn update_replaces_in_place() {
        let store = StudentStore::seeded();
        let mut changed = store.get_by_id(3).unwrap();
        changed.course = "Philosophy".into();
        store.update(changed.clone()).unwrap();

        let all = store.list_all();
        assert_eq!(all[2], changed);
        assert_eq!(ids(&all), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn update_of_missing_id_leaves_store_unchanged() {
        let store = StudentStore::seeded();
        let before = store.list_all();
        let mut ghost = before[0].clone();
        ghost.student_id = 99;
        assert_eq!(store.update(ghost), Err(ApiError::NotFound(99)));
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn delete_succeeds_once_then_misses() {
        let store = StudentStore::seeded();
        assert_eq!(store.delete(2).unwrap().student_id, 2);
        assert_eq!(store.len(), 4);
        assert_eq!(store.delete(2), Err(ApiError::NotFound(2)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn deleting_the_last_record_frees_its_id() {
        let store = StudentStore::seeded();
        store.delete(5).unwrap();
        assert_eq!(store.create(input("Grace Hopper")).student_id, 5);
    }

    #[test]
    fn concurrent_creates_hand_out_distinct_ids() {
        let store = Arc::new(StudentStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25).map(|_| store.create(input("Grace Hopper")).student_id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<StudentId> = handles.into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=200).collect::<Vec<_>>());
    }
}
