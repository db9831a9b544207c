//! The student record and the bodies that create or replace one.
//!
//! Bodies are validated at the boundary: a [`StudentInput`] or
//! [`StudentUpdate`] only reaches the store after [`StudentInput::validate`]
//! or [`StudentUpdate::validate`] has accepted every field.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Identity of a student. Assigned by the store, always ≥ 1.
pub type StudentId = u64;

/// Character bounds per field, counted in Unicode scalar values.
pub const FULL_NAMES_LEN: RangeInclusive<usize> = 2..=255;
pub const EMAIL_LEN: RangeInclusive<usize> = 10..=255;
pub const GENDER_LEN: RangeInclusive<usize> = 4..=10;
pub const COURSE_LEN: RangeInclusive<usize> = 3..=100;

/// One enrolled student.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Student {
    pub student_id: StudentId,
    pub full_names: String,
    pub email: String,
    pub gender: String,
    pub course: String,
}

impl Student {
    /// Builds the stored record from a validated create body.
    pub fn from_input(student_id: StudentId, input: StudentInput) -> Self {
        Self {
            student_id,
            full_names: input.full_names,
            email: input.email,
            gender: input.gender,
            course: input.course,
        }
    }

    pub fn studies(&self, course: &str) -> bool {
        matches_loosely(&self.course, course)
    }

    pub fn has_gender(&self, gender: &str) -> bool {
        matches_loosely(&self.gender, gender)
    }
}

impl From<StudentUpdate> for Student {
    fn from(update: StudentUpdate) -> Self {
        Self {
            student_id: update.student_id,
            full_names: update.full_names,
            email: update.email,
            gender: update.gender,
            course: update.course,
        }
    }
}

/// Body of `POST /create-student`.
///
/// A client-supplied `student_id` is accepted and ignored; the store assigns
/// the id.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StudentInput {
    #[serde(default)]
    pub student_id: Option<StudentId>,
    pub full_names: String,
    pub email: String,
    pub gender: String,
    pub course: String,
}

impl StudentInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        check_profile(&mut errors, &self.full_names, &self.email, &self.gender, &self.course);
        finish(errors)
    }
}

/// Body of `PUT /update-student`: the id to replace plus every field.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StudentUpdate {
    pub student_id: StudentId,
    pub full_names: String,
    pub email: String,
    pub gender: String,
    pub course: String,
}

impl StudentUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.student_id == 0 {
            errors.push(FieldError::new("student_id", "must be greater than 0"));
        }
        check_profile(&mut errors, &self.full_names, &self.email, &self.gender, &self.course);
        finish(errors)
    }
}

/// One violated constraint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Checks `value` against a character-count range.
pub fn check_len(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    bounds: RangeInclusive<usize>,
) {
    if !bounds.contains(&value.chars().count()) {
        errors.push(FieldError::new(
            field,
            format!("length must be between {} and {} characters", bounds.start(), bounds.end()),
        ));
    }
}

/// Case- and surrounding-whitespace-insensitive equality.
pub fn matches_loosely(stored: &str, wanted: &str) -> bool {
    stored.trim().to_lowercase() == wanted.trim().to_lowercase()
}

fn check_profile(
    errors: &mut Vec<FieldError>,
    full_names: &str,
    email: &str,
    gender: &str,
    course: &str,
) {
    check_len(errors, "full_names", full_names, FULL_NAMES_LEN);
    check_len(errors, "email", email, EMAIL_LEN);
    check_len(errors, "gender", gender, GENDER_LEN);
    check_len(errors, "course", course, COURSE_LEN);
}

fn finish(errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() { Ok(()) } else { Err(ApiError::Validation(errors)) }
}

/// The five records a fresh store starts with.
pub fn seed() -> Vec<Student> {
    [
        (1, "Roddy Speed", "rspeed0@washington.edu", "Male", "Computer Science"),
        (2, "Theresa Yosevitz", "tyosevitz1@blogspot.com", "Female", "Business"),
        (3, "Ned Lamba", "nlamba2@t.co", "Male", "Economics"),
        (4, "Brianne Morgan", "bmorgan3@techcrunch.com", "Female", "Business"),
        (5, "Belia Drabble", "bdrabble4@sun.com", "Female", "Computer Science"),
    ]
    .into_iter()
    .map(|(student_id, full_names, email, gender, course)| Student {
        student_id,
        full_names: full_names.to_owned(),
        email: email.to_owned(),
        gender: gender.to_owned(),
        course: course.to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> StudentInput {
        StudentInput {
            student_id: None,
            full_names: "Ada Lovelace".into(),
            email: "ada@analytical.org".into(),
            gender: "Female".into(),
            course: "Mathematics".into(),
        }
    }

    fn field_names(err: ApiError) -> Vec<String> {
        match err {
            ApiError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut s = input();
        s.full_names = "Al".into();
        s.email = "a@b.co.uk1".into();
        s.gender = "Male".into();
        s.course = "Art".into();
        assert!(s.validate().is_ok());

        s.gender = "x".repeat(10);
        s.course = "c".repeat(100);
        s.full_names = "n".repeat(255);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let mut s = input();
        s.full_names = "A".into();
        s.email = "a@b.io".into();
        s.gender = "x".repeat(11);
        s.course = "CS".into();
        assert_eq!(
            field_names(s.validate().unwrap_err()),
            ["full_names", "email", "gender", "course"],
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut s = input();
        // 4 characters, 8 bytes
        s.gender = "ÄÖÜß".into();
        assert!(s.validate().is_ok());
        s.gender = "é".repeat(11);
        assert_eq!(field_names(s.validate().unwrap_err()), ["gender"]);
    }

    #[test]
    fn update_requires_positive_id() {
        let i = input();
        let update = StudentUpdate {
            student_id: 0,
            full_names: i.full_names,
            email: i.email,
            gender: i.gender,
            course: i.course,
        };
        assert_eq!(field_names(update.validate().unwrap_err()), ["student_id"]);
    }

    #[test]
    fn create_body_accepts_and_keeps_optional_id() {
        let body = r#"{"student_id":99,"full_names":"Ada Lovelace","email":"ada@analytical.org","gender":"Female","course":"Mathematics"}"#;
        let parsed: StudentInput = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.student_id, Some(99));

        let without_id: StudentInput = serde_json::from_str(
            r#"{"full_names":"Ada Lovelace","email":"ada@analytical.org","gender":"Female","course":"Mathematics"}"#,
        ).unwrap();
        assert_eq!(without_id.student_id, None);
    }

    #[test]
    fn loose_matching_trims_and_lowercases_both_sides() {
        assert!(matches_loosely("Computer Science", "  computer SCIENCE  "));
        assert!(matches_loosely(" Business ", "business"));
        assert!(!matches_loosely("Business", "Economics"));
    }

    #[test]
    fn seed_has_five_ascending_ids() {
        let ids: Vec<_> = seed().iter().map(|s| s.student_id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }
}
