//! HTTP routes over the student store.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/students` | 200, every student |
//! | GET | `/students/{student_id}` | 200, one student |
//! | GET | `/students/course/?course_name=` | 200, matching students |
//! | GET | `/students/?gender=` | 200, matching students |
//! | POST | `/create-student` | 201, the created student |
//! | PUT | `/update-student` | 204 |
//! | DELETE | `/delete-student/{student_id}` | 204 |
//!
//! Input is validated before the store is touched. Misses on an id are 404,
//! every kind of bad input is 422, and filters that match nothing return `[]`.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::{Json, Response};
use crate::router::Router;
use crate::status::Status;
use crate::store::StudentStore;
use crate::student::{self, COURSE_LEN, GENDER_LEN, Student, StudentId, StudentInput, StudentUpdate};

type ApiResult<T> = Result<T, ApiError>;

/// Builds the full route table over `store`, health probes included.
pub fn router(store: Arc<StudentStore>) -> Router<StudentStore> {
    Router::new(store)
        .on(Method::Get,    "/students",                     list_students)
        .on(Method::Get,    "/students/",                    list_by_gender)
        .on(Method::Get,    "/students/course/",             list_by_course)
        .on(Method::Get,    "/students/{student_id}",        get_student)
        .on(Method::Post,   "/create-student",               create_student)
        .on(Method::Put,    "/update-student",               update_student)
        .on(Method::Delete, "/delete-student/{student_id}",  delete_student)
        .on(Method::Get,    "/healthz",                      health::liveness::<StudentStore>)
        .on(Method::Get,    "/readyz",                       health::readiness)
}

// GET /students
async fn list_students(store: Arc<StudentStore>, _req: Request) -> Json<Vec<Student>> {
    Json(store.list_all())
}

// GET /students/{student_id}
async fn get_student(store: Arc<StudentStore>, req: Request) -> ApiResult<Json<Student>> {
    let id = student_id_param(&req)?;
    Ok(Json(store.get_by_id(id)?))
}

#[derive(Deserialize)]
struct CourseQuery {
    course_name: String,
}

// GET /students/course/?course_name=
async fn list_by_course(store: Arc<StudentStore>, req: Request) -> ApiResult<Json<Vec<Student>>> {
    let CourseQuery { course_name } = query(&req)?;
    check_query_len("course_name", &course_name, COURSE_LEN)?;
    Ok(Json(store.list_by_course(&course_name)))
}

#[derive(Deserialize)]
struct GenderQuery {
    gender: String,
}

// GET /students/?gender=
async fn list_by_gender(store: Arc<StudentStore>, req: Request) -> ApiResult<Json<Vec<Student>>> {
    let GenderQuery { gender } = query(&req)?;
    check_query_len("gender", &gender, GENDER_LEN)?;
    Ok(Json(store.list_by_gender(&gender)))
}

// POST /create-student → 201 + location
async fn create_student(store: Arc<StudentStore>, req: Request) -> ApiResult<Response> {
    let input: StudentInput = body(&req)?;
    input.validate()?;

    let created = store.create(input);
    Ok(Response::builder()
        .status(Status::Created)
        .header("location", &format!("/students/{}", created.student_id))
        .serialize(&created))
}

// PUT /update-student → 204
async fn update_student(store: Arc<StudentStore>, req: Request) -> ApiResult<Status> {
    let update: StudentUpdate = body(&req)?;
    update.validate()?;

    store.update(update.into())?;
    Ok(Status::NoContent)
}

// DELETE /delete-student/{student_id} → 204
async fn delete_student(store: Arc<StudentStore>, req: Request) -> ApiResult<Status> {
    let id = student_id_param(&req)?;
    store.delete(id)?;
    Ok(Status::NoContent)
}

// ── Extraction helpers ────────────────────────────────────────────────────────

fn student_id_param(req: &Request) -> ApiResult<StudentId> {
    let raw = req.param("student_id").unwrap_or_default();
    match raw.parse::<StudentId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidPathParam { name: "student_id", value: raw.to_owned() }),
    }
}

fn query<T: DeserializeOwned>(req: &Request) -> ApiResult<T> {
    req.query_as().map_err(|e| ApiError::MalformedQuery(e.to_string()))
}

fn body<T: DeserializeOwned>(req: &Request) -> ApiResult<T> {
    req.json().map_err(|e| ApiError::MalformedBody(e.to_string()))
}

fn check_query_len(
    field: &str,
    value: &str,
    bounds: std::ops::RangeInclusive<usize>,
) -> ApiResult<()> {
    let mut errors = Vec::new();
    student::check_len(&mut errors, field, value, bounds);
    if errors.is_empty() { Ok(()) } else { Err(ApiError::Validation(errors)) }
}
