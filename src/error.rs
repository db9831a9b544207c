//! Error types.
//!
//! Two layers:
//!
//! - [`Error`] covers infrastructure failures: reading configuration,
//!   installing the logger, binding the listener. These end the process.
//! - [`ApiError`] covers everything a single request can get wrong. It
//!   converts into a 404 or 422 [`Response`](crate::Response), so handlers
//!   return `Result<_, ApiError>` and bail out with `?`.

use serde::Serialize;
use thiserror::Error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::student::{FieldError, StudentId};

/// Result alias for infrastructure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type returned by roster's fallible startup operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Binding or inspecting the TCP listener failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be assembled from its sources.
    #[error("configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A global `tracing` subscriber was already installed.
    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

/// A request that cannot be served.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// No student carries the requested id.
    #[error("student {0} not found")]
    NotFound(StudentId),

    /// One or more fields broke their declared bounds.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// The body was not valid JSON for the expected shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// The query string was missing a parameter or could not be decoded.
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// A path parameter was not a positive integer.
    #[error("invalid path parameter `{name}`: {value:?} is not a positive integer")]
    InvalidPathParam { name: &'static str, value: String },
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::NotFound(_) => Status::NotFound,
            Self::Validation(_)
            | Self::MalformedBody(_)
            | Self::MalformedQuery(_)
            | Self::InvalidPathParam { .. } => Status::UnprocessableContent,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let errors = match &self {
            Self::Validation(errors) => Some(errors.as_slice()),
            _ => None,
        };
        let body = ErrorBody { detail: self.to_string(), errors };
        Response::builder().status(self.status()).serialize(&body)
    }
}
