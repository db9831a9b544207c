//! # roster
//!
//! An HTTP service for student records, kept in memory for the life of the
//! process, served by a small router on hyper.
//!
//! ## Layout
//!
//! - [`student`] — the record, its create/update bodies, field validation
//! - [`store`] — [`StudentStore`], an ordered list behind a mutex
//! - [`api`] — the route table mapping HTTP onto the store
//! - [`config`] / [`telemetry`] — layered configuration and logging setup
//! - [`Router`], [`Server`], [`Request`], [`Response`] — the HTTP layer
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use roster::{Server, StudentStore, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), roster::Error> {
//!     let store = Arc::new(StudentStore::seeded());
//!     Server::bind("0.0.0.0:8000").await?.serve(api::router(store)).await
//! }
//! ```

mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod store;
pub mod student;
pub mod telemetry;

pub use config::Config;
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::StudentStore;
pub use student::{Student, StudentId, StudentInput, StudentUpdate};
