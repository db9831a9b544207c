//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every request on its way through the
//! server. Currently:
//! - [`trace`] — per-request span with method, path, status and latency

pub mod trace;
