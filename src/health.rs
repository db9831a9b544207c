//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Is the store serving, and how many records does it hold? |

use std::sync::Arc;

use serde::Serialize;

use crate::request::Request;
use crate::response::{Json, Response};
use crate::store::StudentStore;

/// Always `200 OK` with body `"ok"`. Works over any router state.
pub async fn liveness<S>(_state: Arc<S>, _req: Request) -> Response {
    Response::text("ok")
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub students: usize,
}

/// `200 OK` with `{"status":"ready","students":N}`. Taking the store lock
/// proves the store is reachable.
pub async fn readiness(store: Arc<StudentStore>, _req: Request) -> Json<Readiness> {
    Json(Readiness { status: "ready", students: store.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::response::IntoResponse;

    #[tokio::test]
    async fn liveness_is_plain_ok() {
        let res = liveness(Arc::new(()), Request::from_target(Method::Get, "/healthz", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"ok");
    }

    #[tokio::test]
    async fn readiness_reports_record_count() {
        let store = Arc::new(StudentStore::seeded());
        let res = readiness(store, Request::from_target(Method::Get, "/readyz", ""))
            .await
            .into_response();
        assert_eq!(res.body(), br#"{"status":"ready","students":5}"#);
    }
}
