//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. The router also owns the
//! application state and hands an `Arc` of it to every handler.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: Arc<S>,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new(state: Arc<S>) -> Self {
        Self { routes: HashMap::new(), state }
    }

    pub fn state(&self) -> &Arc<S> {
        &self.state
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods that have a route for `path`, sorted for a stable `allow` header.
    pub(crate) fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut methods: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| *method)
            .collect();
        methods.sort();
        methods
    }

    /// Routes one request and produces one response.
    ///
    /// A miss on every method is `404`; a miss on this method only is `405`
    /// with an `allow` header listing the methods that do match.
    pub async fn handle(&self, mut req: Request) -> Response {
        match self.lookup(req.method, &req.path) {
            Some((handler, params)) => {
                req.set_params(params);
                handler.call(Arc::clone(&self.state), req).await
            }
            None => {
                let allowed = self.allowed_methods(&req.path);
                if allowed.is_empty() {
                    debug!(path = %req.path, "no route");
                    return Response::status(Status::NotFound);
                }
                let allow = allowed.iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Response::builder()
                    .status(Status::MethodNotAllowed)
                    .header("allow", &allow)
                    .no_body()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo_param(_state: Arc<()>, req: Request) -> Response {
        Response::text(req.param("id").unwrap_or("none").to_owned())
    }

    async fn no_content(_state: Arc<()>, _req: Request) -> Status {
        Status::NoContent
    }

    fn router() -> Router<()> {
        Router::new(Arc::new(()))
            .on(Method::Get, "/items/{id}", echo_param)
            .on(Method::Delete, "/items/{id}", no_content)
            .on(Method::Get, "/items/special/", no_content)
    }

    #[tokio::test]
    async fn path_params_reach_the_handler() {
        let res = router().handle(Request::from_target(Method::Get, "/items/42", "")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"42");
    }

    #[tokio::test]
    async fn static_segment_wins_over_param() {
        let res = router().handle(Request::from_target(Method::Get, "/items/special/", "")).await;
        assert_eq!(res.status_code(), 204);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = router().handle(Request::from_target(Method::Get, "/nothing", "")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn wrong_method_lists_allowed_ones() {
        let res = router().handle(Request::from_target(Method::Put, "/items/1", "")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("DELETE, GET"));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic_at_registration() {
        let _ = Router::new(Arc::new(()))
            .on(Method::Get, "/items/{id}", no_content)
            .on(Method::Get, "/items/{key}", no_content);
    }
}
