use super::handlers::{self, SharedSlot};
use super::response::panic_response;
use axum::routing::put;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Path of the single account resource
pub const ACCOUNT_PATH: &str = "/account";

/// Build the application router
///
/// Routes every method of `/account` to its handler, then wraps the routes in
/// panic recovery and, outermost, the access log so that recovered panics are
/// logged with their `500` status.
pub fn router(slot: SharedSlot) -> Router {
    Router::new()
        .route(
            ACCOUNT_PATH,
            put(handlers::open)
                .get(handlers::balance)
                .post(handlers::deposit)
                .delete(handlers::close),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(slot)
}
