use std::sync::Arc;

use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::debug_span;

use crate::{
    data::AppState,
    routes::{cohort, course_card, health, program},
};

pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest_service("/assets", ServeDir::new(&state.assets_dir))
        .route("/health", get(health::get))
        .route("/course-card", post(course_card::post))
        .route("/course-run/card", post(course_card::post_run))
        .nest(
            "/program",
            Router::new()
                .route("/", post(program::page))
                .route("/details", post(program::details)),
        )
        .route("/cohort/header", post(cohort::header))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    debug_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
}
