use std::sync::Arc;

use axum::{extract::State, Json};
use maud::Markup;
use tracing::instrument;

use crate::{common::CohortData, components::cohort_header, data::AppState, middlewares::Locale};

#[instrument(level = "debug", skip(state))]
pub async fn header(
    State(state): State<Arc<AppState>>,
    Locale(lang): Locale,
    Json(cohort): Json<CohortData>,
) -> Markup {
    cohort_header::view(state.catalogs.get(&lang), &cohort)
}
