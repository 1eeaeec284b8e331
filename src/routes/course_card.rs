use std::sync::Arc;

use axum::{extract::State, Json};
use maud::Markup;
use tracing::instrument;

use crate::{
    common::{CourseCardData, CourseRun},
    components::course_card,
    data::AppState,
    middlewares::Locale,
};

#[instrument(level = "debug", skip(state))]
pub async fn post(
    State(state): State<Arc<AppState>>,
    Locale(lang): Locale,
    Json(course): Json<CourseCardData>,
) -> Markup {
    course_card::view(state.catalogs.get(&lang), &course)
}

#[instrument(level = "debug", skip(state))]
pub async fn post_run(
    State(state): State<Arc<AppState>>,
    Locale(lang): Locale,
    Json(run): Json<CourseRun>,
) -> Markup {
    course_card::view(state.catalogs.get(&lang), &CourseCardData::from(&run))
}
