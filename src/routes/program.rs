use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use maud::Markup;
use tracing::{instrument, warn};

use crate::{
    common::{AppError, ProgramProgressData},
    components::{self, program_details},
    data::AppState,
    middlewares::Locale,
    views::{self, ProgramDetailsOptions},
};

#[instrument(level = "debug", skip(state))]
pub async fn details(
    State(state): State<Arc<AppState>>,
    Locale(lang): Locale,
    Json(progress): Json<ProgramProgressData>,
) -> Markup {
    if !progress.is_consistent() {
        // render what we were given; the counts come from the caller
        warn!(?progress, "program counts do not add up to the total");
    }
    program_details::view(state.catalogs.get(&lang), &progress)
}

#[instrument(level = "debug", skip(state, options))]
pub async fn page(
    State(state): State<Arc<AppState>>,
    Locale(lang): Locale,
    Json(options): Json<ProgramDetailsOptions>,
) -> Result<Markup, AppError> {
    let view = views::construct(options).map_err(|error| {
        warn!(%error, "could not build program details view");
        AppError::Code(StatusCode::UNPROCESSABLE_ENTITY)
    })?;

    let content = view.render(state.catalogs.get(&lang))?;
    Ok(components::base(&view.options().program_data.title, &lang, content))
}
