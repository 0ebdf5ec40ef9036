use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use uwc_core::{collection_client, text};

use crate::AppState;

/// Handle text summary requests.
///
/// Failures become a 500 carrying the fetch error's message; a schedule
/// without any collection dates is a 404.
pub async fn handler(State(state): State<Arc<AppState>>) -> Result<Response, (StatusCode, String)> {
    let schedule = collection_client::get(
        &state.client,
        &state.config.base_url,
        state.config.uprn.as_deref(),
    )
    .await
    .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    if schedule.entries.is_empty() {
        return Err((StatusCode::NOT_FOUND, String::from(text::NO_ITEMS_MESSAGE)));
    }
    let response = (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        text::render(&schedule),
    )
        .into_response();
    Ok(response)
}
