//! Popular-word suggestion handler.

use axum::extract::State;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::web::routes::{cache, with_cache_control};

#[derive(Debug, Deserialize)]
pub struct PopularWordParams {
    pub seed: Option<String>,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(default)]
    pub field: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PopularWordResponse {
    pub words: Vec<String>,
}

/// `GET /api/popular-words?seed=&tag=a&tag=b&field=f&exclude=x`
///
/// Dimensions not supplied fall back to the configured defaults. Roles are
/// resolved server-side, never taken from the wire. Never fails: backend
/// trouble degrades to an empty word list.
pub(super) async fn popular_words(
    State(state): State<AppState>,
    axum_extra::extract::Query(params): axum_extra::extract::Query<PopularWordParams>,
) -> Response {
    let defaults = &state.suggest_defaults;
    let tags = if params.tag.is_empty() {
        &defaults.tags
    } else {
        &params.tag
    };
    let fields = if params.field.is_empty() {
        &defaults.fields
    } else {
        &params.field
    };
    let excludes = if params.exclude.is_empty() {
        &defaults.excludes
    } else {
        &params.exclude
    };

    let words = state
        .word_service
        .word_list(params.seed.as_deref(), tags, fields, excludes)
        .await;

    with_cache_control(
        PopularWordResponse {
            words: (*words).clone(),
        },
        cache::SUGGEST,
    )
}
