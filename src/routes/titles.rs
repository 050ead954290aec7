use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{TitleEntry, TitleListResponse, TitlePage},
    routes::AppState,
};

/// Handler for paging through the catalog in position order
pub async fn list(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TitlePage>, QueryRejection>,
) -> AppResult<Json<TitleListResponse>> {
    let Query(page) = query?;
    let index = state.catalog.index();
    let titles = index
        .names()
        .enumerate()
        .skip(page.offset)
        .take(page.effective_limit())
        .map(|(position, title)| TitleEntry {
            position,
            title: title.to_string(),
        })
        .collect();

    Ok(Json(TitleListResponse {
        total: index.len(),
        offset: page.offset,
        titles,
    }))
}

/// Handler for looking up a single title by position
pub async fn get_by_position(
    State(state): State<Arc<AppState>>,
    path: Result<Path<usize>, PathRejection>,
) -> AppResult<Json<TitleEntry>> {
    let Path(position) = path?;
    // A bad position here comes from the client, not from the ranking engine.
    let title = state
        .catalog
        .index()
        .name_of(position)
        .map_err(|_| AppError::NotFound(format!("No title at position {}", position)))?;

    Ok(Json(TitleEntry {
        position,
        title: title.to_string(),
    }))
}
