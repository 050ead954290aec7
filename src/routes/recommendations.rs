use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendQuery, RecommendationResponse},
    routes::AppState,
    services::{recommend as recommend_titles, Recommendation},
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(params) = query?;
    let k = params.k.unwrap_or(state.default_k);
    if k > state.max_k {
        return Err(AppError::InvalidInput(format!(
            "k must be at most {}, got {}",
            state.max_k, k
        )));
    }

    tracing::info!(
        request_id = %request_id,
        movie_name = %params.movie_name,
        k,
        "Processing recommendation request"
    );

    match recommend_titles(&state.catalog, &params.movie_name, k)? {
        Recommendation::Found(recommendations) => {
            tracing::info!(
                request_id = %request_id,
                count = recommendations.len(),
                "Recommendations ready"
            );
            Ok(Json(RecommendationResponse::new(
                params.movie_name,
                recommendations,
            )))
        }
        Recommendation::NotFound => {
            tracing::info!(request_id = %request_id, "Movie not in catalog");
            Err(AppError::NotFound(format!(
                "Movie not found: {}",
                params.movie_name
            )))
        }
    }
}
