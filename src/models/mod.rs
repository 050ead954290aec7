use serde::{Deserialize, Serialize};

/// A single recommended movie returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedTitle {
    /// Position of the title in the catalog
    pub position: usize,
    pub title: String,
    /// Similarity to the queried title
    pub score: f64,
}

// ============================================================================
// Recommendation endpoint
// ============================================================================

/// Query string for `GET /api/v1/recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub movie_name: String,
    /// Number of recommendations, falls back to the configured default
    #[serde(default)]
    pub k: Option<usize>,
}

/// Response with recommended titles, most similar first
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub movie_name: String,
    /// Titles only, in rank order
    pub recommended_movies: Vec<String>,
    pub recommendations: Vec<RecommendedTitle>,
}

impl RecommendationResponse {
    pub fn new(movie_name: String, recommendations: Vec<RecommendedTitle>) -> Self {
        let recommended_movies = recommendations.iter().map(|r| r.title.clone()).collect();
        Self {
            movie_name,
            recommended_movies,
            recommendations,
        }
    }
}

// ============================================================================
// Title listing endpoints
// ============================================================================

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const MAX_PAGE_LIMIT: usize = 500;

/// Paging parameters for `GET /api/v1/titles`
#[derive(Debug, Default, Deserialize)]
pub struct TitlePage {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TitlePage {
    /// Requested limit, defaulted and capped
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT)
    }
}

/// A catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleEntry {
    pub position: usize,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TitleListResponse {
    /// Number of titles in the whole catalog
    pub total: usize,
    pub offset: usize,
    pub titles: Vec<TitleEntry>,
}
