//! JSON API for the dashboard frontend
//!
//! Serves the three dashboard tabs: filter choices plus ranked
//! recommendations, visit-mode prediction, and the insights chart series.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    config::DefaultsConfig,
    dataset::Dataset,
    error::TouralyticsError,
    insights::{self, RegionRating},
    models::{FilterCriteria, RecommendationRow, TravelerProfile, VisitMode, REGION_ALL},
    predict, recommend,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    /// The immutable dataset snapshot loaded at startup
    pub dataset: Arc<Dataset>,
    /// Configured recommendation-count bounds
    pub defaults: DefaultsConfig,
}

impl ApiState {
    /// Create API state over a loaded dataset
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, defaults: DefaultsConfig) -> Self {
        Self { dataset, defaults }
    }
}

/// Choices offered by the selection widgets
#[derive(Serialize, Deserialize)]
pub struct ApiFilterChoices {
    pub visit_modes: Vec<String>,
    pub attraction_types: Vec<String>,
    /// Regions with the "All" sentinel prepended
    pub regions: Vec<String>,
    pub age_groups: Vec<String>,
    pub budgets: Vec<String>,
    pub top_n: ApiTopNBounds,
}

/// Bounds for the recommendation-count slider
#[derive(Serialize, Deserialize)]
pub struct ApiTopNBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// One recommendation request from the dashboard
#[derive(Serialize, Deserialize)]
pub struct ApiRecommendRequest {
    pub visit_mode: String,
    pub attraction_type: String,
    /// Absent or "All" means no region restriction
    pub region: Option<String>,
    /// Absent means the configured default count
    pub top_n: Option<u32>,
}

/// One ranked destination
#[derive(Serialize, Deserialize)]
pub struct ApiRecommendation {
    pub city: String,
    pub country: String,
    pub avg_rating: f64,
}

impl From<RecommendationRow> for ApiRecommendation {
    fn from(row: RecommendationRow) -> Self {
        Self {
            city: row.city,
            country: row.country,
            avg_rating: row.avg_rating,
        }
    }
}

/// Prediction result payload
#[derive(Serialize, Deserialize)]
pub struct ApiPrediction {
    pub visit_mode: VisitMode,
}

/// One bar of the visit-mode frequency chart
#[derive(Serialize, Deserialize)]
pub struct ApiVisitModeCount {
    pub visit_mode: String,
    pub count: u64,
}

/// Both chart series for the insights tab
#[derive(Serialize, Deserialize)]
pub struct ApiInsights {
    pub visit_mode_frequency: Vec<ApiVisitModeCount>,
    pub average_rating_by_region: Vec<RegionRating>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/filters", get(get_filters))
        .route("/recommendations", post(post_recommendations))
        .route("/predict", post(post_predict))
        .route("/insights", get(get_insights))
        .with_state(state)
}

type ApiError = (StatusCode, String);

fn map_error(err: &TouralyticsError) -> ApiError {
    match err {
        TouralyticsError::InvalidCriteria { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.user_message())
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, err.user_message()),
    }
}

async fn get_filters(State(state): State<ApiState>) -> Json<ApiFilterChoices> {
    let mut regions = Vec::with_capacity(state.dataset.regions().len() + 1);
    regions.push(REGION_ALL.to_string());
    regions.extend(state.dataset.regions().iter().cloned());

    Json(ApiFilterChoices {
        visit_modes: state.dataset.visit_modes().to_vec(),
        attraction_types: state.dataset.attraction_types().to_vec(),
        regions,
        age_groups: crate::models::AgeGroup::ALL
            .iter()
            .map(|g| g.as_str().to_string())
            .collect(),
        budgets: crate::models::Budget::ALL
            .iter()
            .map(|b| b.as_str().to_string())
            .collect(),
        top_n: ApiTopNBounds {
            min: 1,
            max: state.defaults.max_recommendations,
            default: state.defaults.top_n,
        },
    })
}

async fn post_recommendations(
    State(state): State<ApiState>,
    Json(request): Json<ApiRecommendRequest>,
) -> Result<Json<Vec<ApiRecommendation>>, ApiError> {
    let criteria = FilterCriteria::from_selection(
        request.visit_mode,
        request.attraction_type,
        request.region.as_deref().unwrap_or(REGION_ALL),
    );

    let top_n = request
        .top_n
        .unwrap_or(state.defaults.top_n)
        .clamp(1, state.defaults.max_recommendations);

    let rows = recommend::recommend(&state.dataset, &criteria, top_n as usize)
        .map_err(|e| map_error(&e))?;

    Ok(Json(rows.into_iter().map(ApiRecommendation::from).collect()))
}

async fn post_predict(
    Json(profile): Json<TravelerProfile>,
) -> Result<Json<ApiPrediction>, ApiError> {
    if profile.group_size == 0 {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Group size must be at least 1".to_string(),
        ));
    }

    Ok(Json(ApiPrediction {
        visit_mode: predict::predict(&profile),
    }))
}

async fn get_insights(State(state): State<ApiState>) -> Json<ApiInsights> {
    let frequency = insights::visit_mode_frequency(&state.dataset)
        .into_iter()
        .map(|(visit_mode, count)| ApiVisitModeCount { visit_mode, count })
        .collect();

    Json(ApiInsights {
        visit_mode_frequency: frequency,
        average_rating_by_region: insights::average_rating_by_region(&state.dataset),
    })
}
