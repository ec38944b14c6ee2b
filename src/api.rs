use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::competitions::{self, CompetitionEntry, CompetitionRecord};
use crate::store::DataStore;
use crate::xg::{self, ShotPosition};

/// Request-terminal errors, rendered as `{"detail": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(err) => {
                error!("request failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// Extractor rejections (bad path segment, missing query param, malformed
// body) all count as validation failures.
impl From<PathRejection> for ApiError {
    fn from(rej: PathRejection) -> Self {
        ApiError::Validation(rej.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rej: QueryRejection) -> Self {
        ApiError::Validation(rej.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        ApiError::Validation(rej.body_text())
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub n: String,
}

#[derive(Debug, Serialize)]
pub struct XgResponse {
    pub shot_xg: f64,
}

pub fn router(store: Arc<DataStore>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/list/competitions", get(list_competitions))
        .route("/competitions/id/:competition_id", get(competition_by_id))
        .route("/competitions/name", get(competition_by_name))
        .route("/predict", post(predict))
        .with_state(store)
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Football analytics API. Endpoints: GET /list/competitions, \
                    GET /competitions/id/{competition_id}, GET /competitions/name?n=, \
                    POST /predict"
    }))
}

async fn list_competitions(
    State(store): State<Arc<DataStore>>,
) -> Result<Json<HashMap<String, CompetitionEntry>>, ApiError> {
    let records = store.competitions()?;
    Ok(Json(competitions::list_competitions(records)))
}

async fn competition_by_id(
    State(store): State<Arc<DataStore>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<CompetitionRecord>>, ApiError> {
    let Path(id) = id?;
    if id <= 0 {
        return Err(ApiError::Validation(format!(
            "competition_id must be greater than 0, got {id}"
        )));
    }
    let records = store.competitions()?;
    let hits: Vec<CompetitionRecord> = competitions::competitions_by_id(records, id)
        .into_iter()
        .cloned()
        .collect();
    if hits.is_empty() {
        return Err(ApiError::NotFound("Invalid competition ID"));
    }
    Ok(Json(hits))
}

async fn competition_by_name(
    State(store): State<Arc<DataStore>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Vec<CompetitionRecord>>, ApiError> {
    let Query(query) = query?;
    let records = store.competitions()?;
    let hits: Vec<CompetitionRecord> = competitions::competitions_by_name(records, &query.n)
        .into_iter()
        .cloned()
        .collect();
    if hits.is_empty() {
        return Err(ApiError::NotFound("Invalid competition name"));
    }
    Ok(Json(hits))
}

async fn predict(
    State(store): State<Arc<DataStore>>,
    shot: Result<Json<ShotPosition>, JsonRejection>,
) -> Result<Json<XgResponse>, ApiError> {
    let Json(shot) = shot?;
    let params = store.model()?;
    Ok(Json(XgResponse {
        shot_xg: xg::expected_goals(params, shot),
    }))
}
