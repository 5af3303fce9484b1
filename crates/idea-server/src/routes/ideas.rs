//! Idea submission (public) and triage (admin).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use idea_core::entities::Idea;
use idea_core::enums::IdeaStatus;
use idea_core::responses::{SubmitResponse, SuccessResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::session::AdminSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub idea: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}

/// Ids that are not integers name no idea.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(request) = body?;
    let idea = state
        .ideas
        .submit(request.idea.as_deref().unwrap_or_default())
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to submit idea"))?;
    Ok(Json(SubmitResponse::new(idea.id)))
}

pub async fn list(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let ideas = state
        .ideas
        .list_all()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch ideas"))?;
    Ok(Json(ideas))
}

pub async fn update_status(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(request) = body?;
    let raw_status = request.status.unwrap_or_default();

    let Some(id) = parse_id(&raw_id) else {
        // A bad status is reported before a bad id.
        raw_status
            .parse::<IdeaStatus>()
            .map_err(|e| ApiError::from_core(e, "Failed to update status"))?;
        return Err(ApiError::idea_not_found());
    };

    state
        .ideas
        .update_status(id, &raw_status)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to update status"))?;
    Ok(Json(SuccessResponse::new("Status updated successfully")))
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_id(&raw_id).ok_or_else(ApiError::idea_not_found)?;
    state
        .ideas
        .delete(id)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to delete idea"))?;
    Ok(Json(SuccessResponse::new("Idea deleted successfully")))
}

pub async fn export(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let ideas = state
        .ideas
        .export_all()
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to export ideas"))?;
    let file = idea_export::render(&ideas)
        .map_err(|e| ApiError::internal("Failed to export ideas", e))?;

    let headers = [
        (CONTENT_TYPE, file.content_type.to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ),
    ];
    Ok((headers, file.bytes).into_response())
}
