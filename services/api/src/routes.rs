//! API service routes

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{ContactRequest, ContactResponse, SkillQuery},
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/projects", get(get_projects))
        .route("/projects/featured", get(get_featured_projects))
        .route("/projects/:id", get(get_project))
        .route("/posts", get(get_posts))
        .route("/posts/:id", get(get_post))
        .route("/contact", post(create_contact_message))
        .route("/skills", get(get_skills))
        .route("/achievements", get(get_achievements))
        .fallback(api_not_found);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "portfolio-api"
    }))
}

/// Get all projects in display order
pub async fn get_projects(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let projects = state.repository.get_projects().await?;
    Ok(Json(projects))
}

/// Get featured projects in display order
pub async fn get_featured_projects(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let projects = state.repository.get_featured_projects().await?;
    Ok(Json(projects))
}

/// Get a project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let project = state
        .repository
        .get_project(&id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    Ok(Json(project))
}

/// Get all posts, newest first
pub async fn get_posts(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let posts = state.repository.get_posts().await?;
    Ok(Json(posts))
}

/// Get a post by ID
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let post = state
        .repository
        .get_post(&id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    Ok(Json(post))
}

/// Accept a message from the contact form
pub async fn create_contact_message(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_message = request.validate().map_err(ApiError::Validation)?;

    let message = state.repository.create_contact_message(new_message).await?;
    info!(id = %message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Message sent successfully".to_string(),
            id: message.id,
        }),
    ))
}

/// Get skills, optionally filtered by category
pub async fn get_skills(
    State(state): State<AppState>,
    query: Result<Query<SkillQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let skills = match query.category {
        Some(category) => state.profile.skills_in(category),
        None => state.profile.skills.clone(),
    };

    Ok(Json(skills))
}

/// Get the achievements timeline
pub async fn get_achievements(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profile.achievements.clone())
}

/// Fallback for unknown API paths
async fn api_not_found() -> ApiError {
    ApiError::NotFound("Endpoint")
}
