use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::db::models::User;

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: Option<User>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let success = state.auth.login(&payload.email, &payload.password).await?;

    if success {
        let user = state.auth.current_user().await;
        Ok((StatusCode::OK, Json(AuthResponse { success, user })))
    } else {
        Ok((StatusCode::UNAUTHORIZED, Json(AuthResponse { success, user: None })))
    }
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let success = state
        .auth
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    if success {
        let user = state.auth.current_user().await;
        Ok((StatusCode::CREATED, Json(AuthResponse { success, user })))
    } else {
        Ok((StatusCode::CONFLICT, Json(AuthResponse { success, user: None })))
    }
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.auth.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.auth.state().await)
}
