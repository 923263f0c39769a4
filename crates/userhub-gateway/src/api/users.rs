use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use userhub_core::{User, UserId, UserInput};

use super::ApiError;
use crate::app_state::AppState;
use crate::events::{UserAction, UserEvent};

type ApiResult<T> = std::result::Result<T, ApiError>;

fn user_id(path: std::result::Result<Path<UserId>, PathRejection>) -> ApiResult<UserId> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::bad_request(format!("invalid user id: {}", e.body_text())))
}

// Content-Type is not checked: any body that decodes as a user is accepted.
fn user_input(body: std::result::Result<Bytes, BytesRejection>) -> ApiResult<UserInput> {
    let bytes =
        body.map_err(|e| ApiError::bad_request(format!("invalid user body: {}", e.body_text())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::bad_request(format!("invalid user body: {e}")))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().get_all())
}

pub async fn get(
    State(state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    Ok(Json(state.store().get_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let input = user_input(body)?;
    let created = state.store().create(input);
    state.events().emit(UserEvent::new(UserAction::Create, created.id));
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    let input = user_input(body)?;
    let updated = state.store().update(id, input)?;
    state.events().emit(UserEvent::new(UserAction::Update, id));
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    path: std::result::Result<Path<UserId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = user_id(path)?;
    state.store().delete(id)?;
    state.events().emit(UserEvent::new(UserAction::Delete, id));
    Ok(StatusCode::NO_CONTENT)
}
