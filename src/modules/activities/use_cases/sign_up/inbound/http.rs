use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::adapters::outbound::directory::DirectoryError;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub message: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUp {
        activity,
        email: params.email,
    };

    match state.sign_up_handler.handle(command.clone()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SignUpResponse {
                message: format!("Signed up {} for {}", command.email, command.activity),
            }),
        )
            .into_response(),
        Err(ApplicationError::Directory(DirectoryError::UnknownActivity { .. })) => (
            StatusCode::NOT_FOUND,
            Json(ErrorDetail {
                detail: "Activity not found".to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(reason)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorDetail { detail: reason })).into_response()
        }
        Err(error) => {
            tracing::error!(%error, activity = %command.activity, "sign-up failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
