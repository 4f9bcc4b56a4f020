use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::adapters::outbound::directory::DirectoryError;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct UnregisterResponse {
    pub message: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

// An unknown activity and an unregistered email both answer 404; callers
// cannot tell them apart by status, only by detail text.
pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = Unregister {
        activity,
        email: params.email,
    };

    match state.unregister_handler.handle(command.clone()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(UnregisterResponse {
                message: format!("Unregistered {} from {}", command.email, command.activity),
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
            (StatusCode::NOT_FOUND, Json(ErrorDetail { detail: reason })).into_response()
        }
        Err(error) => {
            tracing::error!(%error, activity = %command.activity, "unregister failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod unregister_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::activities::core::policy::CapacityPolicy;
    use crate::modules::activities::core::seed::seed_activities;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity}/participants", delete(handle))
            .with_state(state)
    }

    fn seeded() -> AppState {
        AppState::in_memory(seed_activities(), CapacityPolicy::Enforce)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_unregistered_message() {
        let response = app(seeded())
            .oneshot(
                Request::delete(
                    "/activities/Chess%20Club/participants?email=michael@mergington.edu",
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "Unregistered michael@mergington.edu from Chess Club"
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let response = app(seeded())
            .oneshot(
                Request::delete("/activities/NoSuchActivity/participants?email=x@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unregistered_email() {
        let response = app(seeded())
            .oneshot(
                Request::delete(
                    "/activities/Art%20Club/participants?email=not-present@example.com",
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Participant not found");
    }

    #[tokio::test]
    async fn it_should_return_400_when_email_is_missing() {
        let response = app(seeded())
            .oneshot(
                Request::delete("/activities/Chess%20Club/participants")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_directory_is_offline() {
        let state = AppState::in_memory_offline(seed_activities(), CapacityPolicy::Enforce);
        let response = app(state)
            .oneshot(
                Request::delete(
                    "/activities/Chess%20Club/participants?email=michael@mergington.edu",
                )
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
