use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister::inbound::http as unregister_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity}/participants",
            delete(unregister_http::handle),
        )
        .with_state(state)
}
