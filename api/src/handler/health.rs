use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/health",
        responses((status = 200, description = "The server is up."))
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/health/db",
        responses(
            (status = 200, description = "The database answers."),
            (status = 500, description = "The database is unreachable.")
        )
    )
)]
pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
