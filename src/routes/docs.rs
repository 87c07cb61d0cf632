use crate::app::ApiContext;
use crate::config::Stage;
use crate::routes::{avatar, health_check};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const AVATAR_TAG: &str = "avatar";
pub const HEALTH_TAG: &str = "health";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Pixel Avatar", description = "Deterministic pixel art avatars"),
    paths(avatar::generate_avatar, health_check::health_check),
    components(schemas(health_check::HealthStatus, Stage)),
    tags(
        (name = "avatar", description = "Avatar generation"),
        (name = "health", description = "Liveness")
    )
)]
struct Api;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(Api::openapi())
}
