use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{app::ApiContext, config::Stage, routes::docs::HEALTH_TAG};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    status: String,
    stage: Stage,
    version: String,
}

pub fn router() -> Router<ApiContext> {
    Router::new().route("/health_check", get(health_check))
}

#[utoipa::path(
    get,
    path = "/health_check",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
#[tracing::instrument(name = "Health check", skip_all)]
pub async fn health_check(ctx: State<ApiContext>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        stage: ctx.config.stage,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
