use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} param is required")]
    MissingParam(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::info!("Rejected request: {}", self);

        (self.status_code(), self.to_string()).into_response()
    }
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) => StatusCode::BAD_REQUEST,
        }
    }
}
