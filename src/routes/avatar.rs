use axum::{
    extract::RawQuery, http::header::CONTENT_TYPE, response::IntoResponse, routing::get, Router,
};
use percent_encoding::percent_decode;

use crate::{
    app::{avatar::Avatar, error::AppError, ApiContext},
    routes::docs::AVATAR_TAG,
};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/generate-avatar", get(generate_avatar))
}

#[utoipa::path(
    get,
    path = "/generate-avatar",
    tag = AVATAR_TAG,
    params(
        ("name" = String, Query, description = "Seed for the avatar, the same name always yields the same image")
    ),
    responses(
        (status = 200, description = "Generated avatar", content_type = "image/svg+xml", body = String),
        (status = 400, description = "Missing or empty name", body = String)
    )
)]
#[tracing::instrument(name = "Generate avatar", skip_all, fields(name = tracing::field::Empty))]
pub async fn generate_avatar(RawQuery(query): RawQuery) -> Result<impl IntoResponse, AppError> {
    let name = query
        .as_deref()
        .and_then(|query| first_param(query, b"name"))
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingParam("Name"))?;

    tracing::Span::current().record(
        "name",
        tracing::field::display(String::from_utf8_lossy(&name)),
    );

    let svg = Avatar::compose_bytes(&name).to_string();

    Ok(([(CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}

/// First value of `key` in a urlencoded query, decoded to raw bytes.
///
/// Later repeats of the key are ignored. Invalid UTF-8 is kept as is so the
/// seed hashes exactly what the client sent.
fn first_param(query: &str, key: &[u8]) -> Option<Vec<u8>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(k) == key).then(|| form_decode(v))
        })
}

fn form_decode(input: &str) -> Vec<u8> {
    let plus_as_space: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&plus_as_space).collect()
}
