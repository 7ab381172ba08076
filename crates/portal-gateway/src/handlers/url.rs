use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

/// The body is decoded as JSON whatever its `Content-Type` says.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = Json::<ShortenRequest>::from_bytes(&body).map_err(|rejection| {
        warn!(error = %rejection, "failed to parse shorten request");
        AppError::InvalidRequest(rejection.body_text())
    })?;

    let key = state.store().shorten(&request.url);
    info!(url = %request.url, key = %key, "shortened url");

    Ok(Json(ShortenResponse {
        url: request.url,
        key,
    }))
}

pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let url = state.store().resolve(&key).map_err(|e| {
        warn!(key = %key, "key not found");
        AppError::from(e)
    })?;

    let location = HeaderValue::from_bytes(url.as_bytes()).map_err(|e| {
        warn!(key = %key, error = %e, "stored url is not a valid location header");
        AppError::InvalidRedirect(key.clone())
    })?;

    info!(key = %key, url = %url, "redirecting");
    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}
