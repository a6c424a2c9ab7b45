use crate::error::{ApiError, ErrorResponse};
use crate::models::SetRequest;
use crate::payload::{as_text, check_json_content_type, content_type, parse_object};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, http::HeaderMap, http::StatusCode};

pub const SAVED: &str = "Data saved.";

/// POST /set handler - Store a value under a key
///
/// The Content-Type check runs before the body is looked at, so a wrong
/// media type is reported as 415 even when the body is also malformed.
#[utoipa::path(
    post,
    path = routes::SET,
    request_body(content = SetRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Value stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a JSON object with key and value", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn set_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    check_json_content_type(content_type(&headers))?;
    let body = body.map_err(|e| {
        tracing::debug!("Failed to read request body: {}", e);
        ApiError::BadRequest
    })?;

    let request: SetRequest = parse_object(&body)?;
    let key = as_text(&request.key);
    if key.is_empty() {
        tracing::debug!("Rejected empty key");
        return Err(ApiError::BadRequest);
    }

    tracing::info!("Storing value for key: {}", key);
    state.store.set(key, as_text(&request.value));
    tracing::debug!("Store now holds {} entries", state.store.len());

    Ok((StatusCode::OK, SAVED))
}
