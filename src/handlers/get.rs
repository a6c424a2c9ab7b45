use crate::error::{ApiError, ErrorResponse};
use crate::models::KvPairResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /get/{key} handler - Retrieve a stored value
#[utoipa::path(
    get,
    path = routes::GET_ITEM,
    params(
        ("key" = String, Path, description = "Key made of word characters")
    ),
    responses(
        (status = 200, description = "Key found", body = KvPairResponse),
        (status = 404, description = "Key never set", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<KvPairResponse>), ApiError> {
    match state.store.get(&key) {
        Some(value) => {
            tracing::info!("Successfully retrieved value for key: {}", key);
            Ok((StatusCode::OK, Json(KvPairResponse { key, value })))
        }
        None => {
            tracing::info!("Key not found: {}", key);
            Err(ApiError::NotFound)
        }
    }
}
