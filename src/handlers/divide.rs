use crate::error::{ApiError, ErrorResponse};
use crate::models::DivideRequest;
use crate::payload::{as_float, check_json_content_type, content_type, format_float, parse_object};
use crate::routes;
use axum::{body::Bytes, extract::rejection::BytesRejection, http::HeaderMap, http::StatusCode};

/// POST /divide handler - Floating-point division
///
/// A zero divider is a client error rather than an infinite result.
#[utoipa::path(
    post,
    path = routes::DIVIDE,
    request_body(content = DivideRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Quotient as decimal text", body = String, content_type = "text/plain"),
        (status = 400, description = "Operand missing or not numeric, or divider is zero", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "math"
)]
pub async fn divide_handler(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, String), ApiError> {
    check_json_content_type(content_type(&headers))?;
    let body = body.map_err(|e| {
        tracing::debug!("Failed to read request body: {}", e);
        ApiError::BadRequest
    })?;

    let request: DivideRequest = parse_object(&body)?;
    let (Some(dividend), Some(divider)) = (as_float(&request.dividend), as_float(&request.divider))
    else {
        tracing::debug!("Rejected non-numeric operand");
        return Err(ApiError::BadRequest);
    };

    if divider == 0.0 {
        tracing::warn!("Rejected division by zero");
        return Err(ApiError::BadRequest);
    }

    let quotient = format_float(dividend / divider);
    tracing::debug!("Divided {} by {}: {}", dividend, divider, quotient);
    Ok((StatusCode::OK, quotient))
}
