use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request body for POST /set
///
/// Both fields accept any JSON value; non-string values are stored as
/// their compact JSON text.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SetRequest {
    #[schema(value_type = String)]
    pub key: JsonValue,
    #[schema(value_type = String)]
    pub value: JsonValue,
}

/// Response type for successful GET /get/{key} operations
#[derive(Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct KvPairResponse {
    pub key: String,
    pub value: String,
}

/// Request body for POST /divide
///
/// Operands may be JSON numbers or numeric strings.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct DivideRequest {
    #[schema(value_type = String)]
    pub dividend: JsonValue,
    #[schema(value_type = String)]
    pub divider: JsonValue,
}
