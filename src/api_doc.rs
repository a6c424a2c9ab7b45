use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{DivideRequest, KvPairResponse, SetRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gated-kv-api",
        version = "0.1.0",
        description = "Greeting, in-memory key-value store and division behind a path allow-list"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::set::set_handler,
        handlers::get::get_handler,
        handlers::divide::divide_handler
    ),
    components(
        schemas(
            SetRequest,
            KvPairResponse,
            DivideRequest,
            ErrorResponse
        )
    ),
    tags(
        (name = "greeting", description = "Greeting"),
        (name = "kv", description = "Key-value store operations"),
        (name = "math", description = "Arithmetic")
    )
)]
pub struct ApiDoc;
