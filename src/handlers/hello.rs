use crate::routes;
use axum::http::StatusCode;

pub const GREETING: &str = "HSE One Love!";

/// GET /hello handler - Fixed plain-text greeting
///
/// Headers, query parameters and body are ignored.
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn hello_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_router;
    use crate::state::test_state;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_hello_ignores_headers_and_params() {
        let header_sets: [&[(&str, &str)]; 3] = [
            &[("user-agent", "my-app/0.0.1")],
            &[("content-type", "application/json")],
            &[],
        ];
        let queries = ["?tinkoff=academy", "?backend=top", ""];

        for headers in header_sets {
            for query in queries {
                let app = build_router(test_state());
                let mut builder = Request::builder()
                    .method("GET")
                    .uri(format!("/hello{}", query));
                for (name, value) in headers {
                    builder = builder.header(*name, *value);
                }

                let response = app
                    .oneshot(builder.body(Body::empty()).unwrap())
                    .await
                    .unwrap();

                assert_eq!(response.status(), StatusCode::OK);
                let content_type = response.headers()["content-type"].to_str().unwrap();
                assert!(content_type.contains("text/plain"));

                let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap();
                assert_eq!(&body[..], GREETING.as_bytes());
            }
        }
    }
}
