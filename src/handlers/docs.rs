use crate::api_doc::ApiDoc;
use crate::routes;
use axum::{response::Html, Json};
use utoipa::OpenApi;

/// GET /openapi.json handler - Generated OpenAPI document
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs handler - Swagger UI page for the OpenAPI document
///
/// The page loads its assets from the public swagger-ui-dist CDN, so every
/// request it makes to this service goes to the document route only.
pub async fn docs_handler() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
<title>gated-kv-api - Swagger UI</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
}})
</script>
</body>
</html>
"#,
        routes::OPENAPI
    ))
}

#[cfg(test)]
mod tests {
    use crate::app::build_router;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_openapi_document_lists_endpoints() {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let paths = document["paths"].as_object().unwrap();
        for path in ["/hello", "/set", "/get/{key}", "/divide"] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert!(!paths.contains_key("/docs"));
    }

    #[tokio::test]
    async fn test_docs_page_points_at_document() {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/docs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.contains("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("url: '/openapi.json'"));
    }

    #[tokio::test]
    async fn test_docs_wrong_method() {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/docs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
