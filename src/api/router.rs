//! Router assembly for the HTTP API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::dialogue::DefaultDialogueEngine;

/// Build the API router. Routes are nested under `/api/`.
///
/// CORS is fully permissive: the browser frontend is served from a
/// different origin, and the API carries no credentials or cookies.
pub fn api_router(engine: Arc<DefaultDialogueEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(endpoints::health))
        .route("/analyze", post(endpoints::analyze))
        .route("/symptoms", get(endpoints::symptoms))
        .with_state(engine);

    Router::new().nest("/api", api).layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::dialogue::DialogueResult;

    fn app() -> Router {
        api_router(Arc::new(DefaultDialogueEngine::new()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn symptoms_lists_builtin_vocabulary() {
        let response = app()
            .oneshot(Request::get("/api/symptoms").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let symptoms = json["symptoms"].as_array().unwrap();
        assert!(symptoms.contains(&json!("headache")));
        assert!(symptoms.contains(&json!("sore throat")));
    }

    #[tokio::test]
    async fn analyze_returns_full_result_shape() {
        let payload = json!({
            "message": "I have a cough and fever",
            "chat_history": []
        });
        let response = app()
            .oneshot(
                Request::post("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let result: DialogueResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.detected_symptoms, vec!["fever", "cough"]);
        assert_eq!(result.possible_conditions[0].name, "Common cold");
        assert_eq!(
            result.follow_up_question,
            "How long have you been experiencing these symptoms?"
        );
    }

    #[tokio::test]
    async fn analyze_accepts_wire_history_pairs() {
        let payload = json!({
            "message": "I also have cough",
            "chat_history": [
                ["I have a headache and fever",
                 "I've detected that you're experiencing headache, fever."]
            ]
        });
        let response = app()
            .oneshot(
                Request::post("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["detected_symptoms"],
            json!(["headache", "fever", "cough"])
        );
    }

    #[tokio::test]
    async fn analyze_defaults_missing_history() {
        let payload = json!({ "message": "I have a fever" });
        let response = app()
            .oneshot(
                Request::post("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["detected_symptoms"], json!(["fever"]));
    }

    #[tokio::test]
    async fn malformed_payload_gets_error_envelope() {
        let response = app()
            .oneshot(
                Request::post("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["isError"], true);
        assert!(json["response"].as_str().unwrap().contains("I apologize"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::get("/api/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
