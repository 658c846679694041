//! Router

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{health_check, predict_handler, property_defaults, trend_handler};
use crate::state::AppState;

pub fn router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/property/defaults", get(property_defaults))

        // Valuation API
        .route("/api/predict", post(predict_handler))
        .route("/api/trend", post(trend_handler))

        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use estate_core::FixedNoise;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        app_with_delay(Duration::ZERO)
    }

    fn app_with_delay(delay: Duration) -> Router {
        let state = AppState::new(Box::new(FixedNoise::MIDPOINT), delay).with_fixed_year(2023);
        router(state, "no-such-static-dir")
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["current_year"], 2023);
    }

    #[tokio::test]
    async fn test_defaults() {
        let (status, body) = send(get("/api/property/defaults")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["attributes"]["square_footage"], 1500);
        assert_eq!(body["attributes"]["location"], "Suburban");
        assert_eq!(body["bounds"]["year_built"]["max"], 2023);
        assert_eq!(body["bounds"]["locations"], json!(["Urban", "Suburban", "Rural"]));
    }

    #[tokio::test]
    async fn test_predict_example_property() {
        let attrs = json!({
            "square_footage": 1500,
            "bedrooms": 3,
            "bathrooms": 2,
            "year_built": 2000,
            "location": "Suburban",
            "lot_size": 0.25,
            "has_garage": "Yes",
            "has_pool": "No"
        });

        let (status, body) = send(post_json("/api/predict", &attrs)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["estimated_value"], "557500");
        assert_eq!(body["formatted_value"], "$557,500");
        assert_eq!(body["current_year"], 2023);
        assert_eq!(body["attributes"]["location"], "Suburban");
        assert!(!body["prediction_id"].as_str().unwrap().is_empty());

        let trend = body["trend"].as_array().unwrap();
        assert_eq!(trend.len(), 11);
        assert_eq!(trend[5]["is_current"], true);
        assert_eq!(trend[5]["year"], 2023);
        assert_eq!(trend[5]["value"], "557500");
        assert_eq!(trend[0]["year"], 2018);
        assert_eq!(trend[10]["year"], 2028);
    }

    #[tokio::test(start_paused = true)]
    async fn test_predict_waits_for_the_configured_delay() {
        let delay = Duration::from_millis(1500);
        let app = app_with_delay(delay);

        let early = tokio::time::timeout(
            Duration::from_millis(1400),
            app.clone().oneshot(post_json("/api/predict", &json!({}))),
        )
        .await;
        assert!(early.is_err(), "answered before the delay elapsed");

        let started = tokio::time::Instant::now();
        let response = tokio::time::timeout(
            Duration::from_millis(1600),
            app.oneshot(post_json("/api/predict", &json!({}))),
        )
        .await
        .expect("answered after the delay")
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn test_predict_location_ordering() {
        let mut values = Vec::new();
        for location in ["Urban", "Suburban", "Rural"] {
            let (_, body) = send(post_json("/api/predict", &json!({ "location": location }))).await;
            let value: i64 = body["estimated_value"].as_str().unwrap().parse().unwrap();
            values.push(value);
        }
        assert_eq!(values[0] - values[1], 25000);
        assert_eq!(values[1] - values[2], 25000);
    }

    #[tokio::test]
    async fn test_predict_rejects_out_of_range() {
        let (status, body) =
            send(post_json("/api/predict", &json!({ "square_footage": 100 }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "OUT_OF_RANGE");

        let (status, body) =
            send(post_json("/api/predict", &json!({ "year_built": 2030 }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "OUT_OF_RANGE");
    }

    #[tokio::test]
    async fn test_predict_rejects_unknown_location() {
        let (status, _) =
            send(post_json("/api/predict", &json!({ "location": "Downtown" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_trend() {
        let (status, body) = send(post_json("/api/trend", &json!({ "value": 100000 }))).await;
        assert_eq!(status, StatusCode::OK);

        let trend = body["trend"].as_array().unwrap();
        assert_eq!(trend.len(), 11);
        assert_eq!(trend[0]["value"], "77378");
        assert_eq!(trend[10]["value"], "115927");
    }

    #[tokio::test]
    async fn test_trend_rejects_negative_value() {
        let (status, body) = send(post_json("/api/trend", &json!({ "value": -5 }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_trend_rejects_value_beyond_cap() {
        let huge = json!({ "value": "79228162514264337593543950335" });
        let (status, body) = send(post_json("/api/trend", &huge)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_REQUEST");

        let (status, body) =
            send(post_json("/api/trend", &json!({ "value": "1000000000000000" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trend"][5]["value"], "1000000000000000");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_through_to_static_files() {
        let (status, _) = send(get("/missing.html")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
