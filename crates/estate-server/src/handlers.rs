//! HTTP Handlers

use std::sync::PoisonError;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use estate_core::{format_usd, AttributeBounds, PropertyAttributes, TrendPoint};

use crate::error::ApiError;
use crate::state::AppState;

/// Largest value `/api/trend` accepts (one quadrillion)
const MAX_TREND_VALUE: Decimal = dec!(1000000000000000);

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub current_year: i32,
}

#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub current_year: i32,
    pub attributes: PropertyAttributes,
    pub bounds: AttributeBounds,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction_id: String,
    pub estimated_value: Decimal,
    pub formatted_value: String,
    pub current_year: i32,
    pub attributes: PropertyAttributes,
    pub trend: Vec<TrendPoint>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    pub value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub current_year: i32,
    pub trend: Vec<TrendPoint>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        current_year: state.current_year(),
    })
}

/// Form defaults and widget bounds for this year
pub async fn property_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    let current_year = state.current_year();

    Json(DefaultsResponse {
        current_year,
        attributes: PropertyAttributes::default(),
        bounds: AttributeBounds::for_year(current_year),
    })
}

/// Valuation endpoint; answers after the configured artificial delay
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(attributes): Json<PropertyAttributes>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let forecaster = state.forecaster();
    attributes.validate(forecaster.current_year)?;

    let prediction_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        %prediction_id,
        square_footage = attributes.square_footage,
        bedrooms = attributes.bedrooms,
        location = %attributes.location,
        "Prediction requested"
    );

    tokio::time::sleep(state.prediction_delay).await;

    let prediction = {
        let mut noise = state.noise.lock().unwrap_or_else(PoisonError::into_inner);
        forecaster.predict(attributes, &mut **noise)
    };

    tracing::info!(
        %prediction_id,
        estimated_value = %prediction.estimated_value,
        "Prediction ready"
    );

    Ok(Json(PredictionResponse {
        prediction_id,
        estimated_value: prediction.estimated_value,
        formatted_value: format_usd(prediction.estimated_value),
        current_year: prediction.current_year,
        attributes: prediction.attributes,
        trend: prediction.trend,
        generated_at: Utc::now(),
    }))
}

/// Trend series around an arbitrary value
pub async fn trend_handler(
    State(state): State<AppState>,
    Json(payload): Json<TrendRequest>,
) -> Result<Json<TrendResponse>, ApiError> {
    if payload.value < Decimal::ZERO {
        return Err(ApiError::InvalidRequest("value must not be negative".into()));
    }
    if payload.value > MAX_TREND_VALUE {
        return Err(ApiError::InvalidRequest(format!(
            "value must not exceed {MAX_TREND_VALUE}"
        )));
    }

    let forecaster = state.forecaster();
    let trend = forecaster
        .synthesizer
        .synthesize(payload.value, forecaster.current_year);

    Ok(Json(TrendResponse {
        current_year: forecaster.current_year,
        trend,
    }))
}
