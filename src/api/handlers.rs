//! HTTP request handlers for the Time Balance Engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler validates the snapshot, completes the holiday calendar from the
//! configuration and runs one calculation.

use std::ops::RangeInclusive;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Datelike;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BalanceContext, calculate_annual_entitlement, calculate_balance, calculate_monthly_breakdown,
    calculate_year_breakdowns,
};
use crate::error::{EngineError, EngineResult};

use super::request::{BalanceRequest, BreakdownRequest, SnapshotRequest, YearRequest};
use super::response::{ApiError, ApiErrorResponse, BalanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balance", post(balance_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/breakdowns/year", post(year_breakdowns_handler))
        .route("/entitlement", post(entitlement_handler))
        .with_state(state)
}

/// Handler for POST /balance.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let snapshot = &request.snapshot;
    let years = snapshot.first_year()..=request.end_date.year();
    let result = run_calculation(&state, snapshot, years, |context| {
        Ok(BalanceResponse {
            employee_id: snapshot.employee.id.clone(),
            end_date: request.end_date,
            balance: calculate_balance(context, request.end_date),
        })
    });
    respond(correlation_id, "balance", &snapshot.employee.id, started, result)
}

/// Handler for POST /breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let snapshot = &request.snapshot;
    let years = snapshot.first_year()..=request.year;
    let result = run_calculation(&state, snapshot, years, |context| {
        calculate_monthly_breakdown(context, request.year, request.month)
    });
    respond(correlation_id, "breakdown", &snapshot.employee.id, started, result)
}

/// Handler for POST /breakdowns/year.
async fn year_breakdowns_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing year breakdowns request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let snapshot = &request.snapshot;
    let years = snapshot.first_year()..=request.year;
    let result = run_calculation(&state, snapshot, years, |context| {
        calculate_year_breakdowns(context, request.year)
    });
    respond(correlation_id, "year breakdowns", &snapshot.employee.id, started, result)
}

/// Handler for POST /entitlement.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let snapshot = &request.snapshot;
    let result = run_calculation(&state, snapshot, request.year..=request.year, |context| {
        calculate_annual_entitlement(context, request.year)
    });
    respond(correlation_id, "entitlement", &snapshot.employee.id, started, result)
}

/// Unwraps the JSON body or turns the rejection into a 400 response.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. the missing field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Validates the snapshot, caps the covered years, loads missing holiday years and
/// runs `calculate`.
fn run_calculation<T>(
    state: &AppState,
    snapshot: &SnapshotRequest,
    years: RangeInclusive<i32>,
    calculate: impl FnOnce(&BalanceContext<'_>) -> EngineResult<T>,
) -> EngineResult<T> {
    snapshot.validate()?;

    let config = state.config();
    let max_years = config.engine().max_span_years;
    if i64::from(*years.end()) - i64::from(*years.start()) >= i64::from(max_years) {
        return Err(EngineError::PeriodTooLong {
            first_year: *years.start(),
            last_year: *years.end(),
            max_years,
        });
    }

    let region = snapshot
        .region
        .as_deref()
        .unwrap_or(config.engine().default_region.as_str());

    let mut holidays = snapshot.holidays.clone();
    holidays.ensure_years(config, region, years)?;

    let context = BalanceContext::new(
        &snapshot.employee,
        &snapshot.time_entries,
        &snapshot.absences,
        &snapshot.adjustments,
        &holidays,
    );
    calculate(&context)
}

fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    employee_id: &str,
    started: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                operation,
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                operation,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
