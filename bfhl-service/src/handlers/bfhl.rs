use crate::dtos::bfhl::as_integer;
use crate::dtos::{BfhlError, BfhlResponse, Operation, OperationData};
use crate::services::{math, metrics, providers};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

pub const AI_UNAVAILABLE: &str = "AI service unavailable";

/// `POST /bfhl`: dispatch on the body's single key.
pub async fn bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BfhlResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge("Request body too large".to_string())
        } else {
            bad_request(BfhlError::NotAnObject)
        }
    })?;

    let operation = Operation::from_body(&body).map_err(|e| {
        metrics::record_operation("invalid", "rejected");
        bad_request(e)
    })?;

    let key = operation.key();
    match execute(&state, operation).await {
        Ok(data) => {
            metrics::record_operation(key, "success");
            Ok(Json(BfhlResponse::new(state.official_email(), data)))
        }
        Err(e) => {
            let outcome = match &e {
                AppError::BadRequest(_) => "rejected",
                _ => "failed",
            };
            metrics::record_operation(key, outcome);
            Err(e)
        }
    }
}

async fn execute(state: &AppState, operation: Operation) -> Result<OperationData, AppError> {
    match operation {
        Operation::Fibonacci(n) => math::fibonacci(n)
            .map(OperationData::Sequence)
            .map_err(|e| bad_request(e.into())),
        Operation::Prime(items) => {
            // Trial division on large inputs runs for seconds; keep it off the
            // async workers.
            let primes = tokio::task::spawn_blocking(move || {
                items
                    .iter()
                    .filter_map(as_integer)
                    .filter(|n| math::is_prime(*n))
                    .collect::<Vec<i64>>()
            })
            .await
            .map_err(|e| AppError::InternalError(e.into()))?;

            Ok(OperationData::Integers(primes))
        }
        Operation::Lcm(values) => math::lcm_all(values.first, &values.rest)
            .map(OperationData::Integer)
            .map_err(|e| bad_request(e.into())),
        Operation::Hcf(values) => Ok(OperationData::Integer(math::gcd_all(
            values.first,
            &values.rest,
        ))),
        Operation::Ai(question) => {
            providers::ask_single_word(state.text_provider.as_ref(), &question)
                .await
                .map(OperationData::Word)
                .map_err(|e| {
                    tracing::error!(
                        error = %e,
                        model = %state.text_provider.model(),
                        "AI provider request failed"
                    );
                    AppError::Upstream(AI_UNAVAILABLE.to_string())
                })
        }
    }
}

fn bad_request(err: BfhlError) -> AppError {
    AppError::BadRequest(anyhow::Error::new(err))
}
