//! Request parsing and response envelopes for `/bfhl` and `/health`.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const KEY_FIBONACCI: &str = "fibonacci";
pub const KEY_PRIME: &str = "prime";
pub const KEY_LCM: &str = "lcm";
pub const KEY_HCF: &str = "hcf";
pub const KEY_AI: &str = "AI";

/// Validation failures for a `/bfhl` body. All map to HTTP 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BfhlError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Request must contain exactly one key")]
    KeyCount,

    #[error("Invalid key")]
    InvalidKey,

    #[error("fibonacci expects a non-negative integer")]
    InvalidFibonacci,

    #[error("prime expects an array")]
    InvalidPrime,

    #[error("{0} expects a non-empty array of positive integers")]
    InvalidPositiveList(&'static str),

    #[error("AI expects a non-empty string")]
    InvalidQuestion,

    #[error("{0}")]
    Math(#[from] crate::services::math::MathError),
}

/// One validated `/bfhl` request.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fibonacci(usize),
    /// Raw elements; non-integers are dropped when the operation runs.
    Prime(Vec<Value>),
    Lcm(PositiveIntegers),
    Hcf(PositiveIntegers),
    Ai(String),
}

impl Operation {
    /// Request key this operation was parsed from.
    pub fn key(&self) -> &'static str {
        match self {
            Operation::Fibonacci(_) => KEY_FIBONACCI,
            Operation::Prime(_) => KEY_PRIME,
            Operation::Lcm(_) => KEY_LCM,
            Operation::Hcf(_) => KEY_HCF,
            Operation::Ai(_) => KEY_AI,
        }
    }

    pub fn from_body(body: &Value) -> Result<Self, BfhlError> {
        let object = body.as_object().ok_or(BfhlError::NotAnObject)?;
        Self::from_object(object)
    }

    pub fn from_object(object: &Map<String, Value>) -> Result<Self, BfhlError> {
        let mut entries = object.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Err(BfhlError::KeyCount),
        };

        match key.as_str() {
            KEY_FIBONACCI => {
                let n = as_integer(value)
                    .filter(|n| *n >= 0)
                    .ok_or(BfhlError::InvalidFibonacci)?;
                let n = usize::try_from(n).map_err(|_| BfhlError::InvalidFibonacci)?;
                Ok(Operation::Fibonacci(n))
            }
            KEY_PRIME => {
                let items = value.as_array().ok_or(BfhlError::InvalidPrime)?;
                Ok(Operation::Prime(items.clone()))
            }
            KEY_LCM => positive_list(value, KEY_LCM).map(Operation::Lcm),
            KEY_HCF => positive_list(value, KEY_HCF).map(Operation::Hcf),
            KEY_AI => match value.as_str() {
                Some(question) if !question.trim().is_empty() => {
                    Ok(Operation::Ai(question.to_string()))
                }
                _ => Err(BfhlError::InvalidQuestion),
            },
            _ => Err(BfhlError::InvalidKey),
        }
    }
}

/// Integer view of a JSON number. Floats count when they have no fractional
/// part and fit in an `i64`, so `5.0` is accepted as `5`.
pub fn as_integer(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return None;
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A list of positive integers with at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveIntegers {
    pub first: u64,
    pub rest: Vec<u64>,
}

fn positive_list(value: &Value, key: &'static str) -> Result<PositiveIntegers, BfhlError> {
    let invalid = || BfhlError::InvalidPositiveList(key);
    let items = value.as_array().ok_or_else(invalid)?;

    let values = items
        .iter()
        .map(|item| {
            item.as_u64()
                .or_else(|| as_integer(item).and_then(|n| u64::try_from(n).ok()))
                .filter(|n| *n > 0)
                .ok_or_else(invalid)
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let (first, rest) = values.split_first().ok_or_else(invalid)?;
    Ok(PositiveIntegers {
        first: *first,
        rest: rest.to_vec(),
    })
}

/// Result payload of a successful operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationData {
    Sequence(Vec<u128>),
    Integers(Vec<i64>),
    Integer(u64),
    Word(String),
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
    pub data: OperationData,
}

impl BfhlResponse {
    pub fn new(official_email: Option<String>, data: OperationData) -> Self {
        Self {
            is_success: true,
            official_email,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
}
