//! Deterministic credit scoring: input validation, the linear rubric, and advice.

mod advisor;
mod scorer;
mod validation;

pub use advisor::{advise, KEEP_PAYING_ON_TIME, REDUCE_LATE_PAYMENTS};
pub use scorer::{round_half_up, score, ScoreCard, MAX_SCORE, MIN_SCORE};
pub use validation::{validate_record, ValidationError};

use serde::Serialize;

/// Financial attributes that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditInput {
    pub income: f64,
    pub avg_balance: f64,
    pub on_time_payments: u64,
    pub late_payments: u64,
}

/// Rounded contribution of each factor to the raw, unclamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub income_contrib: u64,
    pub balance_contrib: u64,
    pub on_time_contrib: u64,
    pub late_penalty: u64,
}

/// Body of a successful prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub predicted_score: u16,
    pub breakdown: ScoreBreakdown,
    pub advice: String,
}

/// Score a validated input and attach advice.
pub fn predict(input: &CreditInput) -> PredictionResult {
    let ScoreCard {
        predicted_score,
        breakdown,
    } = score(input);

    PredictionResult {
        predicted_score,
        breakdown,
        advice: advise(input.late_payments).to_string(),
    }
}
