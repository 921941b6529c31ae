use super::{CreditInput, ScoreBreakdown};

const BASE_SCORE: f64 = 300.0;
pub const MIN_SCORE: f64 = 300.0;
pub const MAX_SCORE: f64 = 850.0;

const INCOME_DIVISOR: f64 = 1000.0;
const BALANCE_DIVISOR: f64 = 500.0;
const ON_TIME_WEIGHT: f64 = 5.0;
const LATE_WEIGHT: f64 = 15.0;

/// Clamped score plus the per-factor contributions it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub predicted_score: u16,
    pub breakdown: ScoreBreakdown,
}

/// Apply the linear rubric.
///
/// The breakdown is rounded from the unclamped contributions, so near the
/// clamp bounds it does not sum to `predicted_score`.
pub fn score(input: &CreditInput) -> ScoreCard {
    let income_contrib = input.income / INCOME_DIVISOR;
    let balance_contrib = input.avg_balance / BALANCE_DIVISOR;
    let on_time_contrib = input.on_time_payments as f64 * ON_TIME_WEIGHT;
    let late_penalty = input.late_payments as f64 * LATE_WEIGHT;

    let raw_score =
        BASE_SCORE + income_contrib + balance_contrib + on_time_contrib - late_penalty;
    let predicted_score = round_half_up(raw_score.clamp(MIN_SCORE, MAX_SCORE)) as u16;

    ScoreCard {
        predicted_score,
        breakdown: ScoreBreakdown {
            income_contrib: round_half_up(income_contrib) as u64,
            balance_contrib: round_half_up(balance_contrib) as u64,
            on_time_contrib: round_half_up(on_time_contrib) as u64,
            late_penalty: round_half_up(late_penalty) as u64,
        },
    }
}

/// Round to nearest, ties toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
