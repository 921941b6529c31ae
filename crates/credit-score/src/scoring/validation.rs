use serde_json::Value;

use super::CreditInput;

/// First rule an input record violates. `Display` is the caller-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Income must be a non-negative number")]
    Income,
    #[error("Average balance must be a non-negative number")]
    AverageBalance,
    #[error("On-time payments must be a non-negative integer")]
    OnTimePayments,
    #[error("Late payments must be a non-negative integer")]
    LatePayments,
}

/// Check a free-form record field by field, in declaration order.
///
/// Absent keys and non-numeric values fail the type check of their field;
/// there is no separate "missing field" error.
pub fn validate_record(record: &Value) -> Result<CreditInput, ValidationError> {
    let income = non_negative_number(record.get("income")).ok_or(ValidationError::Income)?;
    let avg_balance =
        non_negative_number(record.get("avg_balance")).ok_or(ValidationError::AverageBalance)?;
    let on_time_payments = non_negative_integer(record.get("on_time_payments"))
        .ok_or(ValidationError::OnTimePayments)?;
    let late_payments =
        non_negative_integer(record.get("late_payments")).ok_or(ValidationError::LatePayments)?;

    Ok(CreditInput {
        income,
        avg_balance,
        on_time_payments,
        late_payments,
    })
}

// Bodies are parsed with arbitrary precision, so literals beyond f64 range such
// as `1e400` arrive here and fail this check instead of failing the parse.
fn non_negative_number(value: Option<&Value>) -> Option<f64> {
    let number = value?.as_f64()?;
    (number.is_finite() && number >= 0.0).then_some(number)
}

// Integer-valued floats such as `3.0` count as integers. Counts beyond u64 saturate.
fn non_negative_integer(value: Option<&Value>) -> Option<u64> {
    if let Some(count) = value?.as_u64() {
        return Some(count);
    }
    let number = non_negative_number(value)?;
    (number.fract() == 0.0).then_some(number as u64)
}
