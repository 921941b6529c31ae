use clap::Args;
use credit_score::error::AppError;
use credit_score::scoring::{predict, validate_record, PredictionResult};
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Annual income
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: f64,
    /// Average account balance
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) avg_balance: f64,
    /// Number of on-time payments
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) on_time_payments: f64,
    /// Number of late payments
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) late_payments: f64,
    /// Print the HTTP response body instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let result = score_args(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_prediction(&result);
    }
    Ok(())
}

// Arguments go through the same record validation as HTTP bodies.
fn score_args(args: &PredictArgs) -> Result<PredictionResult, AppError> {
    let record = json!({
        "income": args.income,
        "avg_balance": args.avg_balance,
        "on_time_payments": args.on_time_payments,
        "late_payments": args.late_payments,
    });

    let input = validate_record(&record)?;
    Ok(predict(&input))
}

fn render_prediction(result: &PredictionResult) {
    let breakdown = &result.breakdown;

    println!("Predicted credit score: {}", result.predicted_score);
    println!("\nBreakdown");
    println!("- income:            +{}", breakdown.income_contrib);
    println!("- average balance:   +{}", breakdown.balance_contrib);
    println!("- on-time payments:  +{}", breakdown.on_time_contrib);
    println!("- late payments:     -{}", breakdown.late_penalty);
    println!("\nAdvice: {}", result.advice);
}
