pub const REDUCE_LATE_PAYMENTS: &str = "Reduce late payments to improve your score.";
pub const KEEP_PAYING_ON_TIME: &str = "Keep paying on time to maintain growth.";

const LATE_PAYMENT_THRESHOLD: u64 = 2;

pub fn advise(late_payments: u64) -> &'static str {
    if late_payments > LATE_PAYMENT_THRESHOLD {
        REDUCE_LATE_PAYMENTS
    } else {
        KEEP_PAYING_ON_TIME
    }
}
