use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::round2;
use crate::model::earning::EarningRow;

const HOURS_PER_DELIVERY: f64 = 0.75;
const RECENT_PAYMENTS_LIMIT: usize = 5;

/// Estimated active hours for a window: a fixed allowance per delivery,
/// not tracked on-shift time. Kept behind its own function so real time
/// tracking can replace it without touching the aggregation.
pub fn active_hours(delivery_count: usize) -> f64 {
    round2(delivery_count as f64 * HOURS_PER_DELIVERY)
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    #[schema(example = 128.40)]
    pub total: f64,

    #[schema(example = 12)]
    pub orders: u64,

    #[schema(example = 9.50)]
    pub tips: f64,

    #[schema(example = 35.0)]
    pub bonuses: f64,

    #[schema(example = 9.0)]
    pub hours: f64,

    #[schema(example = 10.70)]
    pub average_per_order: f64,

    #[schema(example = 14.27)]
    pub average_per_hour: f64,
}

/// Aggregate the earnings rows and delivery timestamps that fall inside
/// the window starting at `window_start`. Rows outside the window are
/// ignored, so callers can pass one superset fetch and reuse it for the
/// week, month, and year windows.
pub fn summarize(
    records: &[EarningRow],
    delivery_dates: &[NaiveDateTime],
    window_start: NaiveDateTime,
) -> WindowSummary {
    let mut total = 0.0;
    let mut tips = 0.0;
    let mut bonuses = 0.0;
    let mut orders: u64 = 0;

    for rec in records.iter().filter(|r| r.created_at >= window_start) {
        total += rec.total_earning;
        tips += rec.tips;
        bonuses += rec.bonus;
        orders += 1;
    }

    let total = round2(total);
    let deliveries = delivery_dates
        .iter()
        .filter(|d| **d >= window_start)
        .count();
    let hours = active_hours(deliveries);

    WindowSummary {
        total,
        orders,
        tips: round2(tips),
        bonuses: round2(bonuses),
        hours,
        average_per_order: average(total, orders as f64),
        average_per_hour: average(total, hours),
    }
}

fn average(total: f64, divisor: f64) -> f64 {
    if divisor > 0.0 {
        round2(total / divisor)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecentPayment {
    #[schema(example = "PAY-5F2B0C9E")]
    pub id: String,

    #[schema(example = "Mar 5, 2025")]
    pub date: String,

    #[schema(example = 12.40)]
    pub amount: f64,

    #[schema(example = "pending")]
    pub status: String,
}

/// The most recent payments, newest first, capped at five, projected
/// into the shape the dashboard renders.
pub fn recent_payments(records: &[EarningRow]) -> Vec<RecentPayment> {
    let mut records: Vec<&EarningRow> = records.iter().collect();
    records.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
    records
        .into_iter()
        .take(RECENT_PAYMENTS_LIMIT)
        .map(format_payment)
        .collect()
}

fn format_payment(rec: &EarningRow) -> RecentPayment {
    RecentPayment {
        id: display_id(&rec.id),
        date: rec.payment_date.format("%b %-d, %Y").to_string(),
        amount: rec.total_earning,
        status: rec.payment_status.as_str().to_string(),
    }
}

/// `PAY-` plus the first 8 hex chars of the record id, uppercased.
fn display_id(record_id: &str) -> String {
    let hex: String = record_id.chars().filter(|c| *c != '-').take(8).collect();
    format!("PAY-{}", hex.to_uppercase())
}
