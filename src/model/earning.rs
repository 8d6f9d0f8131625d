use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
        }
    }
}

/// One ledger row per completed delivery. The base fare is not stored
/// separately; it is folded into `total_earning` at creation time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningRow {
    #[schema(example = "5f2b0c9e-3d41-4a6b-9a1e-7c0f8d2a4b11")]
    pub id: String,

    #[schema(example = 1001)]
    pub driver_id: u64,

    #[schema(example = 500)]
    pub delivery_id: u64,

    #[schema(example = 45.0)]
    pub bonus: f64,

    #[schema(example = 2.50)]
    pub tips: f64,

    #[schema(example = 59.90)]
    pub total_earning: f64,

    pub payment_status: PaymentStatus,

    #[schema(value_type = String, format = "date-time")]
    pub payment_date: NaiveDateTime,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}
