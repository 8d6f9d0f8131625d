use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    PickedUp,
    Delivered,
    Cancelled,
}

/// Read-only view of a delivery owned by the delivery service. The
/// timestamp is normalized into the single `delivery_date` column at
/// that boundary; earnings logic never guesses between date fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DeliveryRow {
    pub id: u64,
    pub driver_id: u64,
    pub status: DeliveryStatus,
    pub total_distance: f64,
    pub delivery_date: NaiveDateTime,
}
