use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::auth::AuthDriver;
use crate::earnings::bonus::{self, BonusBreakdown};
use crate::earnings::{fare, round2, summary, window};
use crate::model::delivery::DeliveryRow;
use crate::model::earning::{EarningRow, PaymentStatus};
use crate::utils::summary_cache;

#[derive(Deserialize, ToSchema)]
pub struct RecordEarnings {
    /// Tip handed over for the delivery, if any.
    #[schema(example = 2.50)]
    pub tips: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEarnings {
    #[serde(flatten)]
    pub record: EarningRow,

    /// Distance-based fare component, not persisted as its own column.
    #[schema(example = 12.40)]
    pub base_earning: f64,

    pub bonus_breakdown: BonusBreakdown,
}

#[derive(Serialize, ToSchema)]
pub struct RecordResponse {
    #[schema(example = "Earnings recorded successfully")]
    pub message: String,

    pub data: RecordedEarnings,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub week: summary::WindowSummary,
    pub month: summary::WindowSummary,
    pub year: summary::WindowSummary,
    pub recent_payments: Vec<summary::RecentPayment>,
}

const EARNING_COLUMNS: &str = "id, driver_id, delivery_id, bonus, tips, total_earning, \
     payment_status, payment_date, created_at";

#[utoipa::path(
    get,
    path = "/api/earnings/summary",
    responses(
        (status = 200, description = "Week, month, and year earnings summaries", body = SummaryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Earnings"
)]
pub async fn get_summary(
    auth: AuthDriver,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let driver_id = auth.driver_id;

    if let Some(cached) = summary_cache::get(driver_id).await {
        return Ok(HttpResponse::Ok().json(cached));
    }

    let now = Local::now().naive_local();
    let week_start = window::week_start(now);
    let month_start = window::month_start(now);
    let year_start = window::year_start(now);
    // The week can reach back into the previous year in early January.
    let floor = week_start.min(year_start);

    let records = sqlx::query_as::<_, EarningRow>(&format!(
        "SELECT {EARNING_COLUMNS} FROM earnings WHERE driver_id = ? AND created_at >= ?"
    ))
    .bind(driver_id)
    .bind(floor)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, driver_id, "Failed to fetch earnings rows");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let delivery_dates = sqlx::query_scalar::<_, NaiveDateTime>(
        "SELECT delivery_date FROM deliveries WHERE driver_id = ? AND delivery_date >= ?",
    )
    .bind(driver_id)
    .bind(floor)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, driver_id, "Failed to fetch delivery dates");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let recent = sqlx::query_as::<_, EarningRow>(&format!(
        "SELECT {EARNING_COLUMNS} FROM earnings WHERE driver_id = ? \
         ORDER BY payment_date DESC LIMIT 5"
    ))
    .bind(driver_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, driver_id, "Failed to fetch recent payments");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let response = SummaryResponse {
        week: summary::summarize(&records, &delivery_dates, week_start),
        month: summary::summarize(&records, &delivery_dates, month_start),
        year: summary::summarize(&records, &delivery_dates, year_start),
        recent_payments: summary::recent_payments(&recent),
    };

    summary_cache::put(driver_id, response.clone()).await;

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    post,
    path = "/api/earnings/record",
    request_body = RecordEarnings,
    responses(
        (status = 201, description = "Earnings recorded", body = RecordResponse),
        (status = 400, description = "Negative tip amount"),
        (status = 404, description = "No completed delivery found"),
        (status = 409, description = "Earnings already recorded for this delivery"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Earnings"
)]
pub async fn record_earnings(
    auth: AuthDriver,
    pool: web::Data<MySqlPool>,
    payload: web::Json<RecordEarnings>,
) -> actix_web::Result<impl Responder> {
    let driver_id = auth.driver_id;
    let tips = payload.tips.unwrap_or(0.0);

    if !tips.is_finite() || tips < 0.0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Tips must be a non-negative amount"
        })));
    }

    let delivery = sqlx::query_as::<_, DeliveryRow>(
        "SELECT id, driver_id, status, total_distance, delivery_date \
         FROM deliveries \
         WHERE driver_id = ? AND status = 'delivered' \
         ORDER BY delivery_date DESC \
         LIMIT 1",
    )
    .bind(driver_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, driver_id, "Failed to look up latest delivered delivery");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let delivery = match delivery {
        Some(d) => d,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "No completed delivery found"
            })));
        }
    };

    let base_earning = fare::base_fare(delivery.total_distance);
    let breakdown = bonus::evaluate(delivery.total_distance, delivery.delivery_date);
    let total_earning = round2(base_earning + breakdown.total() + tips);

    let now = Local::now().naive_local();
    let record = EarningRow {
        id: Uuid::new_v4().to_string(),
        driver_id,
        delivery_id: delivery.id,
        bonus: breakdown.total(),
        tips,
        total_earning,
        payment_status: PaymentStatus::Pending,
        payment_date: now,
        created_at: now,
    };

    let result = sqlx::query(
        "INSERT INTO earnings \
         (id, driver_id, delivery_id, bonus, tips, total_earning, \
          payment_status, payment_date, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.id)
    .bind(record.driver_id)
    .bind(record.delivery_id)
    .bind(record.bonus)
    .bind(record.tips)
    .bind(record.total_earning)
    .bind(record.payment_status)
    .bind(record.payment_date)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            summary_cache::invalidate(driver_id).await;

            Ok(HttpResponse::Created().json(RecordResponse {
                message: "Earnings recorded successfully".to_string(),
                data: RecordedEarnings {
                    record,
                    base_earning,
                    bonus_breakdown: breakdown,
                },
            }))
        }
        Err(e) => {
            // Unique key on delivery_id: the same delivery cannot be paid twice.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::Conflict().json(serde_json::json!({
                        "message": "Earnings already recorded for this delivery"
                    })));
                }
            }

            tracing::error!(error = %e, driver_id, "Failed to insert earnings record");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}
