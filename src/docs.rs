use crate::api::earnings::{RecordEarnings, RecordResponse, RecordedEarnings, SummaryResponse};
use crate::earnings::bonus::BonusBreakdown;
use crate::earnings::summary::{RecentPayment, WindowSummary};
use crate::model::earning::{EarningRow, PaymentStatus};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rider Earnings API",
        version = "1.0.0",
        description = r#"
## Delivery-Rider Earnings Service

Records per-delivery payouts for delivery riders and serves the earnings
dashboard of the food-delivery platform.

### 🔹 Key Features
- **Earnings Recording**
  - Distance-based base fare with a minimum fare guarantee
  - Distance, peak-hour, and weekend bonuses with a per-rule breakdown
- **Earnings Summaries**
  - Week / month / year aggregation with per-order and per-hour averages
  - Five most recent payments, formatted for display

### 🔐 Security
All endpoints require a **JWT Bearer** token carrying the driver identity.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::earnings::get_summary,
        crate::api::earnings::record_earnings
    ),
    components(
        schemas(
            RecordEarnings,
            RecordedEarnings,
            RecordResponse,
            SummaryResponse,
            WindowSummary,
            RecentPayment,
            BonusBreakdown,
            EarningRow,
            PaymentStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Earnings", description = "Delivery-rider earnings APIs")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
