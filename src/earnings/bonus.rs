use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;
use utoipa::ToSchema;

const LONG_DISTANCE_BONUS: f64 = 50.0;
const MID_DISTANCE_BONUS: f64 = 20.0;
const PEAK_HOUR_BONUS: f64 = 15.0;
const WEEKEND_BONUS: f64 = 10.0;

/// Per-rule bonus amounts for one delivery, reported separately so the
/// dashboard can show the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BonusBreakdown {
    #[schema(example = 20.0)]
    pub distance_bonus: f64,

    #[schema(example = 15.0)]
    pub peak_hour_bonus: f64,

    #[schema(example = 10.0)]
    pub weekend_bonus: f64,
}

impl BonusBreakdown {
    pub fn total(&self) -> f64 {
        self.distance_bonus + self.peak_hour_bonus + self.weekend_bonus
    }
}

/// Evaluate the three additive bonus rules for a delivery of the given
/// distance completed at the given local time.
pub fn evaluate(distance_km: f64, delivered_at: NaiveDateTime) -> BonusBreakdown {
    let distance_bonus = if distance_km > 10.0 {
        LONG_DISTANCE_BONUS
    } else if distance_km > 5.0 {
        MID_DISTANCE_BONUS
    } else {
        0.0
    };

    // Lunch and dinner rushes, both ends inclusive.
    let hour = delivered_at.hour();
    let peak_hour_bonus = if (11..=14).contains(&hour) || (18..=21).contains(&hour) {
        PEAK_HOUR_BONUS
    } else {
        0.0
    };

    let weekend_bonus = match delivered_at.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_BONUS,
        _ => 0.0,
    };

    BonusBreakdown {
        distance_bonus,
        peak_hour_bonus,
        weekend_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn all_three_rules_stack() {
        // 2025-03-01 is a Saturday, 13:00 is inside the lunch rush.
        let b = evaluate(12.0, at(2025, 3, 1, 13));
        assert_eq!(b.distance_bonus, 50.0);
        assert_eq!(b.peak_hour_bonus, 15.0);
        assert_eq!(b.weekend_bonus, 10.0);
        assert_eq!(b.total(), 75.0);
    }

    #[test]
    fn short_weekday_off_peak_delivery_earns_nothing() {
        // 2025-03-04 is a Tuesday.
        let b = evaluate(3.0, at(2025, 3, 4, 9));
        assert_eq!(b.total(), 0.0);
    }

    #[test]
    fn distance_thresholds_are_exclusive() {
        let when = at(2025, 3, 4, 9);
        assert_eq!(evaluate(5.0, when).distance_bonus, 0.0);
        assert_eq!(evaluate(5.01, when).distance_bonus, 20.0);
        assert_eq!(evaluate(10.0, when).distance_bonus, 20.0);
        assert_eq!(evaluate(10.01, when).distance_bonus, 50.0);
    }

    #[test]
    fn peak_hours_are_inclusive_at_both_ends() {
        for hour in [11, 14, 18, 21] {
            assert_eq!(
                evaluate(1.0, at(2025, 3, 4, hour)).peak_hour_bonus,
                15.0,
                "hour {hour} should be peak"
            );
        }
        for hour in [10, 15, 17, 22] {
            assert_eq!(
                evaluate(1.0, at(2025, 3, 4, hour)).peak_hour_bonus,
                0.0,
                "hour {hour} should not be peak"
            );
        }
    }

    #[test]
    fn weekend_covers_saturday_and_sunday_only() {
        assert_eq!(evaluate(1.0, at(2025, 3, 1, 9)).weekend_bonus, 10.0); // Sat
        assert_eq!(evaluate(1.0, at(2025, 3, 2, 9)).weekend_bonus, 10.0); // Sun
        assert_eq!(evaluate(1.0, at(2025, 3, 3, 9)).weekend_bonus, 0.0); // Mon
        assert_eq!(evaluate(1.0, at(2025, 2, 28, 9)).weekend_bonus, 0.0); // Fri
    }
}
