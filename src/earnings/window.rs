use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Midnight on the most recent Sunday, or today if today is Sunday.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    let days_since_sunday = now.weekday().num_days_from_sunday() as i64;
    (now.date() - Duration::days(days_since_sunday)).and_time(NaiveTime::MIN)
}

/// Midnight on the first day of the current month.
pub fn month_start(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Midnight on January 1 of the current year.
pub fn year_start(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn week_starts_on_the_previous_sunday() {
        // 2025-03-05 is a Wednesday; the week began Sunday 2025-03-02.
        assert_eq!(week_start(at(2025, 3, 5, 16, 30)), at(2025, 3, 2, 0, 0));
    }

    #[test]
    fn sunday_is_its_own_week_start() {
        assert_eq!(week_start(at(2025, 3, 2, 23, 59)), at(2025, 3, 2, 0, 0));
    }

    #[test]
    fn week_can_cross_into_the_previous_year() {
        // 2026-01-02 is a Friday; its week began Sunday 2025-12-28.
        let now = at(2026, 1, 2, 12, 0);
        assert_eq!(week_start(now), at(2025, 12, 28, 0, 0));
        assert!(week_start(now) < year_start(now));
    }

    #[test]
    fn month_starts_on_day_one() {
        assert_eq!(month_start(at(2025, 3, 31, 8, 0)), at(2025, 3, 1, 0, 0));
        assert_eq!(month_start(at(2025, 3, 1, 0, 0)), at(2025, 3, 1, 0, 0));
    }

    #[test]
    fn year_starts_on_january_first() {
        assert_eq!(year_start(at(2025, 11, 20, 8, 0)), at(2025, 1, 1, 0, 0));
    }
}
