use super::round2;

const BASE_PICKUP_FEE: f64 = 1.40;
const BASE_DROPOFF_FEE: f64 = 0.60;
const RATE_PER_KM: f64 = 1.00;
const MINIMUM_FARE: f64 = 3.50;

/// Base fare for a delivery of the given distance in kilometers.
/// Pickup fee + dropoff fee + per-km rate, with the minimum fare
/// guarantee applied. A corrupt negative distance is clamped to zero.
pub fn base_fare(distance_km: f64) -> f64 {
    let distance_km = distance_km.max(0.0);
    let total = BASE_PICKUP_FEE + BASE_DROPOFF_FEE + distance_km * RATE_PER_KM;
    round2(total.max(MINIMUM_FARE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_floors_to_minimum() {
        assert_eq!(base_fare(0.0), 3.50);
    }

    #[test]
    fn short_trip_clears_the_floor() {
        // 1.40 + 0.60 + 2.00 = 4.00
        assert_eq!(base_fare(2.0), 4.00);
    }

    #[test]
    fn fare_is_linear_past_the_floor() {
        assert_eq!(base_fare(10.0), 12.00);
        assert_eq!(base_fare(7.25), 9.25);
    }

    #[test]
    fn fare_never_drops_below_minimum() {
        for d in [0.0, 0.5, 1.0, 1.49, 1.5, 3.0, 25.0] {
            assert!(base_fare(d) >= 3.50, "fare({d}) fell below minimum");
        }
    }

    #[test]
    fn negative_distance_clamps_to_zero() {
        assert_eq!(base_fare(-4.0), 3.50);
    }
}
