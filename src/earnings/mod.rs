pub mod bonus;
pub mod fare;
pub mod summary;
pub mod window;

/// Round a monetary amount to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
