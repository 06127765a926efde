//! Frame-rate independent damping helpers.

/// Linear interpolation that snaps to `end` once within `limit` of it.
pub fn lerp_precise(start: f64, end: f64, t: f64, limit: f64) -> f64 {
    let v = start * (1.0 - t) + end * t;
    if (end - v).abs() < limit { end } else { v }
}

/// Exponential damping from `a` towards `b` over `dt_ms` milliseconds.
///
/// `smoothing` is the rate; the interpolation factor is `1 - exp(-smoothing * 0.05 * dt_ms)`, so
/// `dt_ms == 0` leaves `a` unchanged (apart from the `limit` snap).
pub fn damp_precise(a: f64, b: f64, smoothing: f64, dt_ms: f64, limit: f64) -> f64 {
    lerp_precise(a, b, 1.0 - (-smoothing * 0.05 * dt_ms).exp(), limit)
}

/// Clamps `value` into `[min, max]`. When `max < min`, `min` wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Rounds half-way cases towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
