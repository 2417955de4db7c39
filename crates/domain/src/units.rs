//! Unit conversions applied when normalizing provider readings

/// Factor from metres per second to kilometres per hour
pub const MPS_TO_KMH: f64 = 3.6;

/// Round a provider float to the nearest whole number.
///
/// Halves round up, towards positive infinity, so `-0.5` becomes `0` and
/// `-2.5` becomes `-2`. Out-of-range values saturate at the `i32` bounds and
/// NaN becomes 0.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn round_to_i32(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Convert a wind speed in m/s to whole km/h.
#[must_use]
pub fn ms_to_kmh(speed: f64) -> i32 {
    round_to_i32(speed * MPS_TO_KMH)
}

/// Convert a visibility in metres to whole kilometres.
#[must_use]
pub const fn meters_to_km(meters: u32) -> u32 {
    meters.saturating_add(500) / 1000
}
