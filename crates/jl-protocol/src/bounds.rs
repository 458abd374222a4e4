//! Numeric domains for temperature and humidity payloads.
//!
//! Comfort setpoints use a narrow band; threshold temperatures (balance
//! point, lockouts) allow negatives. Values inside the extended band but
//! outside the strict band pass through for caller-side clamping; values
//! beyond the extended band must never produce a command.

use std::ops::RangeInclusive;

/// Strict comfort setpoint band (°F). The executor clamps to this.
pub const SETPOINT_STRICT: RangeInclusive<f64> = 45.0..=85.0;

/// Extended comfort setpoint band (°F). Beyond this, no rule fires.
pub const SETPOINT_EXTENDED: RangeInclusive<f64> = 40.0..=100.0;

/// Threshold temperature band (°F) — balance point and lockouts.
pub const THRESHOLD_RANGE: RangeInclusive<f64> = -10.0..=50.0;

/// Relative humidity target band (%RH).
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 20.0..=70.0;

/// Relative adjustment band (°F) for "warmer by N" style commands.
pub const DELTA_RANGE: RangeInclusive<f64> = 1.0..=15.0;

/// True when a setpoint is acceptable for command emission (extended band).
pub fn setpoint_accepted(degrees: f64) -> bool {
    SETPOINT_EXTENDED.contains(&degrees)
}

/// True when a setpoint needs no clamping by the executor (strict band).
pub fn setpoint_in_strict_band(degrees: f64) -> bool {
    SETPOINT_STRICT.contains(&degrees)
}

/// True when a threshold temperature is acceptable.
pub fn threshold_accepted(degrees: f64) -> bool {
    THRESHOLD_RANGE.contains(&degrees)
}

/// True when a humidity target is acceptable.
pub fn humidity_accepted(percent: f64) -> bool {
    HUMIDITY_RANGE.contains(&percent)
}
