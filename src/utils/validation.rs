use crate::utils::error::{CoordError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MINUTES_PER_DEGREE: f64 = 60.0;

pub fn valid_latitude(value: f64) -> bool {
    value.is_finite() && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&value)
}

pub fn valid_longitude(value: f64) -> bool {
    value.is_finite() && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&value)
}

pub fn valid_degrees_lat(value: i64) -> bool {
    (0..=90).contains(&value)
}

pub fn valid_degrees_lng(value: i64) -> bool {
    (0..=180).contains(&value)
}

/// Minutes and seconds share the half-open range [0, 60).
pub fn valid_minutes_or_seconds(value: f64) -> bool {
    value.is_finite() && (0.0..MINUTES_PER_DEGREE).contains(&value)
}

/// Gate a configured coordinate value through one of the coordinate predicates.
pub fn validate_coordinate(field_name: &str, value: f64, valid: fn(f64) -> bool) -> Result<()> {
    if !valid(value) {
        return Err(CoordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value is not a finite coordinate inside its range".to_string(),
        });
    }
    Ok(())
}
