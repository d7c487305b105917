use crate::core::{Axis, Format, LatDirection, LngDirection};
use crate::utils::error::CoordError;
use crate::utils::validation::{
    valid_degrees_lat, valid_degrees_lng, valid_latitude, valid_longitude,
    valid_minutes_or_seconds,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every caller-writable slot of the raw store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    DdLat,
    DdLng,
    DmsLatDegrees,
    DmsLatMinutes,
    DmsLatSeconds,
    DmsLatDirection,
    DmsLngDegrees,
    DmsLngMinutes,
    DmsLngSeconds,
    DmsLngDirection,
    DdmLatDegrees,
    DdmLatMinutes,
    DdmLatDirection,
    DdmLngDegrees,
    DdmLngMinutes,
    DdmLngDirection,
}

/// How raw text for a field is parsed and gated.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Integer(fn(i64) -> bool),
    Real(fn(f64) -> bool),
    LatHemisphere,
    LngHemisphere,
}

/// A parsed, validated value ready to be written into its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(u32),
    Real(f64),
    Lat(LatDirection),
    Lng(LngDirection),
}

struct FieldSpec {
    id: FieldId,
    name: &'static str,
    group: Format,
    axis: Axis,
    kind: FieldKind,
}

const fn spec(
    id: FieldId,
    name: &'static str,
    group: Format,
    axis: Axis,
    kind: FieldKind,
) -> FieldSpec {
    FieldSpec {
        id,
        name,
        group,
        axis,
        kind,
    }
}

static FIELDS: [FieldSpec; 16] = [
    spec(FieldId::DdLat, "dd.lat", Format::DD, Axis::Lat, FieldKind::Real(valid_latitude)),
    spec(FieldId::DdLng, "dd.lng", Format::DD, Axis::Lng, FieldKind::Real(valid_longitude)),
    spec(FieldId::DmsLatDegrees, "dms.lat.deg", Format::DMS, Axis::Lat, FieldKind::Integer(valid_degrees_lat)),
    spec(FieldId::DmsLatMinutes, "dms.lat.min", Format::DMS, Axis::Lat, FieldKind::Integer(valid_whole_minutes)),
    spec(FieldId::DmsLatSeconds, "dms.lat.sec", Format::DMS, Axis::Lat, FieldKind::Real(valid_minutes_or_seconds)),
    spec(FieldId::DmsLatDirection, "dms.lat.dir", Format::DMS, Axis::Lat, FieldKind::LatHemisphere),
    spec(FieldId::DmsLngDegrees, "dms.lng.deg", Format::DMS, Axis::Lng, FieldKind::Integer(valid_degrees_lng)),
    spec(FieldId::DmsLngMinutes, "dms.lng.min", Format::DMS, Axis::Lng, FieldKind::Integer(valid_whole_minutes)),
    spec(FieldId::DmsLngSeconds, "dms.lng.sec", Format::DMS, Axis::Lng, FieldKind::Real(valid_minutes_or_seconds)),
    spec(FieldId::DmsLngDirection, "dms.lng.dir", Format::DMS, Axis::Lng, FieldKind::LngHemisphere),
    spec(FieldId::DdmLatDegrees, "ddm.lat.deg", Format::DDM, Axis::Lat, FieldKind::Integer(valid_degrees_lat)),
    spec(FieldId::DdmLatMinutes, "ddm.lat.min", Format::DDM, Axis::Lat, FieldKind::Real(valid_minutes_or_seconds)),
    spec(FieldId::DdmLatDirection, "ddm.lat.dir", Format::DDM, Axis::Lat, FieldKind::LatHemisphere),
    spec(FieldId::DdmLngDegrees, "ddm.lng.deg", Format::DDM, Axis::Lng, FieldKind::Integer(valid_degrees_lng)),
    spec(FieldId::DdmLngMinutes, "ddm.lng.min", Format::DDM, Axis::Lng, FieldKind::Real(valid_minutes_or_seconds)),
    spec(FieldId::DdmLngDirection, "ddm.lng.dir", Format::DDM, Axis::Lng, FieldKind::LngHemisphere),
];

// Raw text is read up to the first character that cannot continue the number,
// so "12.7" in an integer field commits 12 and "36.4abc" in a real field commits 36.4.
const INTEGER_PREFIX: &str = r"^[+-]?[0-9]+";
const REAL_PREFIX: &str = r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?";

fn leading_number<'a>(text: &'a str, pattern: &str) -> Option<&'a str> {
    Regex::new(pattern).ok()?.find(text).map(|m| m.as_str())
}

fn valid_whole_minutes(value: i64) -> bool {
    value >= 0 && valid_minutes_or_seconds(value as f64)
}

impl FieldId {
    pub fn all() -> impl Iterator<Item = FieldId> {
        FIELDS.iter().map(|s| s.id)
    }

    fn spec(self) -> &'static FieldSpec {
        // FIELDS is declared in variant order
        &FIELDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn group(self) -> Format {
        self.spec().group
    }

    pub fn axis(self) -> Axis {
        self.spec().axis
    }

    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    /// Parse and validate raw text for this field.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, CoordError> {
        let text = raw.trim();
        let reject = |reason: &str| CoordError::FieldRejected {
            field: self.name().to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match self.kind() {
            FieldKind::Integer(valid) => {
                let digits =
                    leading_number(text, INTEGER_PREFIX).ok_or_else(|| reject("not an integer"))?;
                let number: i64 = digits.parse().map_err(|_| reject("out of range"))?;
                if !valid(number) {
                    return Err(reject("out of range"));
                }
                u32::try_from(number)
                    .map(FieldValue::Integer)
                    .map_err(|_| reject("out of range"))
            }
            FieldKind::Real(valid) => {
                let digits =
                    leading_number(text, REAL_PREFIX).ok_or_else(|| reject("not a number"))?;
                let number: f64 = digits.parse().map_err(|_| reject("not a number"))?;
                if !valid(number) {
                    return Err(reject("out of range"));
                }
                Ok(FieldValue::Real(number))
            }
            FieldKind::LatHemisphere => text
                .parse::<LatDirection>()
                .map(FieldValue::Lat)
                .map_err(|_| reject("expected N or S")),
            FieldKind::LngHemisphere => text
                .parse::<LngDirection>()
                .map(FieldValue::Lng)
                .map_err(|_| reject("expected E or W")),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FIELDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(wanted))
            .map(|spec| spec.id)
            .ok_or_else(|| CoordError::UnknownFieldError {
                name: s.to_string(),
            })
    }
}
