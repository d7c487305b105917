use crate::utils::error::CoordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which raw field group is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    #[default]
    #[serde(alias = "dd")]
    DD,
    #[serde(alias = "dms")]
    DMS,
    #[serde(alias = "ddm")]
    DDM,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::DD, Format::DMS, Format::DDM];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::DD => "DD",
            Format::DMS => "DMS",
            Format::DDM => "DDM",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoordError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "expected one of DD, DMS, DDM".to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Lat,
    Lng,
}

/// Sign carrier of a DMS/DDM angle. Zero and positive values map to `POSITIVE`.
pub trait Hemisphere: Copy + PartialEq + fmt::Display {
    const POSITIVE: Self;
    const NEGATIVE: Self;

    fn sign(self) -> f64 {
        if self == Self::POSITIVE {
            1.0
        } else {
            -1.0
        }
    }

    fn for_value(value: f64) -> Self {
        if value >= 0.0 {
            Self::POSITIVE
        } else {
            Self::NEGATIVE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LatDirection {
    #[default]
    N,
    S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LngDirection {
    #[default]
    E,
    W,
}

impl Hemisphere for LatDirection {
    const POSITIVE: Self = LatDirection::N;
    const NEGATIVE: Self = LatDirection::S;
}

impl Hemisphere for LngDirection {
    const POSITIVE: Self = LngDirection::E;
    const NEGATIVE: Self = LngDirection::W;
}

impl fmt::Display for LatDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LatDirection::N => "N",
            LatDirection::S => "S",
        })
    }
}

impl fmt::Display for LngDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LngDirection::E => "E",
            LngDirection::W => "W",
        })
    }
}

impl FromStr for LatDirection {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "n" => Ok(LatDirection::N),
            "S" | "s" => Ok(LatDirection::S),
            other => Err(CoordError::FieldRejected {
                field: "latitude direction".to_string(),
                value: other.to_string(),
                reason: "expected N or S".to_string(),
            }),
        }
    }
}

impl FromStr for LngDirection {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E" | "e" => Ok(LngDirection::E),
            "W" | "w" => Ok(LngDirection::W),
            other => Err(CoordError::FieldRejected {
                field: "longitude direction".to_string(),
                value: other.to_string(),
                reason: "expected E or W".to_string(),
            }),
        }
    }
}

/// Signed decimal degrees; the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DmsAngle<D> {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub direction: D,
}

impl<D: fmt::Display> fmt::Display for DmsAngle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{00B0}{}\u{2032}{}\u{2033}{}",
            self.degrees, self.minutes, self.seconds, self.direction
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DdmAngle<D> {
    pub degrees: u32,
    pub minutes: f64,
    pub direction: D,
}

impl<D: fmt::Display> fmt::Display for DdmAngle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{00B0}{}\u{2032}{}",
            self.degrees, self.minutes, self.direction
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DmsCoordinates {
    pub lat: DmsAngle<LatDirection>,
    pub lng: DmsAngle<LngDirection>,
}

impl fmt::Display for DmsCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DdmCoordinates {
    pub lat: DdmAngle<LatDirection>,
    pub lng: DdmAngle<LngDirection>,
}

impl fmt::Display for DdmCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lng)
    }
}

/// Snapshot of the three representations, all derived from one canonical DD value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedViews {
    pub format: Format,
    pub dd: Coordinates,
    pub dms: DmsCoordinates,
    pub ddm: DdmCoordinates,
}
