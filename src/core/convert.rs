use crate::core::{
    Coordinates, DdmAngle, DdmCoordinates, DmsAngle, DmsCoordinates, Hemisphere,
};
use crate::utils::validation::MINUTES_PER_DEGREE;

const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Round half away from zero at the third decimal.
pub fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

pub fn dms_to_dd<D: Hemisphere>(degrees: u32, minutes: u32, seconds: f64, direction: D) -> f64 {
    direction.sign()
        * (f64::from(degrees)
            + f64::from(minutes) / MINUTES_PER_DEGREE
            + seconds / SECONDS_PER_DEGREE)
}

pub fn ddm_to_dd<D: Hemisphere>(degrees: u32, minutes: f64, direction: D) -> f64 {
    direction.sign() * (f64::from(degrees) + minutes / MINUTES_PER_DEGREE)
}

/// Split a signed decimal value into whole degrees, whole minutes and seconds.
///
/// Only the seconds are rounded; degrees and minutes are floored and never carried,
/// so a fraction just below a full minute can show as `60` seconds.
pub fn dd_to_dms<D: Hemisphere>(value: f64) -> DmsAngle<D> {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes_float = (abs - degrees) * MINUTES_PER_DEGREE;
    let minutes = minutes_float.floor();
    let seconds = (minutes_float - minutes) * MINUTES_PER_DEGREE;

    DmsAngle {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds: round_to_thousandths(seconds),
        direction: D::for_value(value),
    }
}

pub fn dd_to_ddm<D: Hemisphere>(value: f64) -> DdmAngle<D> {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = (abs - degrees) * MINUTES_PER_DEGREE;

    DdmAngle {
        degrees: degrees as u32,
        minutes: round_to_thousandths(minutes),
        direction: D::for_value(value),
    }
}

impl<D: Hemisphere> DmsAngle<D> {
    pub fn to_decimal(&self) -> f64 {
        dms_to_dd(self.degrees, self.minutes, self.seconds, self.direction)
    }
}

impl<D: Hemisphere> DdmAngle<D> {
    pub fn to_decimal(&self) -> f64 {
        ddm_to_dd(self.degrees, self.minutes, self.direction)
    }
}

impl From<&DmsCoordinates> for Coordinates {
    fn from(dms: &DmsCoordinates) -> Self {
        Coordinates::new(dms.lat.to_decimal(), dms.lng.to_decimal())
    }
}

impl From<&DdmCoordinates> for Coordinates {
    fn from(ddm: &DdmCoordinates) -> Self {
        Coordinates::new(ddm.lat.to_decimal(), ddm.lng.to_decimal())
    }
}

impl From<&Coordinates> for DmsCoordinates {
    fn from(dd: &Coordinates) -> Self {
        DmsCoordinates {
            lat: dd_to_dms(dd.latitude),
            lng: dd_to_dms(dd.longitude),
        }
    }
}

impl From<&Coordinates> for DdmCoordinates {
    fn from(dd: &Coordinates) -> Self {
        DdmCoordinates {
            lat: dd_to_ddm(dd.latitude),
            lng: dd_to_ddm(dd.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatDirection, LngDirection};

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_dd_to_dms_seattle() {
        let lat: DmsAngle<LatDirection> = dd_to_dms(47.6062);
        assert_eq!(lat.degrees, 47);
        assert_eq!(lat.minutes, 36);
        assert!((lat.seconds - 22.32).abs() < 1e-9);
        assert_eq!(lat.direction, LatDirection::N);

        let lng: DmsAngle<LngDirection> = dd_to_dms(-122.3321);
        assert_eq!(lng.degrees, 122);
        assert_eq!(lng.minutes, 19);
        assert!((lng.seconds - 55.56).abs() < 1e-9);
        assert_eq!(lng.direction, LngDirection::W);
    }

    #[test]
    fn test_dd_to_ddm_seattle() {
        let lat: DdmAngle<LatDirection> = dd_to_ddm(47.6062);
        assert_eq!(lat.degrees, 47);
        assert!((lat.minutes - 36.372).abs() < 1e-9);

        let lng: DdmAngle<LngDirection> = dd_to_ddm(-122.3321);
        assert_eq!(lng.degrees, 122);
        assert!((lng.minutes - 19.926).abs() < 1e-9);
        assert_eq!(lng.direction, LngDirection::W);
    }

    #[test]
    fn test_to_dd() {
        let lat = dms_to_dd(47, 36, 22.32, LatDirection::N);
        assert!((lat - 47.6062).abs() < TOLERANCE);

        let lng = ddm_to_dd(122, 19.926, LngDirection::W);
        assert!((lng + 122.3321).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_is_positive_hemisphere() {
        let lat: DmsAngle<LatDirection> = dd_to_dms(0.0);
        assert_eq!(lat.direction, LatDirection::N);
        assert_eq!(lat.degrees, 0);
        assert_eq!(lat.seconds, 0.0);

        let lng: DdmAngle<LngDirection> = dd_to_ddm(-0.0);
        assert_eq!(lng.direction, LngDirection::E);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            (0.0, 0.0),
            (90.0, 180.0),
            (-90.0, -180.0),
            (-33.8688, 151.2093),
            (47.6062, -122.3321),
            (0.000123, -0.999999),
            (12.345678, 98.765432),
        ];

        for (lat, lng) in samples {
            let dd = Coordinates::new(lat, lng);

            let back = Coordinates::from(&DmsCoordinates::from(&dd));
            assert!((back.latitude - lat).abs() < TOLERANCE, "dms lat {}", lat);
            assert!((back.longitude - lng).abs() < TOLERANCE, "dms lng {}", lng);

            let back = Coordinates::from(&DdmCoordinates::from(&dd));
            assert!((back.latitude - lat).abs() < TOLERANCE, "ddm lat {}", lat);
            assert!((back.longitude - lng).abs() < TOLERANCE, "ddm lng {}", lng);
        }
    }

    #[test]
    fn test_round_to_thousandths() {
        assert_eq!(round_to_thousandths(0.0625), 0.063);
        assert_eq!(round_to_thousandths(-0.0625), -0.063);
        assert_eq!(round_to_thousandths(59.9996), 60.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees_to_radians(360.0) - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
