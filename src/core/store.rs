use crate::core::fields::{FieldId, FieldValue};
use crate::core::{Coordinates, DdmCoordinates, DmsCoordinates, Format};
use serde::{Deserialize, Serialize};

/// Raw field values for every representation plus the active format.
///
/// Only the group selected by `format` feeds the derived views; the other groups keep
/// whatever they last held.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawStore {
    pub(crate) format: Format,
    pub(crate) dd: Coordinates,
    pub(crate) dms: DmsCoordinates,
    pub(crate) ddm: DdmCoordinates,
}

impl RawStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn dd(&self) -> &Coordinates {
        &self.dd
    }

    pub fn dms(&self) -> &DmsCoordinates {
        &self.dms
    }

    pub fn ddm(&self) -> &DdmCoordinates {
        &self.ddm
    }

    pub fn read(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::DdLat => FieldValue::Real(self.dd.latitude),
            FieldId::DdLng => FieldValue::Real(self.dd.longitude),
            FieldId::DmsLatDegrees => FieldValue::Integer(self.dms.lat.degrees),
            FieldId::DmsLatMinutes => FieldValue::Integer(self.dms.lat.minutes),
            FieldId::DmsLatSeconds => FieldValue::Real(self.dms.lat.seconds),
            FieldId::DmsLatDirection => FieldValue::Lat(self.dms.lat.direction),
            FieldId::DmsLngDegrees => FieldValue::Integer(self.dms.lng.degrees),
            FieldId::DmsLngMinutes => FieldValue::Integer(self.dms.lng.minutes),
            FieldId::DmsLngSeconds => FieldValue::Real(self.dms.lng.seconds),
            FieldId::DmsLngDirection => FieldValue::Lng(self.dms.lng.direction),
            FieldId::DdmLatDegrees => FieldValue::Integer(self.ddm.lat.degrees),
            FieldId::DdmLatMinutes => FieldValue::Real(self.ddm.lat.minutes),
            FieldId::DdmLatDirection => FieldValue::Lat(self.ddm.lat.direction),
            FieldId::DdmLngDegrees => FieldValue::Integer(self.ddm.lng.degrees),
            FieldId::DdmLngMinutes => FieldValue::Real(self.ddm.lng.minutes),
            FieldId::DdmLngDirection => FieldValue::Lng(self.ddm.lng.direction),
        }
    }

    /// Write a value into its slot. Returns `false` when the value kind does not fit the field.
    pub(crate) fn write(&mut self, field: FieldId, value: FieldValue) -> bool {
        use FieldValue::{Integer, Lat, Lng, Real};

        match (field, value) {
            (FieldId::DdLat, Real(v)) => self.dd.latitude = v,
            (FieldId::DdLng, Real(v)) => self.dd.longitude = v,
            (FieldId::DmsLatDegrees, Integer(v)) => self.dms.lat.degrees = v,
            (FieldId::DmsLatMinutes, Integer(v)) => self.dms.lat.minutes = v,
            (FieldId::DmsLatSeconds, Real(v)) => self.dms.lat.seconds = v,
            (FieldId::DmsLatDirection, Lat(d)) => self.dms.lat.direction = d,
            (FieldId::DmsLngDegrees, Integer(v)) => self.dms.lng.degrees = v,
            (FieldId::DmsLngMinutes, Integer(v)) => self.dms.lng.minutes = v,
            (FieldId::DmsLngSeconds, Real(v)) => self.dms.lng.seconds = v,
            (FieldId::DmsLngDirection, Lng(d)) => self.dms.lng.direction = d,
            (FieldId::DdmLatDegrees, Integer(v)) => self.ddm.lat.degrees = v,
            (FieldId::DdmLatMinutes, Real(v)) => self.ddm.lat.minutes = v,
            (FieldId::DdmLatDirection, Lat(d)) => self.ddm.lat.direction = d,
            (FieldId::DdmLngDegrees, Integer(v)) => self.ddm.lng.degrees = v,
            (FieldId::DdmLngMinutes, Real(v)) => self.ddm.lng.minutes = v,
            (FieldId::DdmLngDirection, Lng(d)) => self.ddm.lng.direction = d,
            _ => return false,
        }
        true
    }

    /// Zero every field and reset hemispheres to N/E. The format is kept.
    pub(crate) fn clear(&mut self) {
        *self = RawStore {
            format: self.format,
            ..RawStore::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatDirection, LngDirection};

    #[test]
    fn test_default_store() {
        let store = RawStore::new();
        assert_eq!(store.format(), Format::DD);
        assert_eq!(store.dd().latitude, 0.0);
        assert_eq!(store.dms().lat.direction, LatDirection::N);
        assert_eq!(store.ddm().lng.direction, LngDirection::E);
    }

    #[test]
    fn test_write_and_read() {
        let mut store = RawStore::new();
        assert!(store.write(FieldId::DmsLngSeconds, FieldValue::Real(55.56)));
        assert_eq!(store.read(FieldId::DmsLngSeconds), FieldValue::Real(55.56));
        assert!(store.write(FieldId::DdmLatDirection, FieldValue::Lat(LatDirection::S)));
        assert_eq!(store.ddm().lat.direction, LatDirection::S);
    }

    #[test]
    fn test_write_kind_mismatch() {
        let mut store = RawStore::new();
        assert!(!store.write(FieldId::DdLat, FieldValue::Integer(4)));
        assert!(!store.write(FieldId::DmsLatDirection, FieldValue::Lng(LngDirection::W)));
        assert_eq!(store, RawStore::new());
    }

    #[test]
    fn test_clear_keeps_format() {
        let mut store = RawStore::new();
        store.format = Format::DDM;
        store.write(FieldId::DdmLatMinutes, FieldValue::Real(12.5));
        store.write(FieldId::DmsLngDirection, FieldValue::Lng(LngDirection::W));
        store.clear();
        assert_eq!(store.format(), Format::DDM);
        assert_eq!(store.ddm().lat.minutes, 0.0);
        assert_eq!(store.dms().lng.direction, LngDirection::E);
    }
}
