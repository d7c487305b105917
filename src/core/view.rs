use crate::core::store::RawStore;
use crate::core::{Coordinates, DdmCoordinates, DerivedViews, DmsCoordinates, Format};

/// Canonical decimal coordinate read from the group selected by the store's format.
pub fn canonical(store: &RawStore) -> Coordinates {
    match store.format() {
        Format::DD => *store.dd(),
        Format::DMS => Coordinates::from(store.dms()),
        Format::DDM => Coordinates::from(store.ddm()),
    }
}

/// Recompute all three views from the store. DMS and DDM are always projected from
/// the canonical value, whichever format is active.
pub fn derive(store: &RawStore) -> DerivedViews {
    let dd = canonical(store);
    DerivedViews {
        format: store.format(),
        dd,
        dms: DmsCoordinates::from(&dd),
        ddm: DdmCoordinates::from(&dd),
    }
}
