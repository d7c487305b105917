pub mod convert;
pub mod fields;
pub mod session;
pub mod store;
pub mod view;

pub use crate::domain::model::{
    Axis, Coordinates, DdmAngle, DdmCoordinates, DerivedViews, DmsAngle, DmsCoordinates, Format,
    Hemisphere, LatDirection, LngDirection,
};
pub use crate::domain::ports::ViewObserver;
pub use crate::utils::error::Result;
