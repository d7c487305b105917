use crate::config::toml_config::{TomlConfig, SAMPLE_LATITUDE, SAMPLE_LONGITUDE};
use crate::core::fields::{FieldId, FieldValue};
use crate::core::store::RawStore;
use crate::core::view;
use crate::core::{
    Coordinates, DdmCoordinates, DerivedViews, DmsCoordinates, Format, LatDirection,
    LngDirection, ViewObserver,
};
use crate::utils::error::{CoordError, Result};
use crate::utils::validation::Validate;

/// One conversion session: the raw store, its derived views and the commands that
/// mutate it. Views are recomputed inline after every committed write.
pub struct ConverterSession {
    store: RawStore,
    views: DerivedViews,
    sample: Coordinates,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl ConverterSession {
    pub fn new() -> Self {
        let store = RawStore::new();
        Self {
            views: view::derive(&store),
            store,
            sample: Coordinates::new(SAMPLE_LATITUDE, SAMPLE_LONGITUDE),
            observers: Vec::new(),
        }
    }

    /// Build a session from a configuration. The sample point is validated here so
    /// `load_sample` can never write a value outside the canonical range.
    pub fn with_config(config: &TomlConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new();
        session.sample = config.sample_point();
        session.store.format = config.initial_format();
        session.views = view::derive(&session.store);
        Ok(session)
    }

    pub fn subscribe<O: ViewObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn format(&self) -> Format {
        self.store.format()
    }

    pub fn store(&self) -> &RawStore {
        &self.store
    }

    pub fn read(&self, field: FieldId) -> FieldValue {
        self.store.read(field)
    }

    pub fn views(&self) -> &DerivedViews {
        &self.views
    }

    pub fn dd(&self) -> &Coordinates {
        &self.views.dd
    }

    pub fn dms(&self) -> &DmsCoordinates {
        &self.views.dms
    }

    pub fn ddm(&self) -> &DdmCoordinates {
        &self.views.ddm
    }

    pub fn set_format(&mut self, format: Format) {
        tracing::debug!("Input format set to {}", format);
        self.store.format = format;
        self.commit();
    }

    /// Parse, validate and commit `raw` into `field`. Invalid input is dropped silently
    /// and the previous value stays in place; use [`try_update_field`] to learn why.
    ///
    /// [`try_update_field`]: ConverterSession::try_update_field
    pub fn update_field(&mut self, field: FieldId, raw: &str) {
        let _ = self.try_update_field(field, raw);
    }

    pub fn try_update_field(&mut self, field: FieldId, raw: &str) -> Result<()> {
        let value = field.parse_value(raw)?;
        if !self.store.write(field, value) {
            return Err(CoordError::FieldRejected {
                field: field.name().to_string(),
                value: raw.to_string(),
                reason: "value kind does not match field".to_string(),
            });
        }
        self.commit();
        Ok(())
    }

    /// Select the latitude hemisphere of the DMS or DDM group. DD has no hemisphere
    /// slot, so `Format::DD` leaves the store untouched.
    pub fn set_lat_direction(&mut self, group: Format, direction: LatDirection) {
        let field = match group {
            Format::DD => return,
            Format::DMS => FieldId::DmsLatDirection,
            Format::DDM => FieldId::DdmLatDirection,
        };
        if self.store.write(field, FieldValue::Lat(direction)) {
            self.commit();
        }
    }

    pub fn set_lng_direction(&mut self, group: Format, direction: LngDirection) {
        let field = match group {
            Format::DD => return,
            Format::DMS => FieldId::DmsLngDirection,
            Format::DDM => FieldId::DdmLngDirection,
        };
        if self.store.write(field, FieldValue::Lng(direction)) {
            self.commit();
        }
    }

    pub fn clear_all(&mut self) {
        tracing::debug!("Clearing all coordinate fields");
        self.store.clear();
        self.commit();
    }

    pub fn load_sample(&mut self) {
        tracing::debug!(
            "Loading sample coordinate {}, {}",
            self.sample.latitude,
            self.sample.longitude
        );
        self.store.format = Format::DD;
        self.store.dd = self.sample;
        self.commit();
    }

    fn commit(&mut self) {
        self.views = view::derive(&self.store);
        for observer in self.observers.iter_mut() {
            observer.on_views_changed(&self.views);
        }
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConverterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterSession")
            .field("store", &self.store)
            .field("views", &self.views)
            .field("sample", &self.sample)
            .field("observers", &self.observers.len())
            .finish()
    }
}
