use crate::core::fields::FieldId;
use crate::utils::error::CoordError;
use std::str::FromStr;

/// A `FIELD=VALUE` pair from the command line, e.g. `dms.lat.sec=22.32`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    pub field: FieldId,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| CoordError::MalformedAssignment { arg: s.to_string() })?;

        Ok(Self {
            field: name.parse()?,
            value: value.to_string(),
        })
    }
}
