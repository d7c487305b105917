use crate::core::{Coordinates, Format};
use crate::utils::error::{CoordError, Result};
use crate::utils::validation::{
    valid_latitude, valid_longitude, validate_coordinate, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SAMPLE_LATITUDE: f64 = 47.6062;
pub const SAMPLE_LONGITUDE: f64 = -122.3321;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub format: Format,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            latitude: SAMPLE_LATITUDE,
            longitude: SAMPLE_LONGITUDE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(CoordError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CoordError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SAMPLE_LAT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CoordError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn initial_format(&self) -> Format {
        self.session.format
    }

    pub fn sample_point(&self) -> Coordinates {
        Coordinates::new(self.sample.latitude, self.sample.longitude)
    }

    pub fn json_output(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_coordinate("sample.latitude", self.sample.latitude, valid_latitude)?;
        validate_coordinate("sample.longitude", self.sample.longitude, valid_longitude)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[session]
format = "DMS"

[sample]
latitude = -33.8688
longitude = 151.2093

[output]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.initial_format(), Format::DMS);
        assert_eq!(config.sample_point(), Coordinates::new(-33.8688, 151.2093));
        assert!(config.json_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.initial_format(), Format::DD);
        assert_eq!(
            config.sample_point(),
            Coordinates::new(SAMPLE_LATITUDE, SAMPLE_LONGITUDE)
        );
        assert!(!config.json_output());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COORD_TEST_SAMPLE_LAT", "12.5");

        let toml_content = r#"
[sample]
latitude = ${COORD_TEST_SAMPLE_LAT}
longitude = 45.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.sample.latitude, 12.5);

        std::env::remove_var("COORD_TEST_SAMPLE_LAT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[sample]
latitude = 95.0
longitude = 0.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_sample_fails_validation() {
        let toml_content = r#"
[sample]
latitude = nan
longitude = -122.3321
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.sample.latitude.is_nan());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let toml_content = r#"
[session]
format = "UTM"
"#;

        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[session]
format = "ddm"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.initial_format(), Format::DDM);
    }
}
