use anyhow::Result;
use coord_convert::utils::validation::Validate;
use coord_convert::{ConverterSession, Coordinates, Format, LatDirection, LngDirection, TomlConfig};
use tempfile::TempDir;

/// 從檔案載入配置並建立轉換工作階段
#[test]
fn test_session_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("coord-convert.toml");

    std::fs::write(
        &config_path,
        r#"
[session]
format = "DDM"

[sample]
latitude = -33.8688
longitude = 151.2093

[output]
json = true
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert!(config.json_output());

    let mut session = ConverterSession::with_config(&config)?;
    assert_eq!(session.format(), Format::DDM);
    assert_eq!(*session.dd(), Coordinates::default());

    session.load_sample();
    assert_eq!(session.format(), Format::DD);
    assert_eq!(session.dms().lat.direction, LatDirection::S);
    assert_eq!(session.dms().lng.direction, LngDirection::E);
    assert_eq!(session.ddm().lat.degrees, 33);

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = TomlConfig::from_file(temp_dir.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_out_of_range_sample_fails_validation() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[sample]
latitude = 10.0
longitude = 200.0
"#,
    )?;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("sample.longitude"));
    Ok(())
}

#[test]
fn test_nan_sample_never_reaches_the_store() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[sample]
latitude = nan
longitude = -122.3321
"#,
    )?;

    assert!(config.validate().is_err());
    assert!(ConverterSession::with_config(&config).is_err());
    Ok(())
}

#[test]
fn test_views_serialize_to_json() -> Result<()> {
    let mut session = ConverterSession::new();
    session.load_sample();

    let json = serde_json::to_value(session.views())?;
    assert_eq!(json["format"], "DD");
    assert_eq!(json["dd"]["latitude"], 47.6062);
    assert_eq!(json["dms"]["lat"]["degrees"], 47);
    assert_eq!(json["dms"]["lng"]["direction"], "W");
    assert_eq!(json["ddm"]["lat"]["minutes"], 36.372);
    Ok(())
}
