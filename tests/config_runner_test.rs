use anyhow::Result;
use small_textkit::{InputSource, OutputFormat, Runner, Settings, Task, TextKitError, TomlConfig};
use tempfile::TempDir;

/// 配置檔 + 檔案輸入，走完整個 size 流程
#[test]
fn test_size_from_file_with_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config_path = temp_dir.path().join("textkit.toml");
    std::fs::write(
        &config_path,
        r#"
[output]
format = "json"

[logging]
level = "debug"
"#,
    )?;

    let data_path = temp_dir.path().join("data.json");
    std::fs::write(&data_path, "{\n  \"a\": 1\n}\n")?;

    let file_config = TomlConfig::from_file(&config_path)?;
    let settings = Settings::merge(Some(&file_config), None, false, false)?;
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.log_level.as_deref(), Some("debug"));

    let source = InputSource::from_arg(data_path.to_str());
    let runner = Runner::new(settings.format);
    let output = runner.run(&Task::Size {
        json: source.read_to_string()?,
    })?;

    let report: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(report["size_bytes"], 7);
    assert_eq!(report["utf8_bytes"], 7);

    Ok(())
}

#[test]
fn test_capitalize_with_plain_override() -> Result<()> {
    let file_config = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n")?;
    let settings = Settings::merge(Some(&file_config), Some("plain"), false, false)?;

    let output = Runner::new(settings.format).run(&Task::Capitalize {
        text: "  make   this title case".to_string(),
    })?;
    assert_eq!(output, "  Make   This Title Case");

    Ok(())
}

#[test]
fn test_capitalize_json_output() -> Result<()> {
    let output = Runner::new(OutputFormat::Json).run(&Task::Capitalize {
        text: "hello world".to_string(),
    })?;
    assert_eq!(output, r#"{"capitalized":"Hello World"}"#);

    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[output]\nformat = \"csv\"\n")?;

    let file_config = TomlConfig::from_file(&config_path)?;
    let err = Settings::merge(Some(&file_config), None, false, false).unwrap_err();
    assert!(matches!(err, TextKitError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);

    Ok(())
}

#[test]
fn test_missing_input_file_is_io_error() {
    let source = InputSource::from_arg(Some("/no/such/dir/input.json"));
    let err = source.read_to_string().unwrap_err();
    assert!(matches!(err, TextKitError::IoError(_)));
}
