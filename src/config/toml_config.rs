use crate::utils::error::{BridgeError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional `bridge.toml` file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    pub serial: Option<SerialSection>,
    pub server: Option<ServerSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SerialSection {
    pub port: Option<String>,
    pub baud_rate: Option<u32>,
    pub write_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub queue_capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            BridgeError::config(format!(
                "cannot read '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BridgeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SERIAL_PORT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| BridgeError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[serial]
port = "COM7"
baud_rate = 115200
write_timeout_ms = 250

[server]
host = "0.0.0.0"
port = 5001
queue_capacity = 16

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let serial = config.serial.unwrap();
        assert_eq!(serial.port.as_deref(), Some("COM7"));
        assert_eq!(serial.baud_rate, Some(115200));
        assert_eq!(serial.write_timeout_ms, Some(250));

        let server = config.server.unwrap();
        assert_eq!(server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(server.port, Some(5001));
        assert_eq!(server.queue_capacity, Some(16));
        assert_eq!(config.logging.unwrap().json, Some(true));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRIDGE_TEST_SERIAL_PORT", "/dev/ttyUSB3");

        let toml_content = r#"
[serial]
port = "${BRIDGE_TEST_SERIAL_PORT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.serial.unwrap().port.as_deref(),
            Some("/dev/ttyUSB3")
        );

        std::env::remove_var("BRIDGE_TEST_SERIAL_PORT");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[serial]
port = "${BRIDGE_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.serial.unwrap().port.as_deref(),
            Some("${BRIDGE_TEST_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let toml_content = r#"
[serial]
baud_rate = "fast"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, BridgeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 6000\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().port, Some(6000));
    }
}
