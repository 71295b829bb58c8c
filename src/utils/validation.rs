use crate::utils::error::{BridgeError, Result};
use std::net::IpAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_device_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BridgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Serial device path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BridgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_ip_addr(field_name: &str, host: &str) -> Result<IpAddr> {
    host.parse::<IpAddr>()
        .map_err(|e| BridgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Invalid IP address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BridgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BridgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_device_path() {
        assert!(validate_device_path("serial.port", "COM5").is_ok());
        assert!(validate_device_path("serial.port", "/dev/ttyACM0").is_ok());
        assert!(validate_device_path("serial.port", "").is_err());
        assert!(validate_device_path("serial.port", "   ").is_err());
        assert!(validate_device_path("serial.port", "/dev/tty\0").is_err());
    }

    #[test]
    fn test_validate_ip_addr() {
        assert!(validate_ip_addr("server.host", "127.0.0.1").is_ok());
        assert!(validate_ip_addr("server.host", "::1").is_ok());
        assert!(validate_ip_addr("server.host", "localhost").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.queue_capacity", 5, 1).is_ok());
        assert!(validate_positive_number("server.queue_capacity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("serial.baud_rate", 9600, 300, 4_000_000).is_ok());
        assert!(validate_range("serial.baud_rate", 110, 300, 4_000_000).is_err());
    }
}
