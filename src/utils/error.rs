use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Serial port error: {0}")]
    SerialError(#[from] tokio_serial::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serial write timed out after {0:?}")]
    WriteTimeout(Duration),

    #[error("Serial writer is no longer running")]
    WriterClosed,

    #[error("HTTP server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Device,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BridgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::ConfigError { .. }
            | BridgeError::ConfigValidationError { .. }
            | BridgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BridgeError::SerialError(_)
            | BridgeError::IoError(_)
            | BridgeError::WriteTimeout(_)
            | BridgeError::WriterClosed => ErrorCategory::Device,
            BridgeError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單次寫入逾時，下一筆事件仍可能成功
            BridgeError::WriteTimeout(_) => ErrorSeverity::Medium,
            BridgeError::IoError(_) => ErrorSeverity::Medium,
            BridgeError::ConfigError { .. }
            | BridgeError::ConfigValidationError { .. }
            | BridgeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            BridgeError::SerialError(_)
            | BridgeError::WriterClosed
            | BridgeError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BridgeError::SerialError(_) => {
                "Check that the microcontroller is plugged in and that no other program holds the port"
            }
            BridgeError::IoError(_) => "Check the device connection and file permissions",
            BridgeError::ConfigError { .. } | BridgeError::ConfigValidationError { .. } => {
                "Fix the configuration file and try again"
            }
            BridgeError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value on the command line or in the config file"
            }
            BridgeError::WriteTimeout(_) => {
                "The device is not draining its input; try a higher --write-timeout-ms or reset the board"
            }
            BridgeError::WriterClosed => "Restart the bridge to reopen the serial port",
            BridgeError::ServerError { .. } => {
                "Make sure the listen address is free (another bridge may already be running)"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BridgeError::SerialError(e) => format!("Could not use the serial port: {}", e),
            BridgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        BridgeError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
