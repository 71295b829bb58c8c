use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_device_path, validate_ip_addr, validate_positive_number, validate_range, Validate,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[cfg(windows)]
pub const DEFAULT_SERIAL_PORT: &str = "COM5";
#[cfg(not(windows))]
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyACM0";

pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 5000;
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

const MIN_BAUD_RATE: u32 = 300;
const MAX_BAUD_RATE: u32 = 4_000_000;

/// Fully resolved settings: defaults, then the config file, then the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeSettings {
    pub serial_port: String,
    pub baud_rate: u32,
    pub host: String,
    pub port: u16,
    pub write_timeout_ms: u64,
    pub queue_capacity: usize,
    pub log_json: bool,
    pub dry_run: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            serial_port: DEFAULT_SERIAL_PORT.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            log_json: false,
            dry_run: false,
        }
    }
}

impl BridgeSettings {
    /// 以設定檔覆蓋預設值
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if let Some(serial) = &file.serial {
            if let Some(port) = &serial.port {
                self.serial_port = port.clone();
            }
            if let Some(baud_rate) = serial.baud_rate {
                self.baud_rate = baud_rate;
            }
            if let Some(ms) = serial.write_timeout_ms {
                self.write_timeout_ms = ms;
            }
        }

        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
            if let Some(capacity) = server.queue_capacity {
                self.queue_capacity = capacity;
            }
        }

        if let Some(json) = file.logging.as_ref().and_then(|l| l.json) {
            self.log_json = json;
        }
    }
}

impl Validate for BridgeSettings {
    fn validate(&self) -> Result<()> {
        validate_device_path("serial.port", &self.serial_port)?;
        validate_range("serial.baud_rate", self.baud_rate, MIN_BAUD_RATE, MAX_BAUD_RATE)?;
        validate_positive_number("serial.write_timeout_ms", self.write_timeout_ms, 1)?;
        validate_ip_addr("server.host", &self.host)?;
        validate_positive_number("server.queue_capacity", self.queue_capacity as u64, 1)?;
        Ok(())
    }
}

impl ConfigProvider for BridgeSettings {
    fn serial_port(&self) -> &str {
        &self.serial_port
    }

    fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    fn bind_addr(&self) -> SocketAddr {
        // host 已在 validate() 檢查過
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        SocketAddr::new(ip, self.port)
    }

    fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}
