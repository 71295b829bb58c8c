pub mod settings;
pub mod toml_config;

pub use settings::BridgeSettings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

/// Command line options. Anything left unset falls back to `--config`, then to
/// the built-in defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "game-serial-bridge")]
#[command(about = "Forward game events received over HTTP to a microcontroller on a serial port")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Serial device, e.g. COM5 or /dev/ttyACM0
    #[arg(long)]
    pub serial_port: Option<String>,

    #[arg(long)]
    pub baud_rate: Option<u32>,

    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Give up on a single serial write after this many milliseconds
    #[arg(long)]
    pub write_timeout_ms: Option<u64>,

    /// Pending lines allowed before requests wait for the serial writer
    #[arg(long)]
    pub queue_capacity: Option<usize>,

    /// Log wire lines instead of opening the serial port
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<BridgeSettings> {
        let mut settings = BridgeSettings::default();

        if let Some(path) = &self.config {
            settings.apply_file(&TomlConfig::from_file(path)?);
        }

        if let Some(serial_port) = &self.serial_port {
            settings.serial_port = serial_port.clone();
        }
        if let Some(baud_rate) = self.baud_rate {
            settings.baud_rate = baud_rate;
        }
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(ms) = self.write_timeout_ms {
            settings.write_timeout_ms = ms;
        }
        if let Some(capacity) = self.queue_capacity {
            settings.queue_capacity = capacity;
        }
        settings.dry_run = self.dry_run;
        settings.log_json |= self.log_json;

        Ok(settings)
    }
}
