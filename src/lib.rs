pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::serial::{LogSink, MemorySink, SerialPortSink};
pub use crate::config::BridgeSettings;
pub use crate::core::{bridge::EventBridge, writer::SerialWriter};
pub use crate::domain::model::{Acknowledgement, Event, EventCategory, Forwarded, WireLine};
pub use crate::utils::error::{BridgeError, Result};
