use crate::core::{LineSink, WireLine};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;
use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};

/// The microcontroller's serial port, opened once for the process lifetime.
pub struct SerialPortSink {
    path: String,
    port: SerialStream,
}

impl SerialPortSink {
    /// Open `path` at `baud_rate`, 8N1 without flow control.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        tracing::info!("Opening serial port {} at {} baud", path, baud_rate);

        let port = tokio_serial::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .open_native_async()?;

        tracing::info!("Serial port {} opened successfully", path);
        Ok(Self {
            path: path.to_string(),
            port,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl LineSink for SerialPortSink {
    async fn write_line(&mut self, line: &WireLine) -> Result<()> {
        tracing::debug!("Writing to {}: {}", self.path, line);
        self.port.write_all(line.as_bytes()).await?;
        self.port.flush().await?;
        Ok(())
    }
}

/// Records every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl LineSink for MemorySink {
    async fn write_line(&mut self, line: &WireLine) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.as_str().to_string());
        Ok(())
    }
}

/// Dry-run sink: lines only go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl LineSink for LogSink {
    async fn write_line(&mut self, line: &WireLine) -> Result<()> {
        tracing::info!("🔍 [dry run] {}", line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{encoder::encode, Event};

    #[tokio::test]
    async fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let mut writer_side = sink.clone();

        let line = encode(&Event::new("match_score", "1-0")).unwrap();
        writer_side.write_line(&line).await.unwrap();

        assert_eq!(sink.lines(), vec!["match_score:1-0\n".to_string()]);
    }

    #[tokio::test]
    async fn test_open_missing_port_fails() {
        let result = SerialPortSink::open("/dev/this-port-does-not-exist", 9600);
        assert!(result.is_err());
    }
}
