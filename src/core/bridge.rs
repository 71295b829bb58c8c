use crate::core::encoder::encode;
use crate::core::writer::SerialWriter;
use crate::core::{Acknowledgement, Event, Forwarded};
use crate::utils::error::Result;

/// Receives game events and forwards the recognized ones to the serial writer.
#[derive(Debug, Clone)]
pub struct EventBridge {
    writer: SerialWriter,
}

impl EventBridge {
    pub fn new(writer: SerialWriter) -> Self {
        Self { writer }
    }

    pub async fn forward(&self, event: &Event) -> Result<Forwarded> {
        let Some(line) = encode(event) else {
            return Ok(Forwarded::Ignored);
        };

        self.writer.write(line.clone()).await?;
        Ok(Forwarded::Sent(line))
    }

    /// Always acknowledges; failures are only visible in the log.
    pub async fn handle(&self, name: String, data: String) -> Acknowledgement {
        let event = Event { name, data };
        tracing::info!("[EVENT] name={}, data={}", event.name, event.data);

        match self.forward(&event).await {
            Ok(Forwarded::Sent(line)) => tracing::info!("➡️ Sent: {}", line),
            Ok(Forwarded::Ignored) => {
                tracing::debug!("Ignored unrecognized event '{}'", event.name)
            }
            Err(e) => tracing::error!(
                "❌ Failed to forward '{}': {} (Severity: {:?})",
                event.name,
                e,
                e.severity()
            ),
        }

        Acknowledgement
    }
}
