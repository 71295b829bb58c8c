use crate::domain::model::WireLine;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

/// Destination for wire lines. Implementations are owned by a single writer
/// task, so `&mut self` is never shared.
#[async_trait]
pub trait LineSink: Send + 'static {
    async fn write_line(&mut self, line: &WireLine) -> Result<()>;
}

#[async_trait]
impl LineSink for Box<dyn LineSink> {
    async fn write_line(&mut self, line: &WireLine) -> Result<()> {
        (**self).write_line(line).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn serial_port(&self) -> &str;
    fn baud_rate(&self) -> u32;
    fn bind_addr(&self) -> SocketAddr;
    fn write_timeout(&self) -> Duration;
    fn queue_capacity(&self) -> usize;
}
