use crate::core::{LineSink, WireLine};
use crate::utils::error::{BridgeError, Result};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::timeout;

struct WriteRequest {
    line: WireLine,
    reply: oneshot::Sender<Result<()>>,
}

/// Handle to the task that owns the serial sink.
///
/// Every line goes through one bounded queue and is written by one task, so
/// concurrent requests can never interleave bytes on the device. A line that
/// has started is always written to the end; the timeout only bounds how long
/// the caller waits for it. Cloning the handle is cheap; the task exits once
/// every handle is dropped.
#[derive(Debug, Clone)]
pub struct SerialWriter {
    tx: mpsc::Sender<WriteRequest>,
    write_timeout: Duration,
}

impl SerialWriter {
    pub fn spawn<S: LineSink>(
        sink: S,
        capacity: usize,
        write_timeout: Duration,
    ) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let handle = tokio::spawn(run_writer(sink, rx));
        (Self { tx, write_timeout }, handle)
    }

    /// Queue a line and wait until the sink has written it.
    ///
    /// On `WriteTimeout` a line that already reached the queue is still
    /// written later, whole.
    pub async fn write(&self, line: WireLine) -> Result<()> {
        let (reply, response) = oneshot::channel();

        let delivery = async {
            self.tx
                .send(WriteRequest { line, reply })
                .await
                .map_err(|_| BridgeError::WriterClosed)?;

            let written: Result<()> = response.await.map_err(|_| BridgeError::WriterClosed)?;
            written
        };

        timeout(self.write_timeout, delivery)
            .await
            .map_err(|_| BridgeError::WriteTimeout(self.write_timeout))?
    }
}

async fn run_writer<S: LineSink>(mut sink: S, mut rx: mpsc::Receiver<WriteRequest>) {
    tracing::debug!("Serial writer started");

    while let Some(WriteRequest { line, reply }) = rx.recv().await {
        // 不可中途取消，否則半行資料會黏到下一行前面
        let result = sink.write_line(&line).await;

        match reply.send(result) {
            Err(Err(e)) => tracing::warn!("Write result for '{}' dropped: {}", line, e),
            Err(Ok(())) => tracing::debug!("Late write completed: {}", line),
            Ok(()) => {}
        }
    }

    tracing::debug!("Serial writer stopped");
}
