use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

use crate::error::ListenerError;

/// Destination for decoded webhook payloads.
#[async_trait]
pub trait PayloadSink: Send + Sync {
    async fn deliver(&self, payload: &str) -> Result<(), ListenerError>;
}

/// Writes every payload followed by a newline to `W`.
///
/// The writer stays locked across the write and the flush, so payloads
/// delivered concurrently come out as whole lines.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: tokio::sync::Mutex<W>,
}

/// The sink the binary prints through.
pub type StdoutSink = LineSink<Stdout>;

impl<W> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: tokio::sync::Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl LineSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> PayloadSink for LineSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn deliver(&self, payload: &str) -> Result<(), ListenerError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(payload.as_bytes())
            .await
            .map_err(ListenerError::Output)?;
        writer.write_all(b"\n").await.map_err(ListenerError::Output)?;
        writer.flush().await.map_err(ListenerError::Output)?;
        Ok(())
    }
}

/// Keeps payloads in memory instead of printing them.
#[derive(Debug, Default)]
pub struct MemorySink {
    payloads: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<String> {
        self.payloads
            .lock()
            .map(|payloads| payloads.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PayloadSink for MemorySink {
    async fn deliver(&self, payload: &str) -> Result<(), ListenerError> {
        let mut payloads = self
            .payloads
            .lock()
            .map_err(|e| ListenerError::Output(std::io::Error::other(e.to_string())))?;
        payloads.push(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.deliver("first").await.unwrap();
        sink.deliver("").await.unwrap();
        sink.deliver("first").await.unwrap();

        assert_eq!(sink.payloads(), vec!["first", "", "first"]);
    }

    #[tokio::test]
    async fn test_line_sink_appends_newline() {
        let sink = LineSink::new(Vec::<u8>::new());
        sink.deliver("hello").await.unwrap();
        sink.deliver("").await.unwrap();

        assert_eq!(sink.into_inner(), b"hello\n\n".to_vec());
    }

    #[tokio::test]
    async fn test_line_sink_keeps_concurrent_lines_whole() {
        let sink = Arc::new(LineSink::new(Vec::<u8>::new()));
        let first = "a".repeat(64 * 1024);
        let second = "b".repeat(64 * 1024);

        let (a, b) = tokio::join!(sink.deliver(&first), sink.deliver(&second));
        a.unwrap();
        b.unwrap();

        let sink = Arc::try_unwrap(sink).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&first.as_str()));
        assert!(lines.contains(&second.as_str()));
    }

    #[tokio::test]
    async fn test_stdout_sink_accepts_payload() {
        assert!(StdoutSink::stdout().deliver("{\"event\":\"test\"}").await.is_ok());
    }
}
