//! Location prompt over a line-based reader and a writer

use application::{error::ApplicationError, ports::LocationPromptPort};
use async_trait::async_trait;
use domain::Location;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout},
    sync::Mutex,
};

const SELECTION_PROMPT: &str = "Please select location: ";

/// Prompt reading selections from `R` and writing listings to `W`
#[derive(Debug)]
pub struct StreamPrompt<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl StreamPrompt<BufReader<Stdin>, Stdout> {
    /// Prompt on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> StreamPrompt<R, W> {
    /// Create a prompt over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }
}

fn io_error(err: &std::io::Error) -> ApplicationError {
    ApplicationError::Configuration(format!("terminal I/O failed: {err}"))
}

/// Numbered listing, one location per line, starting at 1
pub fn format_listing(locations: &[Location]) -> String {
    locations
        .iter()
        .enumerate()
        .map(|(index, location)| format!("{}. {}\n", index + 1, location.name()))
        .collect()
}

#[async_trait]
impl<R, W> LocationPromptPort for StreamPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&self, locations: &[Location]) -> Result<(), ApplicationError> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(format_listing(locations).as_bytes())
            .await
            .map_err(|e| io_error(&e))?;
        writer.flush().await.map_err(|e| io_error(&e))
    }

    async fn read_selection(&self) -> Result<String, ApplicationError> {
        {
            let mut writer = self.writer.lock().await;
            writer
                .write_all(SELECTION_PROMPT.as_bytes())
                .await
                .map_err(|e| io_error(&e))?;
            writer.flush().await.map_err(|e| io_error(&e))?;
        }

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| io_error(&e))?;
        if read == 0 {
            return Err(ApplicationError::Configuration(
                "input closed before a location was selected".to_string(),
            ));
        }

        Ok(line)
    }
}
