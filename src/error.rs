use thiserror::Error;

/// Errors that can occur while piping data to or from the clipboard
#[derive(Error, Debug)]
pub enum ClpError {
    #[error("STDIN reading error: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("Not enough memory for {size} bytes")]
    OutOfMemory { size: usize },

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("STDOUT writing error: {0}")]
    OutputWrite(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClpError>;
