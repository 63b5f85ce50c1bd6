//! # Clp
//!
//! Copy data from and/or to the system clipboard as part of a pipeline.
//!
//! ## Features
//!
//! - `... | clp` captures standard input of any length into the clipboard
//! - `clp | ...` writes the clipboard contents to standard output
//! - Optional Unix/DOS line-ending conversion in either direction
//! - Unicode or plain single-byte text clipboard formats
//!
//! ## Example
//!
//! ```no_run
//! use clp::{copy_stdin_to_clipboard, ConversionMode, Options};
//!
//! let options = Options {
//!     mode: ConversionMode::UnixToDos,
//!     ..Options::default()
//! };
//! copy_stdin_to_clipboard(options).unwrap();
//! ```

pub mod buffer;
pub mod chunk;
pub mod clipboard;
pub mod error;
pub mod format;
pub mod pipe;
pub mod transcode;

pub use buffer::FinalBuffer;
pub use chunk::{ChunkedAccumulator, SealedChunks, CHUNK_SIZE, READ_SIZE};
pub use clipboard::{Clipboard, SystemClipboard};
pub use error::{ClpError, Result};
pub use format::ClipboardFormat;
pub use pipe::{capture, emit};
pub use transcode::{transcode, ConversionMode};

use std::io::{self, IsTerminal};

/// Settings for a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: ConversionMode,
    pub format: ClipboardFormat,
}

/// Which way data flows in this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Standard input into the clipboard
    Capture,
    /// Clipboard to standard output
    Emit,
}

impl Direction {
    /// Capture when standard input is piped or redirected, emit otherwise.
    pub fn detect() -> Self {
        Self::for_stdin(io::stdin().is_terminal())
    }

    fn for_stdin(is_terminal: bool) -> Self {
        if is_terminal {
            Direction::Emit
        } else {
            Direction::Capture
        }
    }
}

/// Copy all of standard input to the system clipboard
pub fn copy_stdin_to_clipboard(options: Options) -> Result<usize> {
    capture(io::stdin().lock(), options, SystemClipboard::open)
}

/// Write the system clipboard contents to standard output
pub fn paste_clipboard_to_stdout(options: Options) -> Result<usize> {
    emit(io::stdout().lock(), options, SystemClipboard::open)
}
