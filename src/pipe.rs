//! The two transfer directions between a byte stream and the clipboard.
//!
//! Both take an `open` closure acquiring the clipboard. It is called only
//! once all other work that can fail beforehand is done, and the session is
//! dropped right after the single `put` or `get`.

use crate::buffer::FinalBuffer;
use crate::chunk::{ChunkedAccumulator, CHUNK_SIZE, READ_SIZE};
use crate::clipboard::Clipboard;
use crate::error::{ClpError, Result};
use crate::Options;
use std::io::{Read, Write};

/// Copy everything from `reader` into the clipboard.
///
/// Returns the number of bytes placed on the clipboard, terminator excluded.
///
/// # Errors
/// - `InputRead` if reading fails before end-of-stream
/// - `OutOfMemory` if a chunk or the final buffer cannot be allocated
/// - `ClipboardUnavailable` / `ClipboardError` from the clipboard session
///
/// The clipboard is never opened when reading or allocation fails.
pub fn capture<R, C, F>(reader: R, options: Options, open: F) -> Result<usize>
where
    R: Read,
    C: Clipboard,
    F: FnOnce() -> Result<C>,
{
    capture_with_sizes(reader, options, CHUNK_SIZE, READ_SIZE, open)
}

pub(crate) fn capture_with_sizes<R, C, F>(
    reader: R,
    options: Options,
    chunk_size: usize,
    read_size: usize,
    open: F,
) -> Result<usize>
where
    R: Read,
    C: Clipboard,
    F: FnOnce() -> Result<C>,
{
    let mut accumulator = ChunkedAccumulator::with_sizes(options.mode, chunk_size, read_size)?;
    accumulator.fill_from(reader)?;

    let buffer = FinalBuffer::build(accumulator.finish(), options.format)?;
    let len = buffer.content().len();

    let mut clipboard = open()?;
    clipboard.put(buffer)?;
    Ok(len)
}

/// Write the clipboard contents to `writer`.
///
/// An absent format is not an error: nothing is written and `Ok(0)` is
/// returned. Otherwise returns the number of bytes written.
///
/// # Errors
/// - `ClipboardUnavailable` / `ClipboardError` from the clipboard session
/// - `OutputWrite` if writing fails
pub fn emit<W, C, F>(mut writer: W, options: Options, open: F) -> Result<usize>
where
    W: Write,
    C: Clipboard,
    F: FnOnce() -> Result<C>,
{
    let data = {
        let mut clipboard = open()?;
        clipboard.get(options.format)?
    };

    let Some(data) = data else {
        log::debug!("clipboard holds no {:?}", options.format);
        return Ok(0);
    };

    let content = options.format.until_terminator(&data);
    let output: Vec<u8> = options.mode.apply(content).collect();

    writer.write_all(&output).map_err(ClpError::OutputWrite)?;
    writer.flush().map_err(ClpError::OutputWrite)?;
    Ok(output.len())
}
