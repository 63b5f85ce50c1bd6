use crate::chunk::SealedChunks;
use crate::error::{ClpError, Result};
use crate::format::ClipboardFormat;

/// Allocate an empty buffer able to hold exactly `size` bytes.
///
/// # Errors
/// `OutOfMemory` carrying `size` when the allocation cannot be satisfied.
pub fn allocate(size: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| ClpError::OutOfMemory { size })?;
    Ok(buffer)
}

/// Single contiguous clipboard buffer: content followed by a null terminator
#[derive(Debug)]
pub struct FinalBuffer {
    bytes: Vec<u8>,
    format: ClipboardFormat,
}

impl FinalBuffer {
    /// Copy every chunk into one right-sized buffer and terminate it.
    ///
    /// Chunks are released one by one as soon as they have been copied.
    pub fn build(mut chunks: SealedChunks, format: ClipboardFormat) -> Result<Self> {
        let size = chunks
            .total()
            .checked_add(format.terminator_width())
            .ok_or(ClpError::OutOfMemory { size: usize::MAX })?;
        let mut bytes = allocate(size)?;

        while let Some(chunk) = chunks.pop_front() {
            bytes.extend_from_slice(chunk.as_slice());
        }
        bytes.resize(size, 0);

        log::debug!("built {} byte buffer for {:?}", size, format);
        Ok(Self { bytes, format })
    }

    pub fn format(&self) -> ClipboardFormat {
        self.format
    }

    /// Content without the terminator
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - self.format.terminator_width()]
    }

    /// Content and terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
