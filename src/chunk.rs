//! Chunked accumulation of an input stream of unknown length.
//!
//! Input is transcoded into a chain of fixed-capacity chunks. Only the tail
//! chunk is ever written; once sealed a chunk is read-only until it is
//! drained into the final buffer.

use crate::buffer::allocate;
use crate::error::{ClpError, Result};
use crate::transcode::{transcode, ConversionMode};
use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

/// Capacity of a single chunk
pub const CHUNK_SIZE: usize = 0x10000;

/// Largest batch read from the input at once
pub const READ_SIZE: usize = CHUNK_SIZE >> 6;

/// Fixed-capacity block of transcoded bytes
#[derive(Debug)]
pub struct Chunk {
    data: Vec<u8>,
    capacity: usize,
}

impl Chunk {
    fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            data: allocate(capacity)?,
            capacity,
        })
    }

    fn push(&mut self, byte: u8) {
        assert!(
            self.data.len() < self.capacity,
            "chunk overflow: capacity {} exhausted",
            self.capacity
        );
        self.data.push(byte);
    }

    fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Number of bytes actually used
    pub fn filled(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Append-only chain of chunks filled from an input stream
#[derive(Debug)]
pub struct ChunkedAccumulator {
    mode: ConversionMode,
    chunk_size: usize,
    read_size: usize,
    sealed: VecDeque<Chunk>,
    sealed_total: usize,
    tail: Chunk,
}

impl ChunkedAccumulator {
    pub fn new(mode: ConversionMode) -> Result<Self> {
        Self::with_sizes(mode, CHUNK_SIZE, READ_SIZE)
    }

    /// Create an accumulator with a custom chunk geometry.
    ///
    /// # Panics
    /// If `read_size` is zero or a chunk cannot hold the worst-case expansion
    /// of two read batches.
    pub fn with_sizes(mode: ConversionMode, chunk_size: usize, read_size: usize) -> Result<Self> {
        assert!(read_size > 0, "read size must be positive");
        assert!(
            chunk_size > read_size * ConversionMode::MAX_EXPANSION,
            "chunk size {} cannot absorb read batches of {}",
            chunk_size,
            read_size
        );

        Ok(Self {
            mode,
            chunk_size,
            read_size,
            sealed: VecDeque::new(),
            sealed_total: 0,
            tail: Chunk::new(chunk_size)?,
        })
    }

    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Bytes stored so far, sealed chunks and tail included
    pub fn len(&self) -> usize {
        self.sealed_total + self.tail.filled()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sealed chunks followed by the tail
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.sealed.iter().chain(std::iter::once(&self.tail))
    }

    /// Transcode `input` into the chain, one read batch at a time.
    pub fn append(&mut self, input: &[u8]) -> Result<()> {
        for batch in input.chunks(self.read_size) {
            self.append_batch(batch)?;
        }
        Ok(())
    }

    fn append_batch(&mut self, batch: &[u8]) -> Result<()> {
        // Every byte of the batch may expand, so the tail must hold twice its length.
        assert!(
            self.tail.remaining() >= batch.len() * ConversionMode::MAX_EXPANSION,
            "batch of {} bytes would overflow a chunk with {} bytes free",
            batch.len(),
            self.tail.remaining()
        );

        for &byte in batch {
            for out in transcode(byte, self.mode) {
                self.tail.push(out);
            }
        }

        if self.tail.filled() >= self.chunk_size - self.read_size * ConversionMode::MAX_EXPANSION {
            self.seal_tail()?;
        }
        Ok(())
    }

    fn seal_tail(&mut self) -> Result<()> {
        let next = Chunk::new(self.chunk_size)?;
        let sealed = std::mem::replace(&mut self.tail, next);
        log::debug!(
            "sealed chunk #{} with {} bytes",
            self.sealed.len() + 1,
            sealed.filled()
        );
        self.sealed_total += sealed.filled();
        self.sealed.push_back(sealed);
        Ok(())
    }

    /// Read `reader` to end-of-stream, appending everything.
    ///
    /// Returns the number of raw bytes read.
    ///
    /// # Errors
    /// - `InputRead` if the reader fails for any reason other than an interrupt
    /// - `OutOfMemory` if a new chunk cannot be allocated
    pub fn fill_from<R: Read>(&mut self, mut reader: R) -> Result<usize> {
        let mut batch = vec![0u8; self.read_size];
        let mut total = 0;

        loop {
            let count = match reader.read(&mut batch) {
                Ok(0) => break,
                Ok(count) => count,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ClpError::InputRead(e)),
            };
            total += count;
            self.append_batch(&batch[..count])?;
        }

        log::debug!("read {} bytes from input, stored {}", total, self.len());
        Ok(total)
    }

    /// Seal the tail and hand the whole chain over.
    pub fn finish(self) -> SealedChunks {
        let mut chunks = self.sealed;
        let total = self.sealed_total + self.tail.filled();
        chunks.push_back(self.tail);
        SealedChunks { chunks, total }
    }
}

/// Chain of read-only chunks with a known total size
#[derive(Debug)]
pub struct SealedChunks {
    chunks: VecDeque<Chunk>,
    total: usize,
}

impl SealedChunks {
    /// Total bytes across all chunks
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Remove the head chunk, transferring its ownership to the caller.
    pub fn pop_front(&mut self) -> Option<Chunk> {
        self.chunks.pop_front()
    }
}
