//! Line-ending transcoding between Unix and DOS conventions.
//!
//! The transform is memoryless: every input byte maps to zero, one or two
//! output bytes independently of its neighbours, so it can be applied to a
//! stream split at arbitrary points.

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// How `\r` and `\n` are rewritten while copying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Copy bytes unchanged
    #[default]
    AsIs,
    /// Expand `\n` into `\r\n`
    UnixToDos,
    /// Collapse `\r\n` into `\n`
    DosToUnix,
}

impl ConversionMode {
    /// Largest number of output bytes a single input byte can produce.
    pub const MAX_EXPANSION: usize = 2;

    /// Lazily transcode a whole byte slice.
    pub fn apply(self, input: &[u8]) -> impl Iterator<Item = u8> + '_ {
        input.iter().flat_map(move |&byte| transcode(byte, self))
    }
}

/// Output of transcoding a single byte: up to two bytes, yielded in order
#[derive(Debug, Clone)]
pub struct Transcoded {
    bytes: [u8; ConversionMode::MAX_EXPANSION],
    pos: usize,
    len: usize,
}

impl Transcoded {
    fn empty() -> Self {
        Self {
            bytes: [0; ConversionMode::MAX_EXPANSION],
            pos: 0,
            len: 0,
        }
    }

    fn one(byte: u8) -> Self {
        Self {
            bytes: [byte, 0],
            pos: 0,
            len: 1,
        }
    }

    fn two(first: u8, second: u8) -> Self {
        Self {
            bytes: [first, second],
            pos: 0,
            len: 2,
        }
    }
}

impl Iterator for Transcoded {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos < self.len {
            let byte = self.bytes[self.pos];
            self.pos += 1;
            Some(byte)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Transcoded {}

/// Transcode one input byte under `mode`.
///
/// Any `\r` is dropped in both converting modes, including one that is not
/// followed by `\n`. `UnixToDos` re-inserts it in front of every `\n`.
pub fn transcode(byte: u8, mode: ConversionMode) -> Transcoded {
    match (mode, byte) {
        (ConversionMode::AsIs, _) => Transcoded::one(byte),
        (_, CR) => Transcoded::empty(),
        (ConversionMode::UnixToDos, LF) => Transcoded::two(CR, LF),
        _ => Transcoded::one(byte),
    }
}
