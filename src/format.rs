/// Clipboard content representation being read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipboardFormat {
    /// Wide text, terminated by a two-byte null
    #[default]
    UnicodeText,
    /// Single-byte text, terminated by a one-byte null
    PlainText,
}

impl ClipboardFormat {
    /// Width in bytes of the null code unit ending text in this format.
    pub fn terminator_width(self) -> usize {
        match self {
            ClipboardFormat::UnicodeText => 2,
            ClipboardFormat::PlainText => 1,
        }
    }

    /// Decode clipboard bytes (without terminator) into text for the OS.
    ///
    /// Unicode text is UTF-8 with invalid sequences replaced. Plain text maps
    /// each byte to the code point of the same value.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            ClipboardFormat::UnicodeText => String::from_utf8_lossy(bytes).into_owned(),
            ClipboardFormat::PlainText => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Encode OS text into clipboard bytes followed by the terminator.
    ///
    /// Plain text cannot hold code points above 0xFF; they become `?`.
    pub fn encode_terminated(self, text: &str) -> Vec<u8> {
        let mut bytes = match self {
            ClipboardFormat::UnicodeText => text.as_bytes().to_vec(),
            ClipboardFormat::PlainText => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        };
        bytes.resize(bytes.len() + self.terminator_width(), 0);
        bytes
    }

    /// Bytes preceding the first null code unit.
    ///
    /// Only whole code units at multiples of the terminator width are
    /// considered. Odd-length wide content leaves its terminator off that
    /// grid, so without an aligned null unit a trailing terminator is
    /// stripped instead. Data with neither is returned whole.
    pub fn until_terminator(self, data: &[u8]) -> &[u8] {
        const NULL_UNIT: [u8; 2] = [0; 2];

        let width = self.terminator_width();
        match data
            .chunks_exact(width)
            .position(|unit| unit.iter().all(|&b| b == 0))
        {
            Some(index) => &data[..index * width],
            None => data.strip_suffix(&NULL_UNIT[..width]).unwrap_or(data),
        }
    }
}
