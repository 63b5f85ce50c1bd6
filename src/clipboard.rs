use crate::buffer::FinalBuffer;
use crate::error::{ClpError, Result};
use crate::format::ClipboardFormat;

/// An acquired clipboard, allowing for mocking in tests.
///
/// Acquisition happens when the value is created and release when it is
/// dropped, so a session should live only around a single `put` or `get`.
pub trait Clipboard {
    /// Replace the clipboard contents with `buffer`, clearing every other format.
    fn put(&mut self, buffer: FinalBuffer) -> Result<()>;

    /// Current contents for `format` followed by its terminator, or `None`
    /// when the clipboard holds nothing in that format.
    fn get(&mut self, format: ClipboardFormat) -> Result<Option<Vec<u8>>>;
}

/// System clipboard session using arboard
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn open() -> Result<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ClpError::ClipboardUnavailable(e.to_string()))?;
        log::debug!("clipboard acquired");
        Ok(Self { clipboard })
    }
}

impl Clipboard for SystemClipboard {
    fn put(&mut self, buffer: FinalBuffer) -> Result<()> {
        let text = buffer.format().decode(buffer.content());
        drop(buffer);

        self.clipboard
            .clear()
            .map_err(|e| ClpError::ClipboardError(e.to_string()))?;
        self.clipboard
            .set_text(text)
            .map_err(|e| ClpError::ClipboardError(e.to_string()))
    }

    fn get(&mut self, format: ClipboardFormat) -> Result<Option<Vec<u8>>> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(format.encode_terminated(&text))),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClpError::ClipboardError(e.to_string())),
        }
    }
}

impl Drop for SystemClipboard {
    fn drop(&mut self) {
        log::debug!("clipboard released");
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct State {
        contents: HashMap<ClipboardFormat, Vec<u8>>,
        opened: usize,
        released: usize,
        puts: usize,
    }

    /// Shared in-memory clipboard handing out sessions
    #[derive(Clone, Default)]
    pub(crate) struct MockBackend {
        state: Rc<RefCell<State>>,
        should_fail: bool,
        unavailable: bool,
    }

    impl MockBackend {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_failure() -> Self {
            Self {
                should_fail: true,
                ..Self::default()
            }
        }

        pub(crate) fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub(crate) fn open(&self) -> Result<MockClipboard> {
            if self.unavailable {
                return Err(ClpError::ClipboardUnavailable(
                    "Mock clipboard locked".to_string(),
                ));
            }
            self.state.borrow_mut().opened += 1;
            Ok(MockClipboard {
                state: Rc::clone(&self.state),
                should_fail: self.should_fail,
            })
        }

        /// Store raw data for `format`, terminator included
        pub(crate) fn preload(&self, format: ClipboardFormat, data: &[u8]) {
            self.state
                .borrow_mut()
                .contents
                .insert(format, data.to_vec());
        }

        pub(crate) fn contents(&self, format: ClipboardFormat) -> Option<Vec<u8>> {
            self.state.borrow().contents.get(&format).cloned()
        }

        pub(crate) fn opened(&self) -> usize {
            self.state.borrow().opened
        }

        pub(crate) fn released(&self) -> usize {
            self.state.borrow().released
        }

        pub(crate) fn puts(&self) -> usize {
            self.state.borrow().puts
        }
    }

    pub(crate) struct MockClipboard {
        state: Rc<RefCell<State>>,
        should_fail: bool,
    }

    impl Clipboard for MockClipboard {
        fn put(&mut self, buffer: FinalBuffer) -> Result<()> {
            if self.should_fail {
                return Err(ClpError::ClipboardError(
                    "Mock clipboard failure".to_string(),
                ));
            }
            let mut state = self.state.borrow_mut();
            state.puts += 1;
            state.contents.clear();
            state
                .contents
                .insert(buffer.format(), buffer.into_bytes());
            Ok(())
        }

        fn get(&mut self, format: ClipboardFormat) -> Result<Option<Vec<u8>>> {
            if self.should_fail {
                return Err(ClpError::ClipboardError(
                    "Mock clipboard failure".to_string(),
                ));
            }
            Ok(self.state.borrow().contents.get(&format).cloned())
        }
    }

    impl Drop for MockClipboard {
        fn drop(&mut self) {
            self.state.borrow_mut().released += 1;
        }
    }
}
