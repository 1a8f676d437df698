use std::sync::Mutex;

use crate::{
    core::gateway::ClipboardGateway,
    domain::error::{TranslatorError, TranslatorResult},
};

/// System clipboard through arboard.
///
/// The handle is opened on first use, so a headless session only fails when
/// the clipboard is actually touched.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_handle<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> TranslatorResult<T> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| TranslatorError::clipboard("clipboard lock poisoned"))?;
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().map_err(TranslatorError::clipboard)?);
        }
        match guard.as_mut() {
            Some(clipboard) => f(clipboard).map_err(TranslatorError::clipboard),
            None => Err(TranslatorError::clipboard("clipboard not initialized")),
        }
    }
}

impl ClipboardGateway for SystemClipboard {
    fn get_text(&self) -> TranslatorResult<String> {
        self.with_handle(|clipboard| clipboard.get_text())
    }

    fn set_text(&self, text: &str) -> TranslatorResult<()> {
        let text = text.to_string();
        self.with_handle(move |clipboard| clipboard.set_text(text))
    }
}
