//! In-process backend — selections and activation held in memory.
//!
//! For headless hosts (tests, servers driving a virtual UI) that have no
//! windowing system but still want the façade's semantics.

use std::collections::{HashMap, HashSet};

use super::{BackendError, PlatformBackend};
use crate::input::{Rectangle, WindowHandle};

/// Backend whose clipboard, primary selection and IME state live in
/// plain fields. An empty buffer counts as "no text".
#[derive(Debug, Default)]
pub struct MemoryBackend {
    clipboard: String,
    primary: String,
    active: HashSet<WindowHandle>,
    rectangles: HashMap<WindowHandle, Rectangle>,
    /// Emulate a screen keyboard that is shown while text input is active.
    screen_keyboard: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that reports a screen keyboard for every window with
    /// active text input, the way touch platforms behave.
    pub fn with_screen_keyboard() -> Self {
        Self {
            screen_keyboard: true,
            ..Self::default()
        }
    }

    /// Last rectangle the façade forwarded for `window`.
    pub fn text_input_rectangle(&self, window: WindowHandle) -> Option<Rectangle> {
        self.rectangles.get(&window).copied()
    }
}

impl PlatformBackend for MemoryBackend {
    fn is_text_input_active(&self, window: WindowHandle) -> Result<bool, BackendError> {
        Ok(self.active.contains(&window))
    }

    fn start_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError> {
        self.active.insert(window);
        Ok(())
    }

    fn stop_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError> {
        self.active.remove(&window);
        Ok(())
    }

    fn is_screen_keyboard_shown(&self, window: WindowHandle) -> Result<bool, BackendError> {
        Ok(self.screen_keyboard && self.active.contains(&window))
    }

    fn set_text_input_rectangle(
        &mut self,
        window: WindowHandle,
        rect: Rectangle,
    ) -> Result<(), BackendError> {
        self.rectangles.insert(window, rect);
        Ok(())
    }

    fn has_clipboard_text(&self) -> Result<bool, BackendError> {
        Ok(!self.clipboard.is_empty())
    }

    fn clipboard_text(&self) -> Result<String, BackendError> {
        Ok(self.clipboard.clone())
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.clipboard = text.to_string();
        Ok(())
    }

    fn has_primary_selection_text(&self) -> Result<bool, BackendError> {
        Ok(!self.primary.is_empty())
    }

    fn primary_selection_text(&self) -> Result<String, BackendError> {
        Ok(self.primary.clone())
    }

    fn set_primary_selection_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.primary = text.to_string();
        Ok(())
    }
}
