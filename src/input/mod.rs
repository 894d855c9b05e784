//! Text-input façade — window association, IME anchoring, clipboard
//! access, and re-broadcast of backend input notifications.
//!
//! A [`TextInputContext`] owns one [`PlatformBackend`] and two listener
//! registries. Application code configures it through getters and
//! setters; the backend (or whatever pumps its events) feeds it
//! notifications through [`TextInputContext::dispatch_text_input`] and
//! [`TextInputContext::dispatch_text_editing`].
//!
//! Dispatch borrows the context mutably, so listeners cannot subscribe
//! or unsubscribe while a broadcast is running. A listener that panics
//! aborts the rest of that broadcast; the registry is untouched and
//! later broadcasts reach every listener again.

mod listeners;
mod types;

pub use listeners::{ListenerId, Listeners};
pub use types::{InputEvent, Rectangle, WindowHandle};

use crate::backend::{BackendError, PlatformBackend};

/// Callback receiving one committed codepoint.
pub type TextInputListener = dyn FnMut(u32);

/// Callback receiving in-progress composition text, selection start and
/// selection length.
pub type TextEditingListener = dyn FnMut(&str, usize, usize);

/// Text-input state for one application, bound to one backend.
pub struct TextInputContext<B> {
    backend: B,
    window: WindowHandle,
    /// Last rectangle the backend accepted.
    input_rectangle: Rectangle,
    text_input: Listeners<TextInputListener>,
    text_editing: Listeners<TextEditingListener>,
}

impl<B: PlatformBackend> TextInputContext<B> {
    /// Create a context with no window, a zero input rectangle and no
    /// listeners.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            window: WindowHandle::NULL,
            input_rectangle: Rectangle::default(),
            text_input: Listeners::new(),
            text_editing: Listeners::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // -- Window association --

    pub fn window_handle(&self) -> WindowHandle {
        self.window
    }

    /// Target subsequent backend calls at `window`. Not validated.
    pub fn set_window_handle(&mut self, window: WindowHandle) {
        self.window = window;
    }

    // -- Activation --

    pub fn is_text_input_active(&self) -> Result<bool, BackendError> {
        self.backend.is_text_input_active(self.window)
    }

    /// Enable or disable text input for the current window.
    ///
    /// The backend is only called on a transition: setting the state it
    /// already reports is a no-op, so a screen keyboard is never re-shown
    /// by a redundant enable.
    pub fn set_text_input_active(&mut self, active: bool) -> Result<(), BackendError> {
        if self.is_text_input_active()? == active {
            return Ok(());
        }

        if active {
            tracing::debug!(window = %self.window, "starting text input");
            self.backend.start_text_input(self.window)
        } else {
            tracing::debug!(window = %self.window, "stopping text input");
            self.backend.stop_text_input(self.window)
        }
    }

    pub fn is_screen_keyboard_shown(&self) -> Result<bool, BackendError> {
        self.backend.is_screen_keyboard_shown(self.window)
    }

    // -- IME anchoring --

    pub fn input_rectangle(&self) -> Rectangle {
        self.input_rectangle
    }

    /// Move the IME anchor region.
    ///
    /// Forwarded only when `rect` differs from the cached value. The cache
    /// is updated after the backend accepts it, so a failed forward is
    /// retried by the next set with the same value.
    pub fn set_input_rectangle(&mut self, rect: Rectangle) -> Result<(), BackendError> {
        if rect == self.input_rectangle {
            return Ok(());
        }

        tracing::debug!(window = %self.window, ?rect, "forwarding input rectangle");
        self.backend.set_text_input_rectangle(self.window, rect)?;
        self.input_rectangle = rect;
        Ok(())
    }

    // -- Selections --

    /// Clipboard contents, or an empty string when it holds no text.
    pub fn clipboard_text(&self) -> Result<String, BackendError> {
        if self.backend.has_clipboard_text()? {
            self.backend.clipboard_text()
        } else {
            Ok(String::new())
        }
    }

    /// Always forwarded, so writing `""` clears the clipboard.
    pub fn set_clipboard_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.backend.set_clipboard_text(text)
    }

    /// Primary-selection contents, or an empty string when it holds no
    /// text.
    pub fn primary_selection_text(&self) -> Result<String, BackendError> {
        if self.backend.has_primary_selection_text()? {
            self.backend.primary_selection_text()
        } else {
            Ok(String::new())
        }
    }

    pub fn set_primary_selection_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.backend.set_primary_selection_text(text)
    }
}

impl<B> TextInputContext<B> {
    // -- Subscriptions --

    /// Subscribe to committed characters. Not raised for non-character
    /// keys; key repeat raises it once per repeat.
    pub fn on_text_input(&mut self, listener: impl FnMut(u32) + 'static) -> ListenerId {
        self.text_input.subscribe(Box::new(listener))
    }

    pub fn remove_text_input_listener(&mut self, id: ListenerId) -> bool {
        self.text_input.unsubscribe(id)
    }

    /// Subscribe to in-progress composition text, so draft text can be
    /// drawn before the IME commits it.
    pub fn on_text_editing(
        &mut self,
        listener: impl FnMut(&str, usize, usize) + 'static,
    ) -> ListenerId {
        self.text_editing.subscribe(Box::new(listener))
    }

    pub fn remove_text_editing_listener(&mut self, id: ListenerId) -> bool {
        self.text_editing.unsubscribe(id)
    }

    // -- Backend notifications --

    /// Broadcast a committed codepoint to every text-input listener in
    /// registration order.
    pub fn dispatch_text_input(&mut self, codepoint: u32) {
        tracing::trace!(
            codepoint,
            listeners = self.text_input.len(),
            "dispatching text input"
        );
        for listener in self.text_input.iter_mut() {
            listener(codepoint);
        }
    }

    /// Broadcast composition text to every text-editing listener in
    /// registration order.
    pub fn dispatch_text_editing(&mut self, text: &str, start: usize, length: usize) {
        tracing::trace!(
            start,
            length,
            listeners = self.text_editing.len(),
            "dispatching text editing"
        );
        for listener in self.text_editing.iter_mut() {
            listener(text, start, length);
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Character(codepoint) => self.dispatch_text_input(codepoint),
            InputEvent::Composition {
                text,
                start,
                length,
            } => self.dispatch_text_editing(&text, start, length),
        }
    }
}
