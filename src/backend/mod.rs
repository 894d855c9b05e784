//! Platform backend abstraction — pluggable text-input and selection adapters.
//!
//! The façade in [`crate::input`] never talks to the windowing system
//! directly. Every IME, screen-keyboard and clipboard operation goes
//! through a [`PlatformBackend`], which the application injects when it
//! creates a [`TextInputContext`](crate::input::TextInputContext).

pub mod memory;
pub mod x11;

pub use memory::MemoryBackend;

use crate::input::{Rectangle, WindowHandle};

/// Errors returned by platform backends.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Display connection or protocol failure (e.g. `$DISPLAY` unset,
    /// atom interning failed).
    #[error("display: {0}")]
    Display(String),

    /// Clipboard or primary-selection access failed (e.g. xclip not
    /// found, non-zero exit).
    #[error("selection: {0}")]
    Selection(String),

    /// The backend has no way to perform the operation.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

/// Windowing-system integration consumed by the text-input façade.
///
/// Window-scoped operations receive the context's current
/// [`WindowHandle`]. Handles are opaque: backends decide what a handle
/// they don't know about means.
///
/// Queries take `&self`, everything that changes platform state takes
/// `&mut self`. Calls are synchronous and made from the thread that owns
/// the context.
pub trait PlatformBackend {
    /// Whether text input is currently active for `window`.
    fn is_text_input_active(&self, window: WindowHandle) -> Result<bool, BackendError>;

    /// Begin text input for `window`.
    fn start_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError>;

    /// End text input for `window`.
    fn stop_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError>;

    /// Whether an on-screen keyboard is visible for `window`.
    fn is_screen_keyboard_shown(&self, window: WindowHandle) -> Result<bool, BackendError>;

    /// Anchor IME UI (candidate lists, composition popups) to `rect`,
    /// relative to the client area of `window`.
    fn set_text_input_rectangle(
        &mut self,
        window: WindowHandle,
        rect: Rectangle,
    ) -> Result<(), BackendError>;

    fn has_clipboard_text(&self) -> Result<bool, BackendError>;

    fn clipboard_text(&self) -> Result<String, BackendError>;

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), BackendError>;

    fn has_primary_selection_text(&self) -> Result<bool, BackendError>;

    fn primary_selection_text(&self) -> Result<String, BackendError>;

    fn set_primary_selection_text(&mut self, text: &str) -> Result<(), BackendError>;
}
