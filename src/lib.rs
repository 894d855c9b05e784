//! Text-input and clipboard façade over pluggable platform backends.
//!
//! [`input::TextInputContext`] tracks which window text input targets and
//! where IME UI should anchor, forwards activation and selection access
//! to a [`backend::PlatformBackend`], and re-broadcasts committed
//! characters and composition text to registered listeners.

pub mod backend;
pub mod input;

pub use backend::{BackendError, PlatformBackend};
pub use input::{InputEvent, ListenerId, Rectangle, TextInputContext, WindowHandle};
