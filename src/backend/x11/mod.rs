//! X11 backend — reference adapter for the text-input façade.
//!
//! Uses one `RustConnection` for window queries and `xclip` for the
//! CLIPBOARD and PRIMARY selections. Core X11 has no IME activation
//! protocol or screen keyboard, so activation and the input rectangle are
//! tracked per window in memory for the input-method layer that consumes
//! them.

pub mod selection;

use std::collections::{HashMap, HashSet};

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, Atom, Window};
use x11rb::rust_connection::RustConnection;

use selection::{Selection, Xclip};

use super::{BackendError, PlatformBackend};
use crate::input::{Rectangle, WindowHandle};

/// Connection settings for [`X11Backend`].
#[derive(Debug, Clone)]
pub struct X11Config {
    /// Display name (`:0`, `host:1.0`); `None` uses `$DISPLAY`.
    pub display: Option<String>,
    /// Program used for selection access.
    pub xclip_program: String,
}

impl Default for X11Config {
    fn default() -> Self {
        Self {
            display: None,
            xclip_program: "xclip".to_string(),
        }
    }
}

/// X11 implementation of [`PlatformBackend`].
pub struct X11Backend {
    conn: RustConnection,
    root: Window,
    /// `_NET_ACTIVE_WINDOW` atom (for focus queries).
    net_active_window: Atom,
    xclip: Xclip,
    active: HashSet<WindowHandle>,
    rectangles: HashMap<WindowHandle, Rectangle>,
}

impl X11Backend {
    /// Connect to the display and intern the atoms the backend needs.
    pub fn connect(config: X11Config) -> Result<Self, BackendError> {
        let (conn, screen_num) = RustConnection::connect(config.display.as_deref())
            .map_err(|e| BackendError::Display(format!("X11 connect failed: {e}")))?;

        let root = conn.setup().roots[screen_num].root;

        let net_active_window = xproto::intern_atom(&conn, false, b"_NET_ACTIVE_WINDOW")
            .map_err(|e| BackendError::Display(format!("intern_atom: {e}")))?
            .reply()
            .map_err(|e| BackendError::Display(format!("intern_atom reply: {e}")))?
            .atom;

        tracing::debug!(
            screen = screen_num,
            root = format_args!("0x{root:08x}"),
            "X11Backend: connected"
        );

        Ok(Self {
            conn,
            root,
            net_active_window,
            xclip: Xclip::new(config.xclip_program, config.display),
            active: HashSet::new(),
            rectangles: HashMap::new(),
        })
    }

    /// The window the window manager reports as focused, if any.
    pub fn active_window(&self) -> Result<Option<WindowHandle>, BackendError> {
        let reply = xproto::get_property(
            &self.conn,
            false,
            self.root,
            self.net_active_window,
            xproto::AtomEnum::WINDOW,
            0,
            1,
        )
        .map_err(|e| BackendError::Display(format!("get_property _NET_ACTIVE_WINDOW: {e}")))?
        .reply()
        .map_err(|e| BackendError::Display(format!("get_property reply: {e}")))?;

        let window = reply.value32().and_then(|mut values| values.next());
        Ok(window.filter(|&xid| xid != 0).map(WindowHandle::from))
    }

    /// Last rectangle forwarded for `window`.
    pub fn text_input_rectangle(&self, window: WindowHandle) -> Option<Rectangle> {
        self.rectangles.get(&window).copied()
    }
}

impl PlatformBackend for X11Backend {
    fn is_text_input_active(&self, window: WindowHandle) -> Result<bool, BackendError> {
        Ok(self.active.contains(&window))
    }

    fn start_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError> {
        self.active.insert(window);
        tracing::debug!(%window, "X11Backend: text input started");
        Ok(())
    }

    fn stop_text_input(&mut self, window: WindowHandle) -> Result<(), BackendError> {
        self.active.remove(&window);
        tracing::debug!(%window, "X11Backend: text input stopped");
        Ok(())
    }

    fn is_screen_keyboard_shown(&self, _window: WindowHandle) -> Result<bool, BackendError> {
        Ok(false)
    }

    fn set_text_input_rectangle(
        &mut self,
        window: WindowHandle,
        rect: Rectangle,
    ) -> Result<(), BackendError> {
        tracing::debug!(%window, ?rect, "X11Backend: input rectangle");
        self.rectangles.insert(window, rect);
        Ok(())
    }

    fn has_clipboard_text(&self) -> Result<bool, BackendError> {
        self.xclip.has_text(Selection::Clipboard)
    }

    fn clipboard_text(&self) -> Result<String, BackendError> {
        self.xclip.read(Selection::Clipboard)
    }

    fn set_clipboard_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.xclip.write(Selection::Clipboard, text)
    }

    fn has_primary_selection_text(&self) -> Result<bool, BackendError> {
        self.xclip.has_text(Selection::Primary)
    }

    fn primary_selection_text(&self) -> Result<String, BackendError> {
        self.xclip.read(Selection::Primary)
    }

    fn set_primary_selection_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.xclip.write(Selection::Primary, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_env_display_and_xclip() {
        let config = X11Config::default();
        assert_eq!(config.display, None);
        assert_eq!(config.xclip_program, "xclip");
    }

    #[test]
    fn connect_to_missing_display_fails() {
        let config = X11Config {
            display: Some(":4242".into()),
            ..X11Config::default()
        };
        assert!(matches!(
            X11Backend::connect(config),
            Err(BackendError::Display(_))
        ));
    }
}
