//! Value types shared by the façade and backends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of the window text input is associated with.
///
/// The façade never interprets the value. X11 backends store the XID
/// here; other backends may store a pointer-sized native handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

impl WindowHandle {
    /// No window. This is the initial handle of every context.
    pub const NULL: Self = Self(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for WindowHandle {
    fn from(xid: u32) -> Self {
        Self(u64::from(xid))
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Region of the window where text is being entered, in client-area
/// coordinates. IME candidate windows anchor to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A notification raised by a backend, for backends that queue input
/// before handing it to the context in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A committed character, as a codepoint.
    Character(u32),
    /// In-progress composition text. `start` and `length` delimit the
    /// selection (or cursor, when `length` is 0) within `text`.
    Composition {
        text: String,
        start: usize,
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handle_is_null() {
        assert!(WindowHandle::default().is_null());
        assert_eq!(WindowHandle::default(), WindowHandle::NULL);
        assert!(!WindowHandle(0x1e00007).is_null());
    }

    #[test]
    fn handle_from_xid() {
        assert_eq!(WindowHandle::from(0x1e00007u32), WindowHandle(0x1e00007));
    }

    #[test]
    fn handle_display_is_hex() {
        assert_eq!(WindowHandle(0x1e00007).to_string(), "0x01e00007");
        assert_eq!(WindowHandle::NULL.to_string(), "0x00000000");
    }

    #[test]
    fn rectangles_compare_by_value() {
        let a = Rectangle::new(10, 20, 200, 24);
        let b = Rectangle {
            x: 10,
            y: 20,
            width: 200,
            height: 24,
        };
        assert_eq!(a, b);
        assert_ne!(a, Rectangle::new(10, 20, 200, 25));
        assert_eq!(Rectangle::default(), Rectangle::new(0, 0, 0, 0));
    }
}
