//! Input events a host delivers to a button.
//!
//! The host owns OS event dispatch. It translates whatever it receives into
//! [`ButtonEvent`]s addressed to one button, with pointer positions relative
//! to the button's top-left corner.

use tailwind_button_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keys a button reacts to. Everything else arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Check if releasing this key activates a focused button.
    #[inline]
    pub fn activates(self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// An input event addressed to a single button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonEvent {
    /// The pointer moved onto the button.
    Enter,
    /// The pointer left the button.
    Leave,
    /// A mouse button went down.
    MousePress {
        button: MouseButton,
        /// Position relative to the button's top-left corner.
        local_pos: Point,
    },
    /// A mouse button came up.
    MouseRelease {
        button: MouseButton,
        /// Position relative to the button's top-left corner.
        local_pos: Point,
    },
    /// A key went down while the button had focus.
    KeyPress { key: Key, is_repeat: bool },
    /// A key came up while the button had focus.
    KeyRelease { key: Key },
}

impl ButtonEvent {
    /// Left mouse press at a local position.
    pub fn left_press(x: f32, y: f32) -> Self {
        Self::MousePress {
            button: MouseButton::Left,
            local_pos: Point::new(x, y),
        }
    }

    /// Left mouse release at a local position.
    pub fn left_release(x: f32, y: f32) -> Self {
        Self::MouseRelease {
            button: MouseButton::Left,
            local_pos: Point::new(x, y),
        }
    }

    /// Key press that is not an auto-repeat.
    pub fn key_press(key: Key) -> Self {
        Self::KeyPress {
            key,
            is_repeat: false,
        }
    }

    /// Key release.
    pub fn key_release(key: Key) -> Self {
        Self::KeyRelease { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(Key::Space.activates());
        assert!(Key::Enter.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Other.activates());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            ButtonEvent::left_press(3.0, 4.0),
            ButtonEvent::MousePress {
                button: MouseButton::Left,
                local_pos: Point::new(3.0, 4.0),
            }
        );
        assert_eq!(
            ButtonEvent::key_press(Key::Enter),
            ButtonEvent::KeyPress {
                key: Key::Enter,
                is_repeat: false,
            }
        );
    }
}
