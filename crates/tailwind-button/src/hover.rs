//! Pointer hover state.

use std::fmt;

/// Whether the pointer is over a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    #[inline]
    pub fn is_hovered(self) -> bool {
        self == HoverState::Hovered
    }

    /// Blend amount this state rests at: 0.0 idle, 1.0 hovered.
    #[inline]
    pub fn blend_target(self) -> f32 {
        match self {
            HoverState::Idle => 0.0,
            HoverState::Hovered => 1.0,
        }
    }
}

impl From<bool> for HoverState {
    fn from(hovered: bool) -> Self {
        if hovered {
            HoverState::Hovered
        } else {
            HoverState::Idle
        }
    }
}

impl fmt::Display for HoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HoverState::Idle => "idle",
            HoverState::Hovered => "hovered",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(HoverState::from(true), HoverState::Hovered);
        assert_eq!(HoverState::from(false), HoverState::Idle);
        assert_eq!(HoverState::default(), HoverState::Idle);
    }

    #[test]
    fn test_blend_target() {
        assert_eq!(HoverState::Idle.blend_target(), 0.0);
        assert_eq!(HoverState::Hovered.blend_target(), 1.0);
        assert!(HoverState::Hovered.is_hovered());
    }
}
