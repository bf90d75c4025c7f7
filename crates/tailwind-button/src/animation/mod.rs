//! Hover animation support.
//!
//! Buttons blend between their idle and hovered attributes with a
//! [`HoverTransition`], eased by one of the [`Easing`] curves.

mod easing;
mod transition;

pub use easing::{Easing, ease};
pub use transition::{DEFAULT_HOVER_DURATION, HoverTransition};
