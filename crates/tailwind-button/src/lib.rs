//! Tailwind Button - a Tailwind-styled push button component.
//!
//! This is the umbrella crate that re-exports all public APIs. The
//! [`Button`] widget pairs an immutable [`ButtonConfig`] with a hover state,
//! resolves its look through [`style::resolve`], and paints through any
//! [`render::Renderer`].
//!
//! # Example
//!
//! ```
//! use tailwind_button::prelude::*;
//! use tailwind_button::render::DisplayList;
//!
//! let mut button = Button::new(
//!     ButtonConfig::new("Continue", || println!("continue"))
//!         .with_icon("arrow.right")
//!         .with_style(VisualStyle::Outline)
//!         .with_color(ColorFamily::Emerald),
//! );
//! button.set_geometry(Rect::new(0.0, 0.0, 140.0, 37.0));
//!
//! let mut list = DisplayList::new();
//! button.paint(&mut list, Size::new(64.0, 17.0));
//! assert!(!list.is_empty());
//! ```

pub use tailwind_button_core::*;

/// Geometry, paint and renderer abstractions.
pub mod render {
    pub use tailwind_button_render::*;
}

/// Palette and style resolution.
pub mod style {
    pub use tailwind_button_style::*;
}

pub mod animation;

mod button;
mod config;
mod error;
mod events;
mod hover;
mod view;

pub use button::Button;
pub use config::{Action, ButtonConfig, ButtonSheet, ButtonSpec};
pub use error::{Error, Result};
pub use events::{ButtonEvent, Key, MouseButton};
pub use hover::HoverState;
pub use view::{ButtonLayout, ButtonView, IconNode, LabelNode};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::{Easing, HoverTransition};
    pub use crate::{
        Button, ButtonConfig, ButtonEvent, ButtonSheet, ButtonSpec, HoverState, Key, MouseButton,
    };
    pub use tailwind_button_core::Signal;
    pub use tailwind_button_render::{Color, Point, Rect, Renderer, Size};
    pub use tailwind_button_style::{
        ButtonSize, ButtonStyle, ColorFamily, PaletteColor, ResolvedAttributes, Shade,
        VisualStyle, resolve,
    };
}
