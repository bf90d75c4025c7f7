//! Tailwind palette and button style resolution.
//!
//! This crate holds the two pure pieces of the button component:
//!
//! - **Palette**: the fixed 22 x 10 table of [`ColorFamily`] by [`Shade`],
//!   see [`palette`]
//! - **Resolver**: [`resolve`] turns a [`ButtonStyle`] and a hover flag into
//!   [`ResolvedAttributes`]
//!
//! Neither can fail. Parsing options from text can, and reports [`Error`].
//!
//! # Example
//!
//! ```
//! use tailwind_button_style::prelude::*;
//!
//! let style = ButtonStyle::new()
//!     .with_size(ButtonSize::Small)
//!     .with_style(VisualStyle::Outline)
//!     .with_color("slate".parse()?);
//!
//! let hovered = resolve(&style, true);
//! assert_eq!(hovered.hover_scale, 1.03);
//! assert_eq!(hovered.background, Background::Transparent);
//! # Ok::<(), tailwind_button_style::Error>(())
//! ```

pub mod palette;
pub mod resolve;

mod error;

pub use error::{Error, Result};
pub use palette::{ColorFamily, PaletteColor, Rgb, Shade};
pub use resolve::{
    Background, Border, ButtonSize, ButtonStyle, ResolvedAttributes, VisualStyle, resolve,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::palette::{ColorFamily, PaletteColor, Rgb, Shade};
    pub use crate::resolve::{
        Background, Border, ButtonSize, ButtonStyle, ResolvedAttributes, VisualStyle, resolve,
    };
}
