//! Rendering abstractions for the Tailwind button crates.
//!
//! Buttons never talk to a GPU directly. They describe what to draw in terms
//! of the value types here and push it through the [`Renderer`] trait, which a
//! host toolkit implements on its own backend.
//!
//! # Drawing into a display list
//!
//! ```
//! use tailwind_button_render::{
//!     Color, DisplayList, Paint, Rect, RenderCommand, Renderer, RoundedRect,
//! };
//!
//! let mut list = DisplayList::new();
//! let capsule = RoundedRect::new(Rect::new(0.0, 0.0, 120.0, 44.0), 14.0);
//! list.fill_rounded_rect(capsule, Color::from_rgb8(245, 158, 11));
//!
//! assert_eq!(
//!     list.commands()[0],
//!     RenderCommand::FillRoundedRect {
//!         rect: capsule,
//!         paint: Paint::Solid(Color::from_rgb8(245, 158, 11)),
//!     }
//! );
//! ```
//!
//! # Colors
//!
//! [`Color`] stores premultiplied alpha, so [`Color::lerp`] can blend a flat
//! fill toward [`Color::TRANSPARENT`] without a dark fringe.

mod display_list;
mod paint;
mod renderer;
mod text;
mod types;

pub use display_list::{DisplayList, RenderCommand};
pub use paint::{BoxShadow, GradientStop, LinearGradient, Paint, Stroke};
pub use renderer::Renderer;
pub use text::{Font, FontWeight};
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};
