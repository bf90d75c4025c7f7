//! Core systems for the Tailwind button crates.
//!
//! This crate provides the pieces shared by every layer of the workspace:
//!
//! - **Signal/Slot System**: [`Signal`] delivers button activations to
//!   connected callbacks
//! - **Logging**: `tracing` target names for filtering by subsystem
//!
//! # Example
//!
//! ```
//! use tailwind_button_core::Signal;
//!
//! let clicked = Signal::<()>::new();
//! clicked.connect(|_| println!("clicked"));
//! assert_eq!(clicked.emit(()), 1);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
