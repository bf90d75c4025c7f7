//! Logging facilities for the Tailwind button crates.
//!
//! All crates in this workspace log through the `tracing` facade. Library code
//! never installs a subscriber; applications choose one, for example:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tailwind_button=debug,tailwind_button_style=trace")
//!     .init();
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot emission.
    pub const SIGNAL: &str = "tailwind_button_core::signal";
    /// Palette lookups and shade fallbacks.
    pub const PALETTE: &str = "tailwind_button_style::palette";
    /// Attribute resolution.
    pub const RESOLVE: &str = "tailwind_button_style::resolve";
    /// Button interaction: hover changes, activations, transitions.
    pub const BUTTON: &str = "tailwind_button::button";
    /// Button sheet loading.
    pub const CONFIG: &str = "tailwind_button::config";
}
