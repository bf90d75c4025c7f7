//! The Tailwind button widget.
//!
//! [`Button`] owns an immutable [`ButtonConfig`] and one piece of transient
//! state: whether the pointer is over it. Everything visual comes from
//! [`resolve`], computed once per hover state when the button is built.
//!
//! # Interaction
//!
//! - Pointer enter/leave switches between [`HoverState::Idle`] and
//!   [`HoverState::Hovered`] and starts a [`HoverTransition`]
//! - A left press followed by a left release inside the button activates it
//! - Releasing Space or Enter activates it
//! - [`Button::click`] activates it programmatically
//!
//! Each activation emits [`activated`](Button::activated) once, which runs the
//! configured action.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use tailwind_button::prelude::*;
//!
//! let clicks = Arc::new(AtomicU32::new(0));
//! let counter = clicks.clone();
//! let mut button = Button::new(
//!     ButtonConfig::new("Premium", move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .with_icon("crown.fill")
//!     .with_size(ButtonSize::Large)
//!     .with_color(ColorFamily::Amber),
//! );
//! button.set_geometry(Rect::new(0.0, 0.0, 160.0, 47.0));
//!
//! button.handle_event(&ButtonEvent::Enter);
//! button.handle_event(&ButtonEvent::left_press(10.0, 10.0));
//! button.handle_event(&ButtonEvent::left_release(10.0, 10.0));
//! button.handle_event(&ButtonEvent::Leave);
//!
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::time::Instant;

use tailwind_button_core::Signal;
use tailwind_button_core::logging::targets;
use tailwind_button_render::{Rect, Renderer, Size};
use tailwind_button_style::{ButtonStyle, ResolvedAttributes, resolve};

use crate::animation::HoverTransition;
use crate::config::ButtonConfig;
use crate::events::{ButtonEvent, MouseButton};
use crate::hover::HoverState;
use crate::view::ButtonView;

/// A Tailwind-styled push button.
pub struct Button {
    config: ButtonConfig,
    /// Attributes for [`HoverState::Idle`].
    idle: ResolvedAttributes,
    /// Attributes for [`HoverState::Hovered`].
    hovered: ResolvedAttributes,
    hover: HoverState,
    /// A left press landed inside, or an activation key went down, and has
    /// not been released yet.
    pressed: bool,
    transition: HoverTransition,
    geometry: Rect,

    /// Emitted once per activation.
    activated: Signal<()>,
    /// Emitted with the new value when the hover state changes.
    hover_changed: Signal<bool>,
}

impl Button {
    /// Create a button. The configured action is connected to
    /// [`activated`](Self::activated).
    pub fn new(config: ButtonConfig) -> Self {
        let style = *config.style();
        let activated = Signal::new();
        let action = config.action().clone();
        activated.connect(move |_| action());

        Self {
            idle: resolve(&style, false),
            hovered: resolve(&style, true),
            config,
            hover: HoverState::Idle,
            pressed: false,
            transition: HoverTransition::new(),
            geometry: Rect::default(),
            activated,
            hover_changed: Signal::new(),
        }
    }

    /// Replace the hover transition, e.g. to change its duration.
    pub fn with_transition(mut self, transition: HoverTransition) -> Self {
        self.transition = transition;
        self.transition.snap(self.hover.blend_target());
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        self.config.text()
    }

    pub fn icon(&self) -> Option<&str> {
        self.config.icon()
    }

    pub fn style(&self) -> &ButtonStyle {
        self.config.style()
    }

    /// The precomputed attributes for a hover state.
    pub fn attributes(&self, state: HoverState) -> &ResolvedAttributes {
        match state {
            HoverState::Idle => &self.idle,
            HoverState::Hovered => &self.hovered,
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The rect the button occupies in its parent's coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the rect the button occupies. Pointer positions in events are
    /// checked against its size.
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    fn contains_local(&self, x: f32, y: f32) -> bool {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
            .contains((x, y).into())
    }

    /// Natural size for a label measuring `label_size`.
    pub fn preferred_size(&self, label_size: Size) -> Size {
        ButtonView::new(self.text(), self.icon(), self.idle).preferred_size(label_size)
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the hover state, starting a transition at the current time.
    ///
    /// Returns `true` if the state changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        self.set_hovered_at(hovered, Instant::now())
    }

    /// Set the hover state, starting a transition at `now`.
    ///
    /// Returns `true` if the state changed.
    pub fn set_hovered_at(&mut self, hovered: bool, now: Instant) -> bool {
        let state = HoverState::from(hovered);
        if state == self.hover {
            return false;
        }

        self.hover = state;
        self.transition.retarget(state.blend_target(), now);
        tracing::debug!(
            target: targets::BUTTON,
            text = self.text(),
            state = %state,
            "hover state changed"
        );
        self.hover_changed.emit(hovered);
        true
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle an input event at the current time.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_event(&mut self, event: &ButtonEvent) -> bool {
        self.handle_event_at(event, Instant::now())
    }

    /// Handle an input event, timing any hover transition from `now`.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_event_at(&mut self, event: &ButtonEvent, now: Instant) -> bool {
        match *event {
            ButtonEvent::Enter => self.set_hovered_at(true, now),
            ButtonEvent::Leave => self.set_hovered_at(false, now),
            ButtonEvent::MousePress { button, local_pos } => {
                if button != MouseButton::Left || !self.contains_local(local_pos.x, local_pos.y) {
                    return false;
                }
                self.pressed = true;
                true
            }
            ButtonEvent::MouseRelease { button, local_pos } => {
                if button != MouseButton::Left || !self.pressed {
                    return false;
                }
                self.pressed = false;

                // Only click if we're still over the button
                if self.contains_local(local_pos.x, local_pos.y) {
                    self.click();
                }
                true
            }
            ButtonEvent::KeyPress { key, is_repeat } => {
                if !key.activates() {
                    return false;
                }
                // Auto-repeat never starts a press
                if !is_repeat {
                    self.pressed = true;
                }
                true
            }
            ButtonEvent::KeyRelease { key } => {
                if !key.activates() {
                    return false;
                }
                self.pressed = false;
                self.click();
                true
            }
        }
    }

    /// Activate the button programmatically.
    pub fn click(&self) {
        tracing::debug!(target: targets::BUTTON, text = self.text(), "button activated");
        self.activated.emit(());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The attributes to draw at `now`, blended by the hover transition.
    pub fn frame_at(&self, now: Instant) -> ResolvedAttributes {
        let amount = self.transition.amount_at(now);
        ResolvedAttributes::interpolate(&self.idle, &self.hovered, amount)
    }

    /// The attributes to draw now.
    pub fn frame(&self) -> ResolvedAttributes {
        self.frame_at(Instant::now())
    }

    /// Check if a hover transition is still running at `now`. Hosts keep
    /// scheduling repaints while this holds.
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.transition.is_running_at(now)
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    /// The view tree at `now`.
    pub fn view_at(&self, now: Instant) -> ButtonView {
        ButtonView::new(self.text(), self.icon(), self.frame_at(now))
    }

    /// The view tree now.
    pub fn view(&self) -> ButtonView {
        self.view_at(Instant::now())
    }

    /// Paint into the button's geometry as it looks at `now`.
    pub fn paint_at<R: Renderer>(&self, renderer: &mut R, label_size: Size, now: Instant) {
        let _span = tracing::trace_span!(target: targets::BUTTON, "paint", text = self.text())
            .entered();
        self.view_at(now).paint(renderer, self.geometry, label_size);
    }

    /// Paint into the button's geometry as it looks now.
    pub fn paint<R: Renderer>(&self, renderer: &mut R, label_size: Size) {
        self.paint_at(renderer, label_size, Instant::now());
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted once per activation.
    pub fn activated(&self) -> &Signal<()> {
        &self.activated
    }

    /// Signal emitted when the pointer enters (`true`) or leaves (`false`).
    pub fn hover_changed(&self) -> &Signal<bool> {
        &self.hover_changed
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text())
            .field("icon", &self.icon())
            .field("style", self.style())
            .field("hover", &self.hover)
            .field("pressed", &self.pressed)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);
