//! Control bar module
//!
//! This module owns the show/hide behavior of the control overlay, gates
//! user input while media is loading, translates keyboard and pointer input
//! into playback commands and relays host media events to the child widgets.

mod controller;
mod events;
mod state;
mod style;
mod timer;
mod widget;

pub use controller::{
    ControlBarBuilder, ControlBarController, CLICK_SUPPRESS_WINDOW, SEEK_STEP_SECS, VOLUME_STEP,
};
pub use events::{ControlEvent, EventKind, Key, KeyEvent};
pub use state::{Lifecycle, VisibilityPhase, VisibilityState};
pub use style::build_stylesheet;
pub use timer::{Clock, DebounceTimer, ManualClock, SystemClock};
pub use widget::{
    Children, ClarityItem, NoWidgets, PlayState, PointerEvents, Widget, WidgetFactory, WidgetKind,
};

/// Playback state and commands exposed by the host player
pub trait HostPlayer {
    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Seek to a position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Media duration in seconds
    fn duration(&self) -> f64;

    /// Volume level (0.0 to 1.0)
    fn volume(&self) -> f64;

    /// Set the volume level
    ///
    /// # Arguments
    ///
    /// * `volume` - Volume level, already clamped to 0.0..=1.0 by the caller
    fn set_volume(&mut self, volume: f64);

    fn paused(&self) -> bool;
}

/// Rendering surface of the control overlay
///
/// The controller owns two elements: the outer container and the inner
/// wrapper that slides down when the bar hides.
pub trait OverlaySurface {
    /// Rendered height of the wrapper in pixels
    fn wrap_height(&self) -> f64;

    /// Set the wrapper's bottom offset in pixels (0 = fully on screen)
    fn set_wrap_bottom(&mut self, bottom: f64);

    /// Toggle the container's visibility without affecting layout
    fn set_visible(&mut self, visible: bool);

    /// Toggle the container's display (block / none)
    fn set_displayed(&mut self, displayed: bool);

    /// Install a stylesheet for the overlay
    fn inject_stylesheet(&mut self, css: &str);
}

/// Host configuration shared with the controller at init time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Whether the host asked for native controls. Taken over by the
    /// controller during `inited`.
    pub controls: bool,
}

/// Two-way binding for the host's "controls" property
///
/// The host routes reads and writes of its controls flag through this
/// bridge instead of storing the flag itself.
pub trait ControlsBridge {
    fn get_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}
