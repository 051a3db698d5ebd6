//! Transient UI state owned by the controller

use std::fmt;

/// Visibility and input gating flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    /// Mirrors the host's "controls" flag
    pub show: bool,

    /// Keyboard and click input is ignored while set
    pub disabled: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            show: false,
            disabled: true,
        }
    }
}

impl VisibilityState {
    /// Update `disabled`, only while the controls are shown.
    ///
    /// Returns whether the flag was written.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        if !self.show {
            return false;
        }
        self.disabled = disabled;
        true
    }
}

/// Where the bar is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Shown,

    /// Hide timer armed, bar still on screen
    Hiding,
    Hidden,
}

impl fmt::Display for VisibilityPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VisibilityPhase::Shown => "shown",
            VisibilityPhase::Hiding => "hiding",
            VisibilityPhase::Hidden => "hidden",
        };
        f.write_str(name)
    }
}

/// Host-driven lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifecycle {
    Created,
    Initialized,
    Ready,
    Destroyed,
}
