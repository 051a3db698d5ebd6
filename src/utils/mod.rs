//! Utility module for the control bar
//!
//! This module provides common utilities used throughout the crate:
//! - Error handling with a custom error type
//! - Configuration management
//! - Small numeric helpers

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{BarShowByMouse, ControlConfig};
pub use error::{ControlBarError, Result};

/// Load the control bar configuration from the standard locations
pub fn load_config() -> Result<ControlConfig> {
    ControlConfig::load()
}

/// Format a position in seconds for display
///
/// Returns "HH:MM:SS" or "MM:SS" for positions under an hour. Negative
/// and non-finite values render as "00:00".
pub fn format_seconds(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
