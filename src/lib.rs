//! Auto-hiding control bar for video players
//!
//! The crate is organised as:
//! - `control`: the control bar controller, its events, timers and the
//!   traits the host player, overlay surface and child widgets implement
//! - `sim`: a headless simulator replaying timed event scripts
//! - `utils`: configuration, errors and small helpers

pub mod control;
pub mod sim;
pub mod utils;

pub use control::{ControlBarBuilder, ControlBarController, ControlEvent, ControlsBridge};
pub use utils::{ControlBarError, ControlConfig, Result};
