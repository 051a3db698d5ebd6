//! Headless simulator
//!
//! Wires the controller to a simulated media element, logging widgets and a
//! logging surface, and replays timed event scripts against it.

mod media;
mod runner;
mod script;
mod widgets;

pub use media::{MediaState, SharedMedia, SimulatedHost};
pub use runner::{run_script, RunSummary, TokioClock, TICK_INTERVAL};
pub use script::{parse_script, ScriptAction, ScriptStep};
pub use widgets::{LoggingSurface, LoggingWidget, SimWidgets};

use crate::control::{ControlBarController, HostConfig};
use crate::utils::config::ControlConfig;
use crate::utils::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Script used when none is given on the command line
pub const DEMO_SCRIPT: &str = r#"
# host asked for controls, media starts loading
0     load
0     loadstart
40    durationchange
80    canplay
200   play
600   c_mousemove
900   key 39
1200  key 38
1500  click
1600  click
1650  dblclick
2000  clarity [{"name": "SD", "src": "sd.mp4"}, {"name": "HD", "src": "hd.mp4", "default": true}]
2100  clarity "HD"
2400  click
3000  pause
3200  key 32
"#;

/// Build a ready controller wired to simulated media
pub fn build_simulation(config: ControlConfig, duration: f64) -> Result<(ControlBarController, SharedMedia)> {
    let media: SharedMedia = Arc::new(Mutex::new(MediaState::new(duration)));

    let mut controller = ControlBarController::builder(SimulatedHost::new(media.clone()), LoggingSurface::default())
        .with_config(config)
        .with_clock(TokioClock)
        .with_widgets(SimWidgets::new(media.clone()))
        .build()?;

    let mut host_config = HostConfig { controls: true };
    controller.init(&host_config)?;
    controller.inited(&mut host_config)?;

    Ok((controller, media))
}
