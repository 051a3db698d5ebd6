//! Replays a script against a controller in real time

use crate::control::{Clock, ControlBarController, ControlsBridge, VisibilityPhase};
use crate::sim::media::SharedMedia;
use crate::sim::script::{ScriptAction, ScriptStep};
use log::info;
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};

/// Host event loop period
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Clock following tokio's time source, so paused test time drives timers too
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> std::time::Instant {
        Instant::now().into_std()
    }
}

/// Outcome of a simulator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub media_events: usize,
    pub phase_changes: usize,
}

/// Drive `controller` through `steps`, then keep ticking for `linger` so
/// pending timers can fire, and finally destroy the controller.
pub async fn run_script(
    mut controller: ControlBarController,
    media: SharedMedia,
    steps: Vec<ScriptStep>,
    linger: Duration,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let end = steps.last().map(|step| step.at).unwrap_or_default() + linger;
    let mut steps = steps.into_iter().peekable();

    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let start = Instant::now();
    let mut last_tick = start;
    let mut phase = controller.phase();

    loop {
        ticker.tick().await;
        let now = Instant::now();
        let elapsed = now - start;

        media.lock().advance(now - last_tick);
        last_tick = now;

        while let Some(step) = steps.next_if(|step| step.at <= elapsed) {
            summary.steps += 1;
            match step.action {
                ScriptAction::Event(mut event) => {
                    media.lock().apply_external(&event);
                    controller.handle_event(&mut event);
                }
                ScriptAction::Controls(visible) => controller.set_visible(visible),
                ScriptAction::Clarity(list) => controller.update_clarity(&list),
            }
            summary.media_events += dispatch_media_events(&mut controller, &media);
        }

        summary.media_events += dispatch_media_events(&mut controller, &media);
        controller.tick();
        summary.media_events += dispatch_media_events(&mut controller, &media);

        let current = controller.phase();
        if current != phase {
            info!("{:>6}ms bar {} -> {}", elapsed.as_millis(), phase, current);
            summary.phase_changes += 1;
            phase = current;
        }

        if steps.peek().is_none() && elapsed >= end {
            break;
        }
    }

    if phase != VisibilityPhase::Shown {
        info!("Run finished with the bar {}", phase);
    }
    controller.destroy();
    summary
}

/// Forward events raised by the media until none are left
fn dispatch_media_events(controller: &mut ControlBarController, media: &SharedMedia) -> usize {
    let mut dispatched = 0;
    loop {
        // release the lock before dispatching, widgets lock the media too
        let events = media.lock().drain_events();
        if events.is_empty() {
            return dispatched;
        }
        for mut event in events {
            controller.handle_event(&mut event);
            dispatched += 1;
        }
    }
}
