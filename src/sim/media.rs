//! Simulated media element backing the demo host

use crate::control::{ControlEvent, HostPlayer};
use crate::utils::clamp;
use log::debug;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Seconds of playback between two `timeupdate` events
const TIME_UPDATE_INTERVAL: f64 = 0.25;

/// Mutable media state shared by the host, the widgets and the runner
#[derive(Debug, Clone)]
pub struct MediaState {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub paused: bool,
    pub fullscreen: bool,

    /// Events raised by the media, waiting to be dispatched
    pending: VecDeque<ControlEvent>,
    since_time_update: f64,
}

impl MediaState {
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            volume: 0.7,
            paused: true,
            fullscreen: false,
            pending: VecDeque::new(),
            since_time_update: 0.0,
        }
    }

    /// Queue an event for the controller
    pub fn emit(&mut self, event: ControlEvent) {
        self.pending.push_back(event);
    }

    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.pending.drain(..).collect()
    }

    /// Start or stop playback, emitting the matching event
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.emit(if paused {
            ControlEvent::Pause
        } else {
            ControlEvent::Play
        });
    }

    /// Mirror the state change implied by an event injected from a script
    pub fn apply_external(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Load => {
                self.current_time = 0.0;
                self.paused = true;
                self.since_time_update = 0.0;
            }
            ControlEvent::Play => self.paused = false,
            ControlEvent::Pause => self.paused = true,
            _ => {}
        }
    }

    /// Advance the playhead by wall-clock time
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        let step = elapsed.as_secs_f64();
        self.current_time = (self.current_time + step).min(self.duration);
        self.since_time_update += step;

        if self.since_time_update >= TIME_UPDATE_INTERVAL {
            self.since_time_update = 0.0;
            self.emit(ControlEvent::TimeUpdate);
        }

        if self.current_time >= self.duration {
            debug!("End of media reached");
            self.set_paused(true);
        }
    }
}

pub type SharedMedia = Arc<Mutex<MediaState>>;

/// `HostPlayer` over shared simulated media
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    media: SharedMedia,
}

impl SimulatedHost {
    pub fn new(media: SharedMedia) -> Self {
        Self { media }
    }
}

impl HostPlayer for SimulatedHost {
    fn current_time(&self) -> f64 {
        self.media.lock().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut media = self.media.lock();
        media.current_time = clamp(seconds, 0.0, media.duration);
        media.emit(ControlEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        self.media.lock().duration
    }

    fn volume(&self) -> f64 {
        self.media.lock().volume
    }

    fn set_volume(&mut self, volume: f64) {
        let mut media = self.media.lock();
        media.volume = volume;
        media.emit(ControlEvent::VolumeChange);
    }

    fn paused(&self) -> bool {
        self.media.lock().paused
    }
}
