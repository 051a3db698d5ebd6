//! Events delivered to the control bar
//!
//! Host media events, pointer events scoped to the control area and raw
//! input events are folded into a single `ControlEvent` enum. `EventKind`
//! is the payload-free tag, used for subscriptions and name lookup.

use std::fmt;
use std::str::FromStr;

use crate::utils::error::ControlBarError;

/// Payload-free tag of a `ControlEvent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    LoadStart,
    CanPlay,
    Play,
    Pause,
    DurationChange,
    TimeUpdate,
    Progress,
    VolumeChange,
    MouseEnter,
    MouseMove,
    MouseLeave,
    KeyDown,
    Click,
    DblClick,
}

impl EventKind {
    /// Every event the controller subscribes to
    pub const ALL: [EventKind; 15] = [
        EventKind::Load,
        EventKind::LoadStart,
        EventKind::CanPlay,
        EventKind::Play,
        EventKind::Pause,
        EventKind::DurationChange,
        EventKind::TimeUpdate,
        EventKind::Progress,
        EventKind::VolumeChange,
        EventKind::MouseEnter,
        EventKind::MouseMove,
        EventKind::MouseLeave,
        EventKind::KeyDown,
        EventKind::Click,
        EventKind::DblClick,
    ];

    /// Name the host uses for this event. Pointer events over the control
    /// area carry the `c_` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Load => "load",
            EventKind::LoadStart => "loadstart",
            EventKind::CanPlay => "canplay",
            EventKind::Play => "play",
            EventKind::Pause => "pause",
            EventKind::DurationChange => "durationchange",
            EventKind::TimeUpdate => "timeupdate",
            EventKind::Progress => "progress",
            EventKind::VolumeChange => "volumechange",
            EventKind::MouseEnter => "c_mouseenter",
            EventKind::MouseMove => "c_mousemove",
            EventKind::MouseLeave => "c_mouseleave",
            EventKind::KeyDown => "keydown",
            EventKind::Click => "click",
            EventKind::DblClick => "dblclick",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = ControlBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ControlBarError::InvalidInput(format!("unknown event '{}'", s)))
    }
}

/// Keys the control bar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Left,
    Up,
    Right,
    Down,
}

impl Key {
    /// Map a DOM `keyCode`
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            32 => Some(Key::Space),
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            _ => None,
        }
    }
}

/// A keyboard event together with its default/propagation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: u32,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn key(&self) -> Option<Key> {
        Key::from_code(self.key_code)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// An event delivered to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// New media source assigned
    Load,
    LoadStart,
    CanPlay,
    Play,
    Pause,
    DurationChange,
    TimeUpdate,

    /// Buffered range changed
    Progress,
    VolumeChange,
    MouseEnter,
    MouseMove,
    MouseLeave,
    KeyDown(KeyEvent),
    Click,
    DblClick,
}

impl ControlEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ControlEvent::Load => EventKind::Load,
            ControlEvent::LoadStart => EventKind::LoadStart,
            ControlEvent::CanPlay => EventKind::CanPlay,
            ControlEvent::Play => EventKind::Play,
            ControlEvent::Pause => EventKind::Pause,
            ControlEvent::DurationChange => EventKind::DurationChange,
            ControlEvent::TimeUpdate => EventKind::TimeUpdate,
            ControlEvent::Progress => EventKind::Progress,
            ControlEvent::VolumeChange => EventKind::VolumeChange,
            ControlEvent::MouseEnter => EventKind::MouseEnter,
            ControlEvent::MouseMove => EventKind::MouseMove,
            ControlEvent::MouseLeave => EventKind::MouseLeave,
            ControlEvent::KeyDown(_) => EventKind::KeyDown,
            ControlEvent::Click => EventKind::Click,
            ControlEvent::DblClick => EventKind::DblClick,
        }
    }

    /// Build a payload-free event from its kind. `KeyDown` needs a key code
    /// and yields `None`.
    pub fn from_kind(kind: EventKind) -> Option<Self> {
        Some(match kind {
            EventKind::Load => ControlEvent::Load,
            EventKind::LoadStart => ControlEvent::LoadStart,
            EventKind::CanPlay => ControlEvent::CanPlay,
            EventKind::Play => ControlEvent::Play,
            EventKind::Pause => ControlEvent::Pause,
            EventKind::DurationChange => ControlEvent::DurationChange,
            EventKind::TimeUpdate => ControlEvent::TimeUpdate,
            EventKind::Progress => ControlEvent::Progress,
            EventKind::VolumeChange => ControlEvent::VolumeChange,
            EventKind::MouseEnter => ControlEvent::MouseEnter,
            EventKind::MouseMove => ControlEvent::MouseMove,
            EventKind::MouseLeave => ControlEvent::MouseLeave,
            EventKind::KeyDown => return None,
            EventKind::Click => ControlEvent::Click,
            EventKind::DblClick => ControlEvent::DblClick,
        })
    }

    pub fn key_down(key_code: u32) -> Self {
        ControlEvent::KeyDown(KeyEvent::new(key_code))
    }
}
