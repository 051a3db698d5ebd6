//! Child widgets composed into the control bar
//!
//! Widgets are implemented outside this crate. Every command has a no-op
//! default so a widget only implements what it supports, and the registry
//! hands out `Option`s so a missing widget is never an error.

use crate::utils::config::ControlConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Names of the widgets the controller knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetKind {
    Play,
    ProgressBar,
    ProgressTime,
    Volume,
    Clarity,
    PlaybackRate,
    Screen,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::Play,
        WidgetKind::ProgressBar,
        WidgetKind::ProgressTime,
        WidgetKind::Volume,
        WidgetKind::Clarity,
        WidgetKind::PlaybackRate,
        WidgetKind::Screen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Play => "play",
            WidgetKind::ProgressBar => "progressBar",
            WidgetKind::ProgressTime => "progressTime",
            WidgetKind::Volume => "volume",
            WidgetKind::Clarity => "clarity",
            WidgetKind::PlaybackRate => "playbackRate",
            WidgetKind::Screen => "screen",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State shown by the play button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Play,
    Pause,
}

/// Pointer interaction mode of the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// Seeking by pointer is allowed
    Auto,

    /// Pointer input ignored, used until the duration is known
    None,
}

/// One entry of the clarity (quality) menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityItem {
    /// Label shown in the menu
    pub name: String,

    /// Source for this quality level
    pub src: String,

    /// Marks the entry selected when the list is built
    #[serde(default)]
    pub default: bool,
}

/// Command interface of a child widget
///
/// All methods default to doing nothing.
pub trait Widget {
    /// Called once after the controller finished its own `inited`
    fn inited(&mut self) {}

    /// Refresh from host state (progress position, volume level)
    fn update(&mut self) {}

    /// Refresh the total duration display
    fn update_total(&mut self) {}

    /// Refresh the elapsed time display
    fn update_pass(&mut self) {}

    /// Refresh the buffered range
    fn progress(&mut self) {}

    fn change_state(&mut self, _state: PlayState) {}

    fn change_pointer_event(&mut self, _mode: PointerEvents) {}

    /// Perform the widget's primary action
    fn click(&mut self) {}

    fn init_text_list(&mut self, _list: &[ClarityItem]) {}

    /// Distance in pixels from the top of the control wrapper to the top of
    /// this widget. Only meaningful for the progress bar.
    fn offset_top(&self) -> f64 {
        0.0
    }

    fn destroy(&mut self) {}
}

/// Registry of the widgets built for one controller
#[derive(Default)]
pub struct Children {
    widgets: BTreeMap<WidgetKind, Box<dyn Widget>>,
}

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, kind: WidgetKind, widget: Box<dyn Widget>) -> Self {
        self.insert(kind, widget);
        self
    }

    /// Register a widget, returning the one it replaced
    pub fn insert(&mut self, kind: WidgetKind, widget: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        self.widgets.insert(kind, widget)
    }

    pub fn contains(&self, kind: WidgetKind) -> bool {
        self.widgets.contains_key(&kind)
    }

    pub fn get(&self, kind: WidgetKind) -> Option<&dyn Widget> {
        self.widgets.get(&kind).map(|w| w.as_ref())
    }

    /// Run `f` against the widget if it is registered
    pub fn with_widget<F>(&mut self, kind: WidgetKind, f: F) -> bool
    where
        F: FnOnce(&mut dyn Widget),
    {
        match self.widgets.get_mut(&kind) {
            Some(widget) => {
                f(widget.as_mut());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub(crate) fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(WidgetKind, &mut dyn Widget),
    {
        for (kind, widget) in self.widgets.iter_mut() {
            f(*kind, widget.as_mut());
        }
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.widgets.keys()).finish()
    }
}

/// Builds the children for a controller
pub trait WidgetFactory {
    fn create(&self, config: &ControlConfig) -> Children;
}

impl<F> WidgetFactory for F
where
    F: Fn(&ControlConfig) -> Children,
{
    fn create(&self, config: &ControlConfig) -> Children {
        self(config)
    }
}

/// Factory producing no widgets
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWidgets;

impl WidgetFactory for NoWidgets {
    fn create(&self, _config: &ControlConfig) -> Children {
        Children::new()
    }
}
