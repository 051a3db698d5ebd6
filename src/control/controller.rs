//! Control bar controller implementation
//!
//! This module provides the `ControlBarController` that owns the overlay's
//! visibility, gates input while media loads, dispatches keyboard and
//! pointer input, and relays host media events to the child widgets.

use crate::control::events::{ControlEvent, Key, KeyEvent};
use crate::control::state::{Lifecycle, VisibilityPhase, VisibilityState};
use crate::control::style::build_stylesheet;
use crate::control::timer::{Clock, DebounceTimer, SystemClock};
use crate::control::widget::{
    Children, ClarityItem, NoWidgets, PlayState, PointerEvents, WidgetFactory, WidgetKind,
};
use crate::control::{ControlsBridge, HostConfig, HostPlayer, OverlaySurface};
use crate::utils::clamp;
use crate::utils::config::ControlConfig;
use crate::utils::error::{ControlBarError, Result};

use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

/// Two clicks closer than this count as a double-click
pub const CLICK_SUPPRESS_WINDOW: Duration = Duration::from_millis(300);

/// Seconds skipped by the left/right arrow keys
pub const SEEK_STEP_SECS: f64 = 10.0;

/// Volume change applied by the up/down arrow keys
pub const VOLUME_STEP: f64 = 0.1;

/// Builder for `ControlBarController`
pub struct ControlBarBuilder {
    host: Box<dyn HostPlayer>,
    surface: Box<dyn OverlaySurface>,
    config: ControlConfig,
    clock: Box<dyn Clock>,
    factory: Box<dyn WidgetFactory>,
}

impl ControlBarBuilder {
    /// Start a builder for the given host and overlay surface
    pub fn new<H, S>(host: H, surface: S) -> Self
    where
        H: HostPlayer + 'static,
        S: OverlaySurface + 'static,
    {
        Self {
            host: Box::new(host),
            surface: Box::new(surface),
            config: ControlConfig::default(),
            clock: Box::new(SystemClock),
            factory: Box::new(NoWidgets),
        }
    }

    pub fn with_config(mut self, config: ControlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_widgets<F: WidgetFactory + 'static>(mut self, factory: F) -> Self {
        self.factory = Box::new(factory);
        self
    }

    /// Validate the configuration and create the controller
    pub fn build(self) -> Result<ControlBarController> {
        self.config.validate()?;

        Ok(ControlBarController {
            hide_delay: self.config.effective_hide_bar_time(),
            config: self.config,
            host: self.host,
            surface: self.surface,
            clock: self.clock,
            factory: self.factory,
            children: Children::new(),
            state: VisibilityState::default(),
            lifecycle: Lifecycle::Created,
            hidden: false,
            hide_timer: DebounceTimer::new(),
            click_timer: DebounceTimer::new(),
            last_click: None,
        })
    }
}

/// Controller for one control bar instance
pub struct ControlBarController {
    config: ControlConfig,

    /// Resolved from the config at build time, zero unless mode is `move`
    hide_delay: Duration,

    host: Box<dyn HostPlayer>,
    surface: Box<dyn OverlaySurface>,
    clock: Box<dyn Clock>,
    factory: Box<dyn WidgetFactory>,
    children: Children,

    state: VisibilityState,
    lifecycle: Lifecycle,

    /// Set once a hide timer fired, cleared by `show_bar`
    hidden: bool,

    hide_timer: DebounceTimer,
    click_timer: DebounceTimer,
    last_click: Option<Instant>,
}

impl ControlBarController {
    pub fn builder<H, S>(host: H, surface: S) -> ControlBarBuilder
    where
        H: HostPlayer + 'static,
        S: OverlaySurface + 'static,
    {
        ControlBarBuilder::new(host, surface)
    }

    /// Host `init` callback
    pub fn init(&mut self, host_config: &HostConfig) -> Result<()> {
        if self.lifecycle != Lifecycle::Created {
            return Err(ControlBarError::Lifecycle(format!(
                "init called in state {:?}",
                self.lifecycle
            )));
        }

        debug!("Control bar init (native controls requested: {})", host_config.controls);
        self.lifecycle = Lifecycle::Initialized;
        Ok(())
    }

    /// Host `inited` callback
    ///
    /// Takes over the host's native controls flag, builds the children and
    /// injects the color stylesheet. The display is only written when the
    /// host asked for controls.
    pub fn inited(&mut self, host_config: &mut HostConfig) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Created | Lifecycle::Initialized => {}
            state => {
                return Err(ControlBarError::Lifecycle(format!(
                    "inited called in state {:?}",
                    state
                )));
            }
        }

        if host_config.controls {
            self.state.show = true;
            host_config.controls = false;
            self.apply_display();
        }

        self.children = self.factory.create(&self.config);
        let css = build_stylesheet(
            self.config.major_color.as_deref(),
            self.config.hover_color.as_deref(),
        );
        self.surface.inject_stylesheet(&css);

        self.children.for_each_mut(|kind, widget| {
            debug!("Initializing {} widget", kind);
            widget.inited();
        });

        self.lifecycle = Lifecycle::Ready;
        info!(
            "Control bar ready: mode={}, hide delay={:?}, widgets={:?}",
            self.config.bar_show_by_mouse, self.hide_delay, self.children
        );
        Ok(())
    }

    /// Host `destroy` callback
    ///
    /// Cancels both timers and destroys every child. Later events and ticks
    /// are ignored.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }

        self.hide_timer.cancel();
        self.click_timer.cancel();

        let mut children = std::mem::take(&mut self.children);
        children.for_each_mut(|kind, widget| {
            debug!("Destroying {} widget", kind);
            widget.destroy();
        });

        self.lifecycle = Lifecycle::Destroyed;
        info!("Control bar destroyed");
    }

    /// Dispatch one event
    pub fn handle_event(&mut self, event: &mut ControlEvent) {
        if self.lifecycle != Lifecycle::Ready {
            debug!("Ignoring {} in state {:?}", event.kind(), self.lifecycle);
            return;
        }

        // deadlines that passed since the last tick fire before the new input
        self.fire_due_timers();

        debug!("Dispatching {}", event.kind());
        match event {
            ControlEvent::Load => self.on_load(),
            ControlEvent::LoadStart => self.disable(true),
            ControlEvent::CanPlay => self.disable(false),
            ControlEvent::Play => {
                self.children
                    .with_widget(WidgetKind::Play, |w| w.change_state(PlayState::Play));
                if self.config.bar_show_by_mouse.is_move() {
                    self.hide_bar();
                }
            }
            ControlEvent::Pause => {
                self.children
                    .with_widget(WidgetKind::Play, |w| w.change_state(PlayState::Pause));
                self.show_bar();
            }
            ControlEvent::MouseEnter => {
                if !self.config.bar_show_by_mouse.is_move() {
                    self.show_bar();
                }
            }
            ControlEvent::MouseMove => self.refresh_on_activity(),
            ControlEvent::MouseLeave => {
                if !self.config.bar_show_by_mouse.is_move() {
                    self.hide_bar();
                }
            }
            ControlEvent::DurationChange => {
                self.children
                    .with_widget(WidgetKind::ProgressTime, |w| w.update_total());
                self.children.with_widget(WidgetKind::ProgressBar, |w| {
                    w.change_pointer_event(PointerEvents::Auto)
                });
            }
            ControlEvent::TimeUpdate => self.progress_update(),
            ControlEvent::Progress => {
                self.children
                    .with_widget(WidgetKind::ProgressBar, |w| w.progress());
            }
            ControlEvent::VolumeChange => {
                self.children.with_widget(WidgetKind::Volume, |w| w.update());
            }
            ControlEvent::KeyDown(key_event) => self.on_key_down(key_event),
            ControlEvent::Click => self.on_click(),
            ControlEvent::DblClick => {
                if !self.state.disabled {
                    self.children.with_widget(WidgetKind::Screen, |w| w.click());
                }
            }
        }
    }

    /// Fire any timers whose deadline has passed
    pub fn tick(&mut self) {
        if self.lifecycle != Lifecycle::Ready {
            return;
        }
        self.fire_due_timers();
    }

    /// Bring the bar on screen, cancelling a pending hide
    pub fn show_bar(&mut self) {
        self.fire_due_hide();
        if self.hide_timer.cancel() {
            debug!("Pending hide cancelled");
        }
        self.surface.set_wrap_bottom(0.0);
        self.surface.set_visible(true);
        self.hidden = false;
    }

    /// Arm the hide timer, replacing any pending one
    pub fn hide_bar(&mut self) {
        self.fire_due_hide();
        let now = self.clock.now();
        self.hide_timer.schedule(now, self.hide_delay);
        debug!("Hide scheduled in {:?}", self.hide_delay);
    }

    /// Gate keyboard and click input. Ignored while the controls are off.
    pub fn disable(&mut self, disabled: bool) {
        if self.state.set_disabled(disabled) {
            debug!("Input {}", if disabled { "disabled" } else { "enabled" });
        }
    }

    /// Replace the clarity menu entries
    ///
    /// `list` must be a JSON array of `{ "name", "src" }` objects. Anything
    /// else is logged and ignored.
    pub fn update_clarity(&mut self, list: &serde_json::Value) {
        match parse_clarity_list(list) {
            Ok(items) => self.update_clarity_list(&items),
            Err(e) => error!("Ignoring clarity update: {}", e),
        }
    }

    pub fn update_clarity_list(&mut self, list: &[ClarityItem]) {
        let delivered = self
            .children
            .with_widget(WidgetKind::Clarity, |w| w.init_text_list(list));
        if !delivered {
            warn!("No clarity widget registered, dropping {} entries", list.len());
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Hide delay after the mode rule was applied
    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn phase(&self) -> VisibilityPhase {
        if self.hidden {
            VisibilityPhase::Hidden
        } else if self.hide_timer.is_pending() {
            VisibilityPhase::Hiding
        } else {
            VisibilityPhase::Shown
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn click_pending(&self) -> bool {
        self.click_timer.is_pending()
    }

    /// Earliest pending timer deadline, for hosts that sleep between ticks
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.hide_timer.deadline(), self.click_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    fn fire_due_timers(&mut self) {
        self.fire_due_hide();
        if self.click_timer.fire_if_due(self.clock.now()) {
            self.fire_single_click();
        }
    }

    fn fire_due_hide(&mut self) {
        if self.hide_timer.fire_if_due(self.clock.now()) {
            self.apply_hidden();
        }
    }

    fn on_load(&mut self) {
        // the host does not emit pause on a source change
        self.show_bar();
        self.progress_update();
        self.children
            .with_widget(WidgetKind::Play, |w| w.change_state(PlayState::Pause));
        self.children
            .with_widget(WidgetKind::ProgressTime, |w| w.update_total());
        self.children.with_widget(WidgetKind::ProgressBar, |w| {
            w.change_pointer_event(PointerEvents::None)
        });
    }

    fn progress_update(&mut self) {
        self.children.with_widget(WidgetKind::ProgressBar, |w| w.update());
        self.children
            .with_widget(WidgetKind::ProgressTime, |w| w.update_pass());
    }

    /// Show then re-arm the hide timer, unless paused or in enter mode
    fn refresh_on_activity(&mut self) {
        if self.host.paused() || self.config.bar_show_by_mouse.is_enter() {
            return;
        }
        self.show_bar();
        self.hide_bar();
    }

    fn on_key_down(&mut self, event: &mut KeyEvent) {
        if self.state.disabled {
            return;
        }
        let Some(key) = event.key() else {
            return;
        };

        event.stop_propagation();
        event.prevent_default();

        match key {
            Key::Space => {
                self.children.with_widget(WidgetKind::Play, |w| w.click());
            }
            Key::Left => {
                let target = self.host.current_time() - SEEK_STEP_SECS;
                self.host.set_current_time(target.max(0.0));
            }
            Key::Right => {
                let target = self.host.current_time() + SEEK_STEP_SECS;
                let duration = self.host.duration();
                self.host.set_current_time(target.min(duration));
            }
            Key::Up => {
                let volume = self.host.volume() + VOLUME_STEP;
                self.host.set_volume(clamp(volume, 0.0, 1.0));
            }
            Key::Down => {
                let volume = self.host.volume() - VOLUME_STEP;
                self.host.set_volume(clamp(volume, 0.0, 1.0));
            }
        }

        self.refresh_on_activity();
    }

    fn on_click(&mut self) {
        let now = self.clock.now();
        let previous = self.last_click.replace(now);

        if let Some(previous) = previous {
            if now.duration_since(previous) < CLICK_SUPPRESS_WINDOW {
                if self.click_timer.cancel() {
                    debug!("Double click, single click suppressed");
                }
                return;
            }
        }

        self.click_timer.schedule(now, CLICK_SUPPRESS_WINDOW);
    }

    fn fire_single_click(&mut self) {
        if self.state.disabled {
            debug!("Single click dropped, input disabled");
            return;
        }
        self.children.with_widget(WidgetKind::Play, |w| w.click());
    }

    fn apply_hidden(&mut self) {
        let height = self.surface.wrap_height();
        // keep the progress bar peeking out when there is one
        let bottom = match self.children.get(WidgetKind::ProgressBar) {
            Some(bar) => bar.offset_top() - height,
            None => -height,
        };
        self.surface.set_wrap_bottom(bottom);
        self.surface.set_visible(false);
        self.hidden = true;
        debug!("Bar hidden (bottom={}px)", bottom);
    }

    fn apply_display(&mut self) {
        self.surface.set_displayed(self.state.show);
    }
}

impl ControlsBridge for ControlBarController {
    fn get_visible(&self) -> bool {
        self.state.show
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.show = visible;
        self.apply_display();
    }
}

fn parse_clarity_list(list: &serde_json::Value) -> Result<Vec<ClarityItem>> {
    if !list.is_array() {
        return Err(ControlBarError::InvalidInput(
            "clarity list must be an array".to_string(),
        ));
    }
    Ok(serde_json::from_value(list.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_clarity_list() {
        let items = parse_clarity_list(&json!([
            { "name": "SD", "src": "sd.mp4" },
            { "name": "HD", "src": "hd.mp4", "default": true }
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[1].default);
    }

    #[test]
    fn test_parse_clarity_list_rejects_non_arrays() {
        for value in [json!(null), json!({ "name": "HD" }), json!("HD"), json!(3)] {
            assert!(matches!(
                parse_clarity_list(&value),
                Err(ControlBarError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_parse_clarity_list_rejects_malformed_entries() {
        assert!(parse_clarity_list(&json!([{ "label": "HD" }])).is_err());
        assert!(parse_clarity_list(&json!([])).unwrap().is_empty());
    }
}
