//! Shared fixtures for the integration tests
//!
//! Fakes record everything into `Arc<Mutex<..>>` state so a test keeps a
//! handle after moving the fake into the controller.

#![allow(dead_code)]

use controlbar::control::{
    Children, ClarityItem, ControlBarController, ControlEvent, HostConfig, HostPlayer, ManualClock,
    OverlaySurface, PlayState, PointerEvents, Widget, WidgetKind,
};
use controlbar::utils::ControlConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub const WRAP_HEIGHT: f64 = 40.0;
pub const PROGRESS_TOP: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub paused: bool,
}

#[derive(Clone)]
pub struct FakeHost(pub Arc<Mutex<HostState>>);

impl HostPlayer for FakeHost {
    fn current_time(&self) -> f64 {
        self.0.lock().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.0.lock().current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.0.lock().duration
    }

    fn volume(&self) -> f64 {
        self.0.lock().volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.0.lock().volume = volume;
    }

    fn paused(&self) -> bool {
        self.0.lock().paused
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceState {
    pub bottom: f64,
    pub visible: bool,
    pub displayed: Option<bool>,
    pub stylesheets: Vec<String>,
}

#[derive(Clone)]
pub struct RecordingSurface(pub Arc<Mutex<SurfaceState>>);

impl OverlaySurface for RecordingSurface {
    fn wrap_height(&self) -> f64 {
        WRAP_HEIGHT
    }

    fn set_wrap_bottom(&mut self, bottom: f64) {
        self.0.lock().bottom = bottom;
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.lock().visible = visible;
    }

    fn set_displayed(&mut self, displayed: bool) {
        self.0.lock().displayed = Some(displayed);
    }

    fn inject_stylesheet(&mut self, css: &str) {
        self.0.lock().stylesheets.push(css.to_string());
    }
}

/// A command received by a widget
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Inited,
    Update,
    UpdateTotal,
    UpdatePass,
    Progress,
    ChangeState(PlayState),
    PointerEvent(PointerEvents),
    Click,
    TextList(Vec<String>),
    Destroy,
}

pub type CallLog = Arc<Mutex<Vec<(WidgetKind, Call)>>>;

pub struct RecordingWidget {
    kind: WidgetKind,
    log: CallLog,
}

impl RecordingWidget {
    fn record(&self, call: Call) {
        self.log.lock().push((self.kind, call));
    }
}

impl Widget for RecordingWidget {
    fn inited(&mut self) {
        self.record(Call::Inited);
    }

    fn update(&mut self) {
        self.record(Call::Update);
    }

    fn update_total(&mut self) {
        self.record(Call::UpdateTotal);
    }

    fn update_pass(&mut self) {
        self.record(Call::UpdatePass);
    }

    fn progress(&mut self) {
        self.record(Call::Progress);
    }

    fn change_state(&mut self, state: PlayState) {
        self.record(Call::ChangeState(state));
    }

    fn change_pointer_event(&mut self, mode: PointerEvents) {
        self.record(Call::PointerEvent(mode));
    }

    fn click(&mut self) {
        self.record(Call::Click);
    }

    fn init_text_list(&mut self, list: &[ClarityItem]) {
        self.record(Call::TextList(list.iter().map(|item| item.name.clone()).collect()));
    }

    fn offset_top(&self) -> f64 {
        PROGRESS_TOP
    }

    fn destroy(&mut self) {
        self.record(Call::Destroy);
    }
}

/// Controller plus handles on every fake
pub struct Harness {
    pub controller: ControlBarController,
    pub clock: ManualClock,
    pub host: Arc<Mutex<HostState>>,
    pub surface: Arc<Mutex<SurfaceState>>,
    pub calls: CallLog,
}

impl Harness {
    /// Ready controller with every widget and the controls turned on
    pub fn new(config: ControlConfig) -> Self {
        Self::with_widgets(config, &WidgetKind::ALL, true)
    }

    pub fn with_widgets(config: ControlConfig, kinds: &[WidgetKind], controls: bool) -> Self {
        let clock = ManualClock::new();
        let host = Arc::new(Mutex::new(HostState {
            current_time: 0.0,
            duration: 100.0,
            volume: 0.5,
            paused: true,
        }));
        let surface = Arc::new(Mutex::new(SurfaceState::default()));
        let calls: CallLog = Arc::default();

        let kinds = kinds.to_vec();
        let log = calls.clone();
        let factory = move |_: &ControlConfig| {
            kinds.iter().fold(Children::new(), |children, kind| {
                children.with(
                    *kind,
                    Box::new(RecordingWidget {
                        kind: *kind,
                        log: log.clone(),
                    }),
                )
            })
        };

        let mut controller = ControlBarController::builder(FakeHost(host.clone()), RecordingSurface(surface.clone()))
            .with_config(config)
            .with_clock(clock.clone())
            .with_widgets(factory)
            .build()
            .expect("valid config");

        let mut host_config = HostConfig { controls };
        controller.init(&host_config).expect("init");
        controller.inited(&mut host_config).expect("inited");
        calls.lock().clear();

        Self {
            controller,
            clock,
            host,
            surface,
            calls,
        }
    }

    /// Advance the clock and let due timers fire
    pub fn advance(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.controller.tick();
    }

    /// Deliver `canplay` so keyboard and click input is accepted
    pub fn enable_input(&mut self) {
        self.controller.handle_event(&mut ControlEvent::CanPlay);
        assert!(!self.controller.is_disabled());
    }

    pub fn dispatch(&mut self, mut event: ControlEvent) -> ControlEvent {
        self.controller.handle_event(&mut event);
        event
    }

    pub fn take_calls(&self) -> Vec<(WidgetKind, Call)> {
        std::mem::take(&mut *self.calls.lock())
    }

    pub fn calls_for(&self, kind: WidgetKind) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn clicks(&self, kind: WidgetKind) -> usize {
        self.calls_for(kind).iter().filter(|call| **call == Call::Click).count()
    }

    pub fn set_paused(&self, paused: bool) {
        self.host.lock().paused = paused;
    }

    pub fn surface_visible(&self) -> bool {
        self.surface.lock().visible
    }
}
