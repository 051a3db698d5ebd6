//! Logging widgets and surface for the simulator

use crate::control::{
    Children, ClarityItem, OverlaySurface, PlayState, PointerEvents, Widget, WidgetFactory,
    WidgetKind,
};
use crate::sim::media::SharedMedia;
use crate::utils::config::ControlConfig;
use crate::utils::format_seconds;
use log::info;

/// Height of the simulated control wrapper
const WRAP_HEIGHT: f64 = 48.0;

/// Offset of the progress bar inside the wrapper
const PROGRESS_BAR_TOP: f64 = 6.0;

/// Widget that logs every command and forwards clicks to the media
pub struct LoggingWidget {
    kind: WidgetKind,
    media: SharedMedia,
}

impl LoggingWidget {
    pub fn new(kind: WidgetKind, media: SharedMedia) -> Self {
        Self { kind, media }
    }
}

impl Widget for LoggingWidget {
    fn inited(&mut self) {
        info!("[{}] inited", self.kind);
    }

    fn update(&mut self) {
        let media = self.media.lock();
        match self.kind {
            WidgetKind::Volume => info!("[{}] level {:.0}%", self.kind, media.volume * 100.0),
            _ => info!("[{}] position {}", self.kind, format_seconds(media.current_time)),
        }
    }

    fn update_total(&mut self) {
        info!("[{}] total {}", self.kind, format_seconds(self.media.lock().duration));
    }

    fn update_pass(&mut self) {
        info!("[{}] elapsed {}", self.kind, format_seconds(self.media.lock().current_time));
    }

    fn progress(&mut self) {
        info!("[{}] buffered range changed", self.kind);
    }

    fn change_state(&mut self, state: PlayState) {
        info!("[{}] state -> {:?}", self.kind, state);
    }

    fn change_pointer_event(&mut self, mode: PointerEvents) {
        info!("[{}] pointer events -> {:?}", self.kind, mode);
    }

    fn click(&mut self) {
        let mut media = self.media.lock();
        match self.kind {
            WidgetKind::Play => {
                let paused = !media.paused;
                info!("[{}] click -> {}", self.kind, if paused { "pause" } else { "play" });
                media.set_paused(paused);
            }
            WidgetKind::Screen => {
                media.fullscreen = !media.fullscreen;
                info!("[{}] fullscreen {}", self.kind, media.fullscreen);
            }
            _ => info!("[{}] click", self.kind),
        }
    }

    fn init_text_list(&mut self, list: &[ClarityItem]) {
        let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
        info!("[{}] entries {:?}", self.kind, names);
    }

    fn offset_top(&self) -> f64 {
        PROGRESS_BAR_TOP
    }

    fn destroy(&mut self) {
        info!("[{}] destroyed", self.kind);
    }
}

/// Builds one `LoggingWidget` per known kind
#[derive(Clone)]
pub struct SimWidgets {
    media: SharedMedia,
}

impl SimWidgets {
    pub fn new(media: SharedMedia) -> Self {
        Self { media }
    }
}

impl WidgetFactory for SimWidgets {
    fn create(&self, _config: &ControlConfig) -> Children {
        WidgetKind::ALL.into_iter().fold(Children::new(), |children, kind| {
            children.with(kind, Box::new(LoggingWidget::new(kind, self.media.clone())))
        })
    }
}

/// Surface that logs style changes
#[derive(Debug, Default)]
pub struct LoggingSurface {
    pub bottom: f64,
    pub visible: bool,
    pub displayed: bool,
}

impl OverlaySurface for LoggingSurface {
    fn wrap_height(&self) -> f64 {
        WRAP_HEIGHT
    }

    fn set_wrap_bottom(&mut self, bottom: f64) {
        if self.bottom != bottom {
            info!("[surface] bottom {}px", bottom);
        }
        self.bottom = bottom;
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            info!("[surface] visibility {}", if visible { "visible" } else { "hidden" });
        }
        self.visible = visible;
    }

    fn set_displayed(&mut self, displayed: bool) {
        info!("[surface] display {}", if displayed { "block" } else { "none" });
        self.displayed = displayed;
    }

    fn inject_stylesheet(&mut self, css: &str) {
        info!("[surface] stylesheet injected ({} bytes)", css.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::media::MediaState;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_factory_builds_every_widget() {
        let media = Arc::new(Mutex::new(MediaState::new(10.0)));
        let children = SimWidgets::new(media).create(&ControlConfig::default());
        assert_eq!(children.len(), WidgetKind::ALL.len());
    }

    #[test]
    fn test_play_click_toggles_media() {
        let media = Arc::new(Mutex::new(MediaState::new(10.0)));
        let mut play = LoggingWidget::new(WidgetKind::Play, media.clone());

        play.click();
        assert!(!media.lock().paused);
        play.click();
        assert!(media.lock().paused);
    }

    #[test]
    fn test_screen_click_toggles_fullscreen() {
        let media = Arc::new(Mutex::new(MediaState::new(10.0)));
        let mut screen = LoggingWidget::new(WidgetKind::Screen, media.clone());
        screen.click();
        assert!(media.lock().fullscreen);
    }
}
