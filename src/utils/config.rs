//! Configuration management for the control bar
//!
//! This module handles loading and managing control bar configuration
//! from config files and environment variables.

use crate::utils::error::{ControlBarError, IntoControlBarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default delay before the bar retracts, in milliseconds
pub const DEFAULT_HIDE_BAR_TIME_MS: u64 = 2000;

/// Upper bound accepted for `hideBarTime`
const MAX_HIDE_BAR_TIME_MS: u64 = 60 * 60 * 1000;

/// Which mouse interaction drives the show/hide behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BarShowByMouse {
    /// Show on any movement, hide after `hideBarTime` of inactivity
    Move,

    /// Show on enter, hide immediately on leave
    Enter,

    /// Unrecognized mode, kept verbatim. Behaves as "not move".
    Other(String),
}

impl BarShowByMouse {
    pub fn is_move(&self) -> bool {
        matches!(self, BarShowByMouse::Move)
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, BarShowByMouse::Enter)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BarShowByMouse::Move => "move",
            BarShowByMouse::Enter => "enter",
            BarShowByMouse::Other(value) => value,
        }
    }
}

impl Default for BarShowByMouse {
    fn default() -> Self {
        BarShowByMouse::Move
    }
}

impl From<String> for BarShowByMouse {
    fn from(value: String) -> Self {
        match value.as_str() {
            "move" => BarShowByMouse::Move,
            "enter" => BarShowByMouse::Enter,
            _ => BarShowByMouse::Other(value),
        }
    }
}

impl From<BarShowByMouse> for String {
    fn from(mode: BarShowByMouse) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for BarShowByMouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control bar configuration
///
/// Keys follow the plugin option names, so a TOML file reads
/// `hideBarTime = 3000` / `barShowByMouse = "enter"`. Missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlConfig {
    /// Delay in milliseconds before the bar hides (move mode only)
    pub hide_bar_time: u64,

    /// Mouse interaction that shows the bar
    pub bar_show_by_mouse: BarShowByMouse,

    /// Primary icon/progress color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_color: Option<String>,

    /// Icon color on hover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<String>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            hide_bar_time: DEFAULT_HIDE_BAR_TIME_MS,
            bar_show_by_mouse: BarShowByMouse::Move,
            major_color: None,
            hover_color: None,
        }
    }
}

impl ControlConfig {
    /// Hide delay actually used by the controller.
    ///
    /// Only `move` honours `hideBarTime`; every other mode hides at once.
    pub fn effective_hide_bar_time(&self) -> Duration {
        if self.bar_show_by_mouse.is_move() {
            Duration::from_millis(self.hide_bar_time)
        } else {
            Duration::ZERO
        }
    }

    /// Load configuration from the standard locations
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. System config file (/etc/controlbar/config.toml on Linux)
    /// 3. User config file (~/.config/controlbar/config.toml on Linux)
    /// 4. Environment variables (CONTROLBAR_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config = Self::read_file(&system_path)?;
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config = Self::read_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load and validate a single TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).config_err("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).config_err("Failed to serialize config")?;
        std::fs::write(path, toml).config_err("Failed to write config file")?;

        Ok(())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;
        toml::from_str(&contents).config_err("Failed to parse config file")
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(ms) = std::env::var("CONTROLBAR_HIDE_BAR_TIME") {
            self.hide_bar_time = ms
                .trim()
                .parse::<u64>()
                .config_err("Invalid CONTROLBAR_HIDE_BAR_TIME")?;
        }

        if let Ok(mode) = std::env::var("CONTROLBAR_BAR_SHOW_BY_MOUSE") {
            self.bar_show_by_mouse = BarShowByMouse::from(mode);
        }

        if let Ok(color) = std::env::var("CONTROLBAR_MAJOR_COLOR") {
            self.major_color = Some(color);
        }

        if let Ok(color) = std::env::var("CONTROLBAR_HOVER_COLOR") {
            self.hover_color = Some(color);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.hide_bar_time > MAX_HIDE_BAR_TIME_MS {
            return Err(ControlBarError::Config(format!(
                "hideBarTime must not exceed {} ms, got {}",
                MAX_HIDE_BAR_TIME_MS, self.hide_bar_time
            )));
        }

        for (name, color) in [("majorColor", &self.major_color), ("hoverColor", &self.hover_color)] {
            if matches!(color, Some(c) if c.trim().is_empty()) {
                return Err(ControlBarError::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/controlbar/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("Controlbar").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from("/Library/Application Support/Controlbar/config.toml"));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("controlbar").join("config.toml"))
    }
}
