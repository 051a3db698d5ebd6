//! Timed event scripts for the simulator
//!
//! One step per line: `<ms> <command> [argument]`. Blank lines and lines
//! starting with `#` are skipped. Commands are the host event names
//! (`play`, `c_mousemove`, ...) plus:
//!
//! * `key <code>` - keydown with a DOM key code
//! * `controls on|off` - write the host's controls flag
//! * `clarity <json>` - call `update_clarity` with the JSON value

use crate::control::{ControlEvent, EventKind};
use crate::utils::error::{ControlBarError, IntoControlBarError, Result};
use std::time::Duration;

/// What a script step does
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    Event(ControlEvent),
    Controls(bool),
    Clarity(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    /// Offset from the start of the run
    pub at: Duration,
    pub action: ScriptAction,
}

/// Parse a whole script. Step times must not decrease.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps: Vec<ScriptStep> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let step = parse_line(line).map_err(|e| match e {
            ControlBarError::InvalidInput(msg) => ControlBarError::script(line_no, msg),
            other => other,
        })?;

        if let Some(last) = steps.last() {
            if step.at < last.at {
                return Err(ControlBarError::script(
                    line_no,
                    format!("time {}ms is before the previous step", step.at.as_millis()),
                ));
            }
        }
        steps.push(step);
    }

    Ok(steps)
}

fn parse_line(line: &str) -> Result<ScriptStep> {
    let (at, rest) = split_token(line);
    let (command, rest) = split_token(rest);
    if command.is_empty() {
        return Err(ControlBarError::InvalidInput("missing command".to_string()));
    }
    let argument = Some(rest.trim()).filter(|arg| !arg.is_empty());

    let at = at.parse::<u64>().input_err(&format!("invalid time '{}'", at))?;

    let action = match command {
        "key" => {
            let code = require(argument, "key")?;
            let code = code.parse::<u32>().input_err(&format!("invalid key code '{}'", code))?;
            ScriptAction::Event(ControlEvent::key_down(code))
        }
        "controls" => match require(argument, "controls")? {
            "on" => ScriptAction::Controls(true),
            "off" => ScriptAction::Controls(false),
            other => {
                return Err(ControlBarError::InvalidInput(format!(
                    "controls expects on|off, got '{}'",
                    other
                )))
            }
        },
        "clarity" => ScriptAction::Clarity(serde_json::from_str(require(argument, "clarity")?)?),
        name => {
            let kind: EventKind = name.parse()?;
            let event = ControlEvent::from_kind(kind).ok_or_else(|| {
                ControlBarError::InvalidInput(format!("use 'key <code>' instead of '{}'", name))
            })?;
            ScriptAction::Event(event)
        }
    };

    Ok(ScriptStep {
        at: Duration::from_millis(at),
        action,
    })
}

/// Split off the first whitespace-delimited token
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

fn require<'a>(argument: Option<&'a str>, command: &str) -> Result<&'a str> {
    argument.ok_or_else(|| ControlBarError::InvalidInput(format!("{} needs an argument", command)))
}
