//! Color theming for the control bar widgets

const MAJOR_COLOR_STYLE: &str = r#"
  .chimee-flex-component svg * {
    fill: majorColor;
    stroke: majorColor;
  }

  chimee-progressbar-all {
    background: majorColor;
  }

  chimee-volume.chimee-flex-component chimee-volume-bar-all {
    background: majorColor;
  }

  chimee-playbackrate-list li:hover,
  chimee-playbackrate-list li.active,
  chimee-clarity-list li:hover,
  chimee-clarity-list li.active {
    color: majorColor;
  }
"#;

const HOVER_COLOR_STYLE: &str = r#"
  .chimee-flex-component svg:hover *{
    fill: hoverColor;
    stroke: hoverColor;
  }
"#;

/// Build the stylesheet for the configured colors.
///
/// Each template is included only when its color is set; with neither set
/// the result is empty.
pub fn build_stylesheet(major_color: Option<&str>, hover_color: Option<&str>) -> String {
    let mut css = String::new();
    if let Some(color) = major_color {
        css.push_str(&MAJOR_COLOR_STYLE.replace("majorColor", color));
    }
    if let Some(color) = hover_color {
        css.push_str(&HOVER_COLOR_STYLE.replace("hoverColor", color));
    }
    css
}
