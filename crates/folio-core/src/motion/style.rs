//! Visual properties, tweens and their CSS rendering.

use std::fmt::Write;
use std::time::Duration;

/// Vertical offset, either absolute or relative to the element's own height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

/// Shadow depth presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    Base,
    Raised,
}

impl Shadow {
    pub fn css(&self) -> &'static str {
        match self {
            Shadow::Base => "0 4px 12px rgba(0, 0, 0, 0.15)",
            Shadow::Raised => "0 16px 32px rgba(0, 0, 0, 0.35)",
        }
    }
}

/// Height of a collapsible element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Collapsed,
    Natural,
}

/// A set of visual properties. `None` leaves a property untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub opacity: Option<f32>,
    pub translate_y: Option<Length>,
    pub scale: Option<f32>,
    pub shadow: Option<Shadow>,
    pub height: Option<Extent>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn translate_y(mut self, value: Length) -> Self {
        self.translate_y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn shadow(mut self, value: Shadow) -> Self {
        self.shadow = Some(value);
        self
    }

    pub fn height(mut self, value: Extent) -> Self {
        self.height = Some(value);
        self
    }

    /// Overlay the properties `other` sets on top of `self`.
    pub fn merge(&mut self, other: &Style) {
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.translate_y.is_some() {
            self.translate_y = other.translate_y;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
        if other.shadow.is_some() {
            self.shadow = other.shadow;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Inline CSS declarations for this style.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity: {};", opacity);
        }

        let mut transforms = Vec::new();
        match self.translate_y {
            Some(Length::Px(px)) => transforms.push(format!("translateY({}px)", px)),
            Some(Length::Percent(pct)) => transforms.push(format!("translateY({}%)", pct)),
            None => {}
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({})", scale));
        }
        if !transforms.is_empty() {
            let _ = write!(css, " transform: {};", transforms.join(" "));
        }

        if let Some(shadow) = self.shadow {
            let _ = write!(css, " box-shadow: {};", shadow.css());
        }

        match self.height {
            Some(Extent::Collapsed) => css.push_str(" max-height: 0; overflow: hidden;"),
            Some(Extent::Natural) => css.push_str(" max-height: 100vh; overflow: hidden;"),
            None => {}
        }

        css.trim_start().to_string()
    }
}

/// Timing curve of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// A timed transition toward a target style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub style: Style,
    pub duration: Duration,
    pub easing: Easing,
    /// Extra plays after the first one
    pub repeat: u32,
    /// Alternate direction on each repeat
    pub yoyo: bool,
}

impl Tween {
    pub fn to(style: Style, duration: Duration) -> Self {
        Self {
            style,
            duration,
            easing: Easing::default(),
            repeat: 0,
            yoyo: false,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn yoyo(mut self, repeat: u32) -> Self {
        self.yoyo = true;
        self.repeat = repeat;
        self
    }

    /// Whether the element ends where it started (a yoyo with an odd repeat count).
    pub fn returns_to_start(&self) -> bool {
        self.yoyo && self.repeat % 2 == 1
    }

    /// CSS `transition` value for a plain tween.
    pub fn transition_css(&self) -> String {
        format!(
            "all {}ms {}",
            self.duration.as_millis(),
            self.easing.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overlays_set_fields() {
        let mut base = Style::new().opacity(0.0).translate_y(Length::Px(50.0));
        base.merge(&Style::new().opacity(1.0));
        assert_eq!(base.opacity, Some(1.0));
        assert_eq!(base.translate_y, Some(Length::Px(50.0)));
    }

    #[test]
    fn test_css_combines_transforms() {
        let style = Style::new()
            .translate_y(Length::Percent(100.0))
            .scale(1.05)
            .opacity(0.0);
        assert_eq!(
            style.to_css(),
            "opacity: 0; transform: translateY(100%) scale(1.05);"
        );
    }

    #[test]
    fn test_css_empty_style() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_css(), "");
    }

    #[test]
    fn test_collapsed_height_css() {
        let css = Style::new().height(Extent::Collapsed).to_css();
        assert!(css.contains("max-height: 0"));
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let pulse = Tween::to(Style::new().scale(0.95), Duration::from_millis(100)).yoyo(1);
        assert!(pulse.returns_to_start());
        let plain = Tween::to(Style::new().scale(0.95), Duration::from_millis(100));
        assert!(!plain.returns_to_start());
    }

    #[test]
    fn test_transition_css() {
        let tween = Tween::to(Style::new(), Duration::from_millis(300)).easing(Easing::Linear);
        assert_eq!(tween.transition_css(), "all 300ms linear");
    }
}
