//! Link Button Components
//!
//! Anchor-styled buttons following the glass design:
//! - Glass: translucent surface, used for secondary actions
//! - GlassPrimary: tinted surface for the main call to action

use dioxus::prelude::*;

use crate::Icon;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Translucent glass surface
    #[default]
    Glass,
    /// Accent-tinted glass surface
    GlassPrimary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::GlassPrimary => "btn-glass-primary",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Regular => "",
            ButtonSize::Large => "btn-lg px-4",
        }
    }
}

/// Full class list for a link button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut classes = vec!["btn", variant.class()];
    if !size.class().is_empty() {
        classes.push(size.class());
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Link target
    pub href: String,
    /// Visible label
    pub label: String,
    /// Bootstrap icon class shown before the label (e.g. "bi-github")
    #[props(default)]
    pub icon: Option<String>,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Open in a new window with `noopener noreferrer`
    #[props(default = false)]
    pub external: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor rendered as a glass button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "#projects",
///         label: "View Work",
///         icon: "bi-eye",
///         size: ButtonSize::Large,
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            target: if props.external { "_blank" },
            rel: if props.external { "noopener noreferrer" },
            if let Some(icon) = &props.icon {
                Icon { name: icon.clone(), class: Some("me-2 icon-dark".to_string()) }
            }
            "{props.label}"
        }
    }
}
