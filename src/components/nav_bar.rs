//! Navigation Bar Component
//!
//! Fixed glass header with brand, section links and a collapsible panel
//! on narrow windows.

use dioxus::prelude::*;
use folio_core::motion::{presets, Category, ElementId, MotionEvent};
use folio_ui::Icon;

use crate::motion::{use_element_style, use_motion};

/// In-page section a navigation item scrolls to
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavTarget {
    Projects,
    Skills,
    Gallery,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Projects,
        NavTarget::Skills,
        NavTarget::Gallery,
        NavTarget::Contact,
    ];

    /// Get the display name for this target
    pub fn display_name(&self) -> &'static str {
        match self {
            NavTarget::Projects => "Projects",
            NavTarget::Skills => "Skills",
            NavTarget::Gallery => "Gallery",
            NavTarget::Contact => "Contact",
        }
    }

    /// Get the anchor id of the target section
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Projects => "projects",
            NavTarget::Skills => "skills",
            NavTarget::Gallery => "gallery",
            NavTarget::Contact => "contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavTarget::Projects => "bi-folder2-open",
            NavTarget::Skills => "bi-tools",
            NavTarget::Gallery => "bi-images",
            NavTarget::Contact => "bi-envelope",
        }
    }
}

/// Navigation bar
///
/// Owns the open/closed state of the mobile panel; the motion engine only
/// follows it.
#[component]
pub fn NavBar(brand: String) -> Element {
    let motion = use_motion();
    let mut open = use_signal(|| false);
    let panel = use_hook(|| ElementId::new("navbar-panel"));

    let mut set_open = move |next: bool| {
        if open() != next {
            open.set(next);
            motion.nav_panel_toggled(next);
        }
    };

    let panel_style = use_element_style(panel.clone(), presets::panel_collapsed()).cloned();
    // Without motion the panel falls back to Bootstrap's display utilities
    let panel_class = if motion.is_degraded() && !open() {
        "navbar-collapse d-none d-lg-flex"
    } else {
        "navbar-collapse"
    };

    rsx! {
        nav { class: "navbar navbar-expand-lg fixed-top navbar-dark glass-nav",
            div { class: "container",
                a { class: "navbar-brand fw-bold animate-fadeIn", href: "#top",
                    Icon { name: "bi-code-slash".to_string(), class: Some("me-2 icon-dark".to_string()) }
                    "{brand}"
                }

                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if open() { "true" } else { "false" },
                    onclick: move |_| set_open(!open()),
                    span { class: "navbar-toggler-icon" }
                }

                div {
                    class: "{panel_class}",
                    id: "navbarNav",
                    style: "{panel_style}",
                    onmounted: move |_| motion.set_nav_panel(panel.clone()),

                    ul { class: "navbar-nav ms-auto",
                        for (index, target) in NavTarget::ALL.iter().enumerate() {
                            NavItem {
                                key: "{target.anchor()}",
                                target: *target,
                                delay_ms: 200 * (index as u32 + 1),
                                on_navigate: move |_| set_open(false),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Single navigation link with a click pulse
#[component]
fn NavItem(target: NavTarget, delay_ms: u32, on_navigate: EventHandler<()>) -> Element {
    let motion = use_motion();
    let element = use_hook(|| ElementId::new(format!("nav-{}", target.anchor())));

    {
        let element = element.clone();
        use_drop(move || motion.unmount(&element));
    }

    let motion_style =
        use_element_style(element.clone(), presets::initial(Category::NavItem)).cloned();
    let register_id = element.clone();

    rsx! {
        li {
            class: "nav-item animate-fadeIn",
            style: "animation-delay: {delay_ms}ms; {motion_style}",
            onmounted: move |_| motion.register_nav_item(register_id.clone()),
            onclick: move |_| {
                motion.dispatch(&element, MotionEvent::Click);
                on_navigate.call(());
            },
            a { class: "nav-link", href: "#{target.anchor()}",
                Icon { name: target.icon().to_string(), class: Some("me-1 icon-dark".to_string()) }
                "{target.display_name()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_have_unique_anchors() {
        let mut anchors: Vec<_> = NavTarget::ALL.iter().map(|t| t.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), NavTarget::ALL.len());
    }
}
