//! Scroll-revealed page section.

use dioxus::prelude::*;
use folio_core::motion::{presets, Category, ElementId};

use crate::motion::{use_element_style, use_motion};

/// Page section that fades and slides in when it crosses into view.
#[component]
pub fn AnimatedSection(
    /// Anchor id used by the navigation links
    id: String,
    /// Extra classes on the section container
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let motion = use_motion();
    let element = use_hook(|| ElementId::new(format!("section-{}", id)));

    {
        let element = element.clone();
        use_drop(move || motion.unmount(&element));
    }

    let style = use_element_style(element.clone(), presets::initial(Category::Section)).cloned();
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "section {extra}",
            id: "{id}",
            style: "{style}",
            onmounted: move |evt| {
                motion.register_section(element.clone(), evt.data());
                motion.refresh();
            },
            {children}
        }
    }
}
