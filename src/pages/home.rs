//! Home page - the whole portfolio on one scrolling page.
//!
//! The page root is the scroll container: its height is the viewport the
//! reveal line is measured against, and its scroll events drive section
//! reveals.

use dioxus::prelude::*;

use crate::components::{
    ContactSection, Footer, GallerySection, Hero, NavBar, ProjectsSection, SkillsSection,
    Slideshow,
};
use crate::context::{use_content, use_settings};
use crate::motion::use_motion;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let content = use_content();
    let settings = use_settings();
    let motion = use_motion();

    // Elements that mount after this bind as they register
    use_effect(move || {
        motion.attach();
        motion.refresh();
        tracing::info!(degraded = motion.is_degraded(), "Page mounted");
    });

    use_drop(move || {
        motion.detach();
        tracing::debug!("Page unmounted");
    });

    rsx! {
        main {
            class: "page",
            onmounted: move |evt| {
                motion.set_viewport(evt.data());
                motion.refresh();
            },
            onscroll: move |_| motion.refresh(),

            NavBar { brand: content.owner.brand.clone() }
            Hero { owner: content.owner.clone() }
            Slideshow { slides: content.slides.clone(), interval: settings.slide_interval }
            ProjectsSection { projects: content.projects.clone() }
            SkillsSection { skills: content.skills.clone() }
            GallerySection { images: content.gallery.clone() }
            ContactSection { contact: content.contact.clone() }
            Footer { owner: content.owner.name.clone(), socials: content.socials.clone() }
        }
    }
}
