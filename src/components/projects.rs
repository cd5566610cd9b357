//! Project Cards
//!
//! Featured work grid. Each card lifts and grows while the pointer is
//! over it.

use dioxus::prelude::*;
use folio_core::motion::{presets, Category, ElementId, MotionEvent};
use folio_core::{Project, ProjectLink};
use folio_ui::{ButtonSize, ButtonVariant, Icon, LinkButton, TagList};

use super::AnimatedSection;
use crate::motion::use_element_style;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        AnimatedSection { id: "projects".to_string(),
            div { class: "container",
                h2 { class: "text-center mb-5 display-5 fw-bold",
                    Icon { name: "bi-stack".to_string(), class: Some("me-2 icon-dark".to_string()) }
                    "Featured Projects"
                }
                div { class: "row g-4",
                    for (index, project) in projects.into_iter().enumerate() {
                        div { key: "{index}", class: "col-lg-3 col-md-6",
                            ProjectCard { project, index }
                        }
                    }
                }
            }
        }
    }
}

/// Single glass project card
#[component]
pub fn ProjectCard(project: Project, index: usize) -> Element {
    let motion = crate::motion::use_motion();
    let element = use_hook(|| ElementId::new(format!("project-{}", index)));

    {
        let element = element.clone();
        use_drop(move || motion.unmount(&element));
    }

    let style = use_element_style(element.clone(), presets::initial(Category::Card)).cloned();
    let last_link = project.links.len().saturating_sub(1);
    // First link is plain glass, the rest carry the accent
    let buttons: Vec<(ProjectLink, ButtonVariant, Option<String>)> = project
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let variant = if i == 0 { ButtonVariant::Glass } else { ButtonVariant::GlassPrimary };
            let spacing = (i < last_link).then(|| "me-2".to_string());
            (link.clone(), variant, spacing)
        })
        .collect();
    let (register_id, enter_id, leave_id) = (element.clone(), element.clone(), element);

    rsx! {
        div {
            class: "card glass-card project-card h-100 border-0",
            style: "{style}",
            onmounted: move |_| motion.register_card(register_id.clone()),
            onmouseenter: move |_| motion.dispatch(&enter_id, MotionEvent::PointerEnter),
            onmouseleave: move |_| motion.dispatch(&leave_id, MotionEvent::PointerLeave),

            div { class: "card-body",
                div { class: "mb-3",
                    Icon { name: project.icon.clone(), class: Some("fs-1 icon-dark".to_string()) }
                }
                h5 { class: "card-title", "{project.title}" }
                p { class: "card-text", "{project.summary}" }
                TagList { tags: project.tags.clone() }
            }
            div { class: "card-footer bg-transparent border-0",
                for (i, (link, variant, spacing)) in buttons.into_iter().enumerate() {
                    LinkButton {
                        key: "{i}",
                        href: link.url,
                        label: link.kind.label().to_string(),
                        icon: Some(link.kind.icon().to_string()),
                        variant,
                        size: ButtonSize::Small,
                        external: link.kind.is_external(),
                        class: spacing,
                    }
                }
            }
        }
    }
}
