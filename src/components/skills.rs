use dioxus::prelude::*;
use folio_core::Skill;
use folio_ui::Icon;

use super::AnimatedSection;

/// Skills & technologies grid
#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> Element {
    rsx! {
        AnimatedSection { id: "skills".to_string(), class: Some("bg-dark bg-opacity-75".to_string()),
            div { class: "container",
                h2 { class: "text-center mb-5 display-5 fw-bold",
                    Icon { name: "bi-tools".to_string(), class: Some("me-2 icon-dark".to_string()) }
                    "Skills & Technologies"
                }
                div { class: "row g-4 text-center",
                    for skill in skills {
                        div { key: "{skill.label}", class: "col-6 col-md-3",
                            div { class: "p-4 glass-card rounded-3 h-100",
                                Icon { name: skill.icon.clone(), class: Some(format!("{} fs-1", skill.color)) }
                                h5 { class: "mt-3", "{skill.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
