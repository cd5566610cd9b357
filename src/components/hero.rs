//! Hero Component
//!
//! Full-height greeting with the owner's name, role and calls to action.

use dioxus::prelude::*;
use folio_core::Owner;
use folio_ui::{Badge, ButtonSize, ButtonVariant, LinkButton};

#[component]
pub fn Hero(owner: Owner) -> Element {
    rsx! {
        div {
            class: "glass-hero text-white text-center d-flex flex-column justify-content-center align-items-center vh-100",
            id: "top",
            div { class: "container animate-fadeIn",
                h1 { class: "display-4 fw-bold mb-3 animate-float", "{owner.name}" }
                p { class: "lead fs-3 mb-4",
                    Badge { label: owner.role.clone() }
                }
                p { class: "mb-4 fs-5", "{owner.tagline}" }
                div { class: "d-flex justify-content-center gap-3",
                    LinkButton {
                        href: "#projects".to_string(),
                        label: "View Work".to_string(),
                        icon: Some("bi-eye".to_string()),
                        size: ButtonSize::Large,
                    }
                    LinkButton {
                        href: "#contact".to_string(),
                        label: "Hire Me".to_string(),
                        icon: Some("bi-send".to_string()),
                        variant: ButtonVariant::GlassPrimary,
                        size: ButtonSize::Large,
                    }
                }
            }
        }
    }
}
