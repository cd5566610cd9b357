use dioxus::prelude::*;
use folio_core::ContactLinks;
use folio_ui::Icon;

use super::AnimatedSection;

/// Contact channel button
#[derive(Clone, PartialEq)]
struct Channel {
    label: &'static str,
    icon: &'static str,
    href: String,
    external: bool,
}

fn channels(contact: &ContactLinks) -> Vec<Channel> {
    vec![
        Channel { label: "Email", icon: "bi-envelope-fill", href: contact.mailto(), external: false },
        Channel { label: "WhatsApp", icon: "bi-whatsapp", href: contact.whatsapp.clone(), external: true },
        Channel { label: "Instagram", icon: "bi-instagram", href: contact.instagram.clone(), external: true },
        Channel { label: "GitHub", icon: "bi-github", href: contact.github.clone(), external: true },
    ]
}

/// "Get In Touch" section
#[component]
pub fn ContactSection(contact: ContactLinks) -> Element {
    rsx! {
        AnimatedSection { id: "contact".to_string(),
            div { class: "container",
                h2 { class: "text-center mb-5 display-5 fw-bold",
                    Icon { name: "bi-chat-left-text".to_string(), class: Some("me-2 icon-dark".to_string()) }
                    "Get In Touch"
                }
                div { class: "row justify-content-center",
                    div { class: "col-lg-8",
                        div { class: "glass-card p-5 rounded-4",
                            div { class: "text-center mb-4",
                                p { class: "lead", "Have a project in mind or want to collaborate?" }
                            }
                            div { class: "d-flex justify-content-center flex-wrap gap-3 mb-5",
                                for channel in channels(&contact) {
                                    a {
                                        key: "{channel.label}",
                                        class: "social-icon-glass",
                                        href: "{channel.href}",
                                        target: if channel.external { "_blank" },
                                        rel: if channel.external { "noopener noreferrer" },
                                        Icon { name: channel.icon.to_string(), class: Some("icon-dark".to_string()) }
                                        " {channel.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_channel_uses_mailto() {
        let contact = ContactLinks::default();
        let list = channels(&contact);
        assert_eq!(list[0].href, format!("mailto:{}", contact.email));
        assert!(!list[0].external);
        assert!(list[1..].iter().all(|c| c.external));
    }
}
