use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::SocialLink;
use folio_ui::Icon;

/// Page footer with social icons and copyright line
#[component]
pub fn Footer(owner: String, socials: Vec<SocialLink>) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "py-4 glass-nav",
            div { class: "container text-center",
                div { class: "mb-3",
                    for social in socials {
                        a {
                            key: "{social.network}",
                            class: "social-icon-glass mx-2",
                            href: "{social.url}",
                            "aria-label": "{social.network}",
                            Icon { name: social.network.clone() }
                        }
                    }
                }
                small { "© {year} {owner}. All rights reserved." }
            }
        }
    }
}
