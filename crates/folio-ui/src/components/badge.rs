//! Badge Components
//!
//! Small glass pills for roles and technology tags.

use dioxus::prelude::*;

/// Single glass badge
#[component]
pub fn Badge(
    /// Badge text
    label: String,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.unwrap_or_default();

    rsx! {
        span { class: "badge badge-glass {extra}", "{label}" }
    }
}

/// Row of technology tags
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagList { tags: vec!["Django".to_string(), "React".to_string()] }
/// }
/// ```
#[component]
pub fn TagList(tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return VNode::empty();
    }

    let last = tags.len() - 1;

    rsx! {
        div { class: "mt-3",
            for (index, tag) in tags.iter().enumerate() {
                Badge {
                    key: "{tag}",
                    label: tag.clone(),
                    class: (index < last).then(|| "me-1".to_string()),
                }
            }
        }
    }
}
