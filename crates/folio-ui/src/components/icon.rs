//! Bootstrap Icons
//!
//! Renders `<i class="bi bi-...">` glyphs from the Bootstrap Icons font.

use dioxus::prelude::*;

/// Normalize an icon name to its `bi-` class.
pub fn icon_class(name: &str) -> String {
    if name.starts_with("bi-") {
        name.to_string()
    } else {
        format!("bi-{}", name)
    }
}

/// Icon glyph
///
/// `name` accepts both `"github"` and `"bi-github"`.
#[component]
pub fn Icon(
    /// Icon name
    name: String,
    /// Extra classes (spacing, size, color)
    #[props(default)]
    class: Option<String>,
) -> Element {
    let icon = icon_class(&name);
    let extra = class.unwrap_or_default();

    rsx! {
        i {
            class: "bi {icon} {extra}",
            "aria-hidden": "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_class_adds_prefix() {
        assert_eq!(icon_class("github"), "bi-github");
        assert_eq!(icon_class("bi-github"), "bi-github");
    }
}
