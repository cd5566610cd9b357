use dioxus::prelude::*;

use crate::context::{get_content, get_settings};
use crate::motion::use_motion_provider;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css";

/// Root application component.
///
/// Provides global styles, page content, settings and the motion engine.
#[component]
pub fn App() -> Element {
    let settings = use_context_provider(get_settings);
    use_context_provider(get_content);
    use_motion_provider(settings.motion);

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_ICONS }
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
