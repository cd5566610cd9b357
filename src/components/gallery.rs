//! Gallery Component
//!
//! Image tiles whose caption slides up from below on hover.

use dioxus::prelude::*;
use folio_core::motion::{presets, Category, ElementId, MotionEvent};
use folio_core::GalleryImage;
use folio_ui::Icon;

use super::AnimatedSection;
use crate::motion::{use_element_style, use_motion};

#[component]
pub fn GallerySection(images: Vec<GalleryImage>) -> Element {
    if images.is_empty() {
        return VNode::empty();
    }

    rsx! {
        AnimatedSection { id: "gallery".to_string(),
            div { class: "container",
                h2 { class: "text-center mb-5 display-5 fw-bold",
                    Icon { name: "bi-images".to_string(), class: Some("me-2 icon-dark".to_string()) }
                    "Gallery"
                }
                div { class: "row g-4",
                    for image in images {
                        div { key: "{image.id}", class: "col-lg-3 col-md-6",
                            GalleryTile { image }
                        }
                    }
                }
            }
        }
    }
}

/// Single gallery tile
///
/// Pointer events land on the tile; the caption part is what moves.
#[component]
pub fn GalleryTile(image: GalleryImage) -> Element {
    let motion = use_motion();
    let element = use_hook(|| ElementId::new(format!("gallery-{}", image.id)));
    let caption = element.part(presets::CAPTION_PART);

    {
        let element = element.clone();
        use_drop(move || motion.unmount(&element));
    }

    let caption_style =
        use_element_style(caption, presets::initial(Category::GalleryItem)).cloned();
    let (register_id, enter_id, leave_id) = (element.clone(), element.clone(), element);

    rsx! {
        div {
            class: "gallery-item glass-card rounded-3",
            onmounted: move |_| motion.register_gallery_item(register_id.clone()),
            onmouseenter: move |_| motion.dispatch(&enter_id, MotionEvent::PointerEnter),
            onmouseleave: move |_| motion.dispatch(&leave_id, MotionEvent::PointerLeave),

            img { class: "gallery-image", src: "{image.source}", alt: "{image.alt}" }
            div { class: "gallery-caption", style: "{caption_style}",
                h5 { class: "mb-1", "{image.title}" }
                small { "{image.subtitle}" }
            }
        }
    }
}
