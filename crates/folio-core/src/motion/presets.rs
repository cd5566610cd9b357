//! Animation presets per element category.

use std::time::Duration;

use super::{Category, ElementId, Extent, Easing, Length, MotionEvent, Shadow, Style, Tween};

pub const SECTION_REVEAL: Duration = Duration::from_millis(1000);
pub const SECTION_OFFSET_PX: f32 = 50.0;
pub const CARD_HOVER: Duration = Duration::from_millis(300);
pub const CARD_HOVER_SCALE: f32 = 1.05;
pub const CAPTION_SLIDE: Duration = Duration::from_millis(400);
pub const NAV_PULSE: Duration = Duration::from_millis(100);
pub const NAV_PULSE_SCALE: f32 = 0.95;
pub const PANEL_TOGGLE: Duration = Duration::from_millis(300);

/// Name of the caption sub-element of a gallery tile
pub const CAPTION_PART: &str = "caption";

pub fn section_hidden() -> Style {
    Style::new()
        .opacity(0.0)
        .translate_y(Length::Px(SECTION_OFFSET_PX))
}

pub fn section_shown() -> Style {
    Style::new().opacity(1.0).translate_y(Length::Px(0.0))
}

pub fn card_rest() -> Style {
    Style::new().scale(1.0).shadow(Shadow::Base)
}

pub fn card_raised() -> Style {
    Style::new().scale(CARD_HOVER_SCALE).shadow(Shadow::Raised)
}

pub fn caption_hidden() -> Style {
    Style::new()
        .translate_y(Length::Percent(100.0))
        .opacity(0.0)
}

pub fn caption_shown() -> Style {
    Style::new().translate_y(Length::Percent(0.0)).opacity(1.0)
}

pub fn nav_rest() -> Style {
    Style::new().scale(1.0)
}

pub fn panel_collapsed() -> Style {
    Style::new().height(Extent::Collapsed).opacity(0.0)
}

pub fn panel_expanded() -> Style {
    Style::new().height(Extent::Natural).opacity(1.0)
}

/// Element that actually moves for an element of `category`.
pub fn motion_target(category: Category, id: &ElementId) -> ElementId {
    match category {
        Category::GalleryItem => id.part(CAPTION_PART),
        _ => id.clone(),
    }
}

/// Style applied with no transition when handlers are bound.
pub fn initial(category: Category) -> Style {
    match category {
        Category::Section => section_hidden(),
        Category::Card => card_rest(),
        Category::GalleryItem => caption_hidden(),
        Category::NavItem => nav_rest(),
    }
}

/// Static style used when motion is unavailable: everything readable, nothing offset.
pub fn resting(category: Category) -> Style {
    match category {
        Category::Section => section_shown(),
        Category::Card => card_rest(),
        Category::GalleryItem => caption_shown(),
        Category::NavItem => nav_rest(),
    }
}

/// Tween an element of `category` plays in response to `event`, if any.
pub fn reaction(category: Category, event: MotionEvent) -> Option<Tween> {
    let tween = match (category, event) {
        (Category::Section, MotionEvent::EnterViewport) => {
            Tween::to(section_shown(), SECTION_REVEAL).easing(Easing::EaseOut)
        }
        (Category::Section, MotionEvent::ExitViewport) => {
            Tween::to(section_hidden(), SECTION_REVEAL).easing(Easing::EaseOut)
        }
        (Category::Card, MotionEvent::PointerEnter) => Tween::to(card_raised(), CARD_HOVER),
        (Category::Card, MotionEvent::PointerLeave) => Tween::to(card_rest(), CARD_HOVER),
        (Category::GalleryItem, MotionEvent::PointerEnter) => {
            Tween::to(caption_shown(), CAPTION_SLIDE)
        }
        (Category::GalleryItem, MotionEvent::PointerLeave) => {
            Tween::to(caption_hidden(), CAPTION_SLIDE)
        }
        (Category::NavItem, MotionEvent::Click) => {
            Tween::to(Style::new().scale(NAV_PULSE_SCALE), NAV_PULSE)
                .easing(Easing::EaseInOut)
                .yoyo(1)
        }
        _ => return None,
    };
    Some(tween)
}

pub fn panel_toggle(open: bool) -> Tween {
    let style = if open {
        panel_expanded()
    } else {
        panel_collapsed()
    };
    Tween::to(style, PANEL_TOGGLE).easing(Easing::EaseInOut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_follow_category_handlers() {
        let events = [
            MotionEvent::EnterViewport,
            MotionEvent::ExitViewport,
            MotionEvent::PointerEnter,
            MotionEvent::PointerLeave,
            MotionEvent::Click,
        ];
        for category in Category::ALL {
            for event in events {
                assert_eq!(
                    reaction(category, event).is_some(),
                    category.handles(event),
                    "{:?} / {:?}",
                    category,
                    event
                );
            }
        }
    }

    #[test]
    fn test_section_reveal_preset() {
        let tween = reaction(Category::Section, MotionEvent::EnterViewport).unwrap();
        assert_eq!(tween.duration, Duration::from_secs(1));
        assert_eq!(tween.easing, Easing::EaseOut);
        assert_eq!(tween.style.opacity, Some(1.0));
        assert_eq!(tween.style.translate_y, Some(Length::Px(0.0)));
    }

    #[test]
    fn test_nav_pulse_preset() {
        let tween = reaction(Category::NavItem, MotionEvent::Click).unwrap();
        assert_eq!(tween.style.scale, Some(0.95));
        assert!(tween.yoyo);
        assert_eq!(tween.repeat, 1);
        assert!(tween.returns_to_start());
    }

    #[test]
    fn test_gallery_targets_caption() {
        let tile = ElementId::new("gallery-2");
        assert_eq!(
            motion_target(Category::GalleryItem, &tile).as_str(),
            "gallery-2::caption"
        );
        assert_eq!(motion_target(Category::Card, &tile), tile);
    }
}
