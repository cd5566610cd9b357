//! UI Components for the portfolio page.
//!
//! Glass-morphism sections laid out top to bottom: navigation, hero,
//! slideshow, projects, skills, gallery, contact and footer.

mod contact;
mod footer;
mod gallery;
mod hero;
mod nav_bar;
mod projects;
mod section;
mod skills;
mod slideshow;

pub use contact::ContactSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use projects::ProjectsSection;
pub use section::AnimatedSection;
pub use skills::SkillsSection;
pub use slideshow::Slideshow;
