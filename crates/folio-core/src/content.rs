//! Static page content.
//!
//! Everything the page shows besides motion: owner details, slides, project
//! cards, skills, gallery tiles and contact links. Content is supplied as
//! configuration (a JSON file or the built-in defaults) and never changes
//! while the page is mounted.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::slideshow::Slide;

const UNSPLASH_PARAMS: &str = "ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?{}", photo, UNSPLASH_PARAMS)
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub name: String,
    /// Short title shown in the hero badge
    pub role: String,
    pub tagline: String,
    /// Brand text in the navigation bar
    pub brand: String,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            name: "Craig Macharia".to_string(),
            role: "Full-Stack Developer".to_string(),
            tagline: "I build modern web applications with Django, React, and AI integrations"
                .to_string(),
            brand: "Craig".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Code,
    Demo,
    Live,
}

impl LinkKind {
    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Code => "bi-github",
            LinkKind::Demo => "bi-eye",
            LinkKind::Live => "bi-box-arrow-up-right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Code => "Code",
            LinkKind::Demo => "Demo",
            LinkKind::Live => "Live",
        }
    }

    /// Whether the link opens a new window
    pub fn is_external(&self) -> bool {
        !matches!(self, LinkKind::Demo)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    /// Bootstrap icon class
    pub icon: String,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

impl Project {
    fn new(title: &str, summary: &str, icon: &str, tags: &[&str], links: Vec<ProjectLink>) -> Self {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
            icon: icon.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    pub icon: String,
    /// Color token (a text color class)
    pub color: String,
}

impl Skill {
    fn new(label: &str, icon: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub source: String,
    pub alt: String,
    pub title: String,
    pub subtitle: String,
}

impl GalleryImage {
    fn new(id: &str, photo: &str, alt: &str, title: &str, subtitle: &str) -> Self {
        Self {
            id: id.to_string(),
            source: unsplash(photo),
            alt: alt.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    pub email: String,
    pub whatsapp: String,
    pub instagram: String,
    pub github: String,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            email: "cmacharia482@gmail.com".to_string(),
            whatsapp: "https://wa.me/254712345678".to_string(),
            instagram: "https://instagram.com/craig.macharia".to_string(),
            github: "https://github.com/Craigmacharia".to_string(),
        }
    }
}

/// Footer social icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Bootstrap icon name without the `bi-` prefix
    pub network: String,
    pub url: String,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub owner: Owner,
    pub slides: Vec<Slide>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactLinks,
    pub socials: Vec<SocialLink>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            owner: Owner::default(),
            slides: default_slides(),
            projects: default_projects(),
            skills: default_skills(),
            gallery: default_gallery(),
            contact: ContactLinks::default(),
            socials: ["facebook", "twitter", "linkedin", "github"]
                .into_iter()
                .map(|network| SocialLink {
                    network: network.to_string(),
                    url: "#".to_string(),
                })
                .collect(),
        }
    }
}

impl PortfolioContent {
    /// Read content from a JSON file. Missing fields fall back to the built-in content.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content: PortfolioContent = serde_json::from_str(&raw)?;
        content.validate()?;
        tracing::info!(
            path = %path.display(),
            slides = content.slides.len(),
            projects = content.projects.len(),
            gallery = content.gallery.len(),
            "Loaded portfolio content"
        );
        Ok(content)
    }

    /// Reject content the page cannot render meaningfully.
    pub fn validate(&self) -> FolioResult<()> {
        if self.slides.is_empty() {
            return Err(FolioError::Configuration(
                "content must define at least one slide".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for image in &self.gallery {
            if !seen.insert(image.id.as_str()) {
                return Err(FolioError::Configuration(format!(
                    "duplicate gallery id: {}",
                    image.id
                )));
            }
        }
        Ok(())
    }
}

fn default_slides() -> Vec<Slide> {
    [
        "photo-1551434678-e076c223a692",
        "photo-1497366754035-f200968a6e72",
        "photo-1486312338219-ce68d2c6f44d",
        "photo-1522071820081-009f0129c71c",
    ]
    .into_iter()
    .zip(1..)
    .map(|(photo, id)| Slide::new(id, unsplash(photo)))
    .collect()
}

fn default_projects() -> Vec<Project> {
    let live = |url: &str| ProjectLink {
        kind: LinkKind::Live,
        url: url.to_string(),
    };

    vec![
        Project::new(
            "STARK Hotel Booking",
            "Full-stack hotel management system with Django backend and React frontend.",
            "bi-building",
            &["Django", "React", "MPESA"],
            vec![
                ProjectLink {
                    kind: LinkKind::Code,
                    url: "https://github.com/yourusername/stark-hotel".to_string(),
                },
                ProjectLink {
                    kind: LinkKind::Demo,
                    url: "#".to_string(),
                },
            ],
        ),
        Project::new(
            "Landing Page Board",
            "Collection of responsive landing page templates for various business needs.",
            "bi-layout-text-window-reverse",
            &["HTML", "CSS", "JavaScript"],
            vec![live("https://landingpageboard.netlify.app/")],
        ),
        Project::new(
            "Ladha House",
            "Real estate listing website with property search and filtering capabilities.",
            "bi-house-door",
            &["React", "Firebase", "API"],
            vec![live("https://ladhahouse.netlify.app/")],
        ),
        Project::new(
            "Payroll Calculator",
            "Interactive payroll calculation tool with tax deductions and net pay estimation.",
            "bi-calculator",
            &["JavaScript", "Bootstrap"],
            vec![live("https://craigmacharia.github.io/payroll-calculator/")],
        ),
    ]
}

fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML", "bi-filetype-html", "text-danger"),
        Skill::new("CSS", "bi-filetype-css", "text-primary"),
        Skill::new("JavaScript", "bi-filetype-js", "text-warning"),
        Skill::new("React", "bi-filetype-jsx", "text-info"),
        Skill::new("Python", "bi-filetype-py", "text-success"),
        Skill::new("Django", "bi-database", "text-dark"),
        Skill::new("Git", "bi-git", "text-secondary"),
        Skill::new("Bootstrap", "bi-bootstrap", "text-purple"),
    ]
}

fn default_gallery() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(
            "workspace",
            "photo-1497366754035-f200968a6e72",
            "Bright open-plan office",
            "Workspace",
            "Where the code happens",
        ),
        GalleryImage::new(
            "pairing",
            "photo-1522071820081-009f0129c71c",
            "Team gathered around laptops",
            "Collaboration",
            "Pairing with clients and teams",
        ),
        GalleryImage::new(
            "planning",
            "photo-1551434678-e076c223a692",
            "Developers planning at a desk",
            "Planning",
            "From sketch to sprint",
        ),
        GalleryImage::new(
            "shipping",
            "photo-1486312338219-ce68d2c6f44d",
            "Laptop on a wooden table",
            "Shipping",
            "Deploying to production",
        ),
    ]
}
