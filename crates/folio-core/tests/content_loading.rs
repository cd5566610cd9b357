//! Content file loading tests

use std::fs;

use folio_core::{FolioError, PortfolioContent};
use tempfile::TempDir;

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    fs::write(
        &path,
        r#"{
            "owner": {
                "name": "Ada Lovelace",
                "role": "Analyst",
                "tagline": "Notes on the engine",
                "brand": "Ada"
            },
            "slides": [
                { "id": 7, "source": "assets/slide-7.jpg" },
                { "id": 8, "source": "assets/slide-8.jpg" }
            ]
        }"#,
    )
    .unwrap();

    let content = PortfolioContent::load(&path).unwrap();
    assert_eq!(content.owner.name, "Ada Lovelace");
    assert_eq!(content.slides.len(), 2);
    assert_eq!(content.slides[1].source, "assets/slide-8.jpg");

    let defaults = PortfolioContent::default();
    assert_eq!(content.projects, defaults.projects);
    assert_eq!(content.contact, defaults.contact);
}

#[test]
fn test_partial_owner_and_contact_fill_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    fs::write(
        &path,
        r#"{
            "owner": { "name": "Ada" },
            "contact": { "email": "ada@example.com" }
        }"#,
    )
    .unwrap();

    let content = PortfolioContent::load(&path).unwrap();
    let defaults = PortfolioContent::default();

    assert_eq!(content.owner.name, "Ada");
    assert_eq!(content.owner.role, defaults.owner.role);
    assert_eq!(content.owner.brand, defaults.owner.brand);
    assert_eq!(content.contact.email, "ada@example.com");
    assert_eq!(content.contact.github, defaults.contact.github);
    assert_eq!(content.contact.mailto(), "mailto:ada@example.com");
}

#[test]
fn test_empty_slide_list_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, r#"{ "slides": [] }"#).unwrap();

    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(matches!(err, FolioError::Configuration(_)));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        PortfolioContent::load(&path),
        Err(FolioError::Json(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        PortfolioContent::load(dir.path().join("absent.json")),
        Err(FolioError::Io(_))
    ));
}

#[test]
fn test_roundtrip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    let original = PortfolioContent::default();
    fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    assert_eq!(PortfolioContent::load(&path).unwrap(), original);
}
