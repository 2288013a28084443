use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use mdlinkcheck::{extract_hyperlinks, extract_imgs, extract_links, verify};
use mdlinkcheck::{CheckerOptions, Error, FileChecker, Reason};
use tempfile::TempDir;

/// Integration tests for the programmatic surface, run against the fixture
/// documents in tests/data/docs.
fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/docs")
        .join(name)
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn extract_links_of_empty_file() {
    assert!(extract_links(data_path("empty.md")).unwrap().is_empty());
}

#[test]
fn extract_hyperlinks_of_links_example() {
    let links = extract_hyperlinks(data_path("links.md")).unwrap();
    let expected = set(&[
        "http://www.google.com",
        "www.google.com",
        "other_file.md",
        "/tmp/other_file.md",
        "..",
        "images.md",
        "#",
        "#top",
        "#xxx",
        "images.md#subsection_example",
        "links.md#subsection_example",
        "#subsection_example",
        "#another_subsection",
        "mailto:xxx@yyy.zzz",
        "https://www.w3schools.com",
    ]);
    assert_eq!(links, expected);
}

#[test]
fn extract_imgs_of_images_example() {
    let imgs = extract_imgs(data_path("images.md")).unwrap();
    let expected = set(&["http://www.example.com/image.gif", "../image.gif", "img_girl2.jpg"]);
    assert_eq!(imgs, expected);
}

#[test]
fn extract_links_is_union() {
    let links = extract_links(data_path("images.md")).unwrap();
    assert_eq!(links.len(), 3);
}

#[tokio::test]
async fn verify_hyperlinks() {
    let invalid = verify(data_path("links.md"), CheckerOptions::default())
        .await
        .unwrap();
    let expected = set(&["www.google.com", "other_file.md", "/tmp/other_file.md", "#xxx"]);
    assert_eq!(invalid, expected);
}

#[tokio::test]
async fn verify_imgs() {
    let invalid = verify(data_path("images.md"), CheckerOptions::default())
        .await
        .unwrap();
    assert_eq!(invalid, set(&["../image.gif", "img_girl2.jpg"]));
}

#[tokio::test]
async fn verify_github() {
    let invalid = verify(data_path("github.md"), CheckerOptions::github())
        .await
        .unwrap();
    assert!(invalid.is_empty(), "unexpected invalid links: {:?}", invalid);
}

#[tokio::test]
async fn verify_github_anchors_need_the_option() {
    let invalid = verify(data_path("github.md"), CheckerOptions::default())
        .await
        .unwrap();
    assert!(invalid.contains("#section-example-v10"));
    assert!(!invalid.contains("#top"));
}

#[tokio::test]
async fn verify_bitbucket() {
    let invalid = verify(data_path("bitbucket.md"), CheckerOptions::bitbucket())
        .await
        .unwrap();
    assert!(invalid.is_empty(), "unexpected invalid links: {:?}", invalid);
}

#[tokio::test]
async fn verify_non_existing_file() {
    let invalid = verify(data_path("invalid.md"), CheckerOptions::default())
        .await
        .unwrap();
    assert_eq!(invalid, set(&["non_existing_file.md"]));

    let mut checker = FileChecker::new(data_path("invalid.md"), CheckerOptions::default()).unwrap();
    assert!(!checker.check_markdown().await.unwrap());
}

#[tokio::test]
async fn directory_without_readme() {
    let mut checker =
        FileChecker::new(data_path("missing_readme.md"), CheckerOptions::default()).unwrap();
    assert!(!checker.check_markdown().await.unwrap());
    let reason = checker.invalid_links().get("no_readme_dir").unwrap();
    assert!(matches!(reason, Reason::MissingReadme(_)));
    assert!(reason.to_string().starts_with("missing README"));
}

#[tokio::test]
async fn verify_is_idempotent() {
    let mut checker = FileChecker::new(data_path("links.md"), CheckerOptions::default()).unwrap();
    checker.check_markdown().await.unwrap();
    let first_valid = checker.valid_links().clone();
    let first_invalid = checker.invalid_links().clone();

    checker.check_markdown().await.unwrap();
    assert_eq!(&first_valid, checker.valid_links());
    assert_eq!(&first_invalid, checker.invalid_links());
}

#[tokio::test]
async fn unreachable_url_only_fails_when_checked() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("page.md");
    fs::write(&page, "[down](http://127.0.0.1:9/)\n\n[down anchor](http://127.0.0.1:9/page#part)\n")
        .unwrap();

    let unchecked = verify(&page, CheckerOptions::default()).await.unwrap();
    assert!(unchecked.is_empty());

    let checked = verify(&page, CheckerOptions::default().reachable(true))
        .await
        .unwrap();
    assert_eq!(checked.len(), 2);
}

#[tokio::test]
async fn repository_root_links_resolve_through_ancestors() {
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("docs/deep")).unwrap();
    fs::write(repo.path().join("CONTRIBUTING.md"), "<a name=\"setup\"></a>\n").unwrap();
    let page = repo.path().join("docs/deep/page.md");
    fs::write(&page, "[contributing](/CONTRIBUTING.md) [setup](/CONTRIBUTING.md#setup)\n").unwrap();

    let invalid = verify(&page, CheckerOptions::default()).await.unwrap();
    assert!(invalid.is_empty(), "unexpected invalid links: {:?}", invalid);
}

#[tokio::test]
async fn unreadable_source_is_an_error() {
    let result = verify(data_path("does_not_exist.md"), CheckerOptions::default()).await;
    assert!(matches!(result, Err(Error::Io { .. })));
}
