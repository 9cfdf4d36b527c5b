//! Version catalog tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::error::MvnError;
use crate::test_fixtures::{FakeRepository, coordinate};

#[test]
fn test_metadata_url_artifact_level() {
    assert_eq!(
        VersionCatalog::<FakeRepository>::metadata_url(&coordinate(), None),
        "https://repo.example.com/maven2/org/example/demo/maven-metadata.xml"
    );
}

#[test]
fn test_metadata_url_version_level() {
    assert_eq!(
        VersionCatalog::<FakeRepository>::metadata_url(&coordinate(), Some("2.3-SNAPSHOT")),
        "https://repo.example.com/maven2/org/example/demo/2.3-SNAPSHOT/maven-metadata.xml"
    );
}

#[test]
fn test_fetch_all_keeps_document_order() {
    let repo = FakeRepository::new().with_versions(&coordinate(), None, &["1.0", "0.9", "weird"]);
    let catalog = VersionCatalog::new(&repo);
    assert_eq!(
        catalog.fetch_all(&coordinate()).unwrap(),
        vec!["1.0", "0.9", "weird"]
    );
}

#[test]
fn test_fetch_latest_prefers_release_marker() {
    let repo = FakeRepository::new().with_versions(
        &coordinate(),
        Some("1.2.0"),
        &["1.0.0", "1.2.0", "1.3.0-SNAPSHOT"],
    );
    let catalog = VersionCatalog::new(&repo);
    assert_eq!(catalog.fetch_latest(&coordinate()).unwrap(), "1.2.0");
}

#[test]
fn test_fetch_latest_falls_back_to_last_listed() {
    let repo =
        FakeRepository::new().with_versions(&coordinate(), None, &["1.0.0", "1.3.0-SNAPSHOT"]);
    let catalog = VersionCatalog::new(&repo);
    assert_eq!(catalog.fetch_latest(&coordinate()).unwrap(), "1.3.0-SNAPSHOT");
}

#[test]
fn test_fetch_latest_of_empty_catalog() {
    let repo = FakeRepository::new().with_versions(&coordinate(), None, &[]);
    let catalog = VersionCatalog::new(&repo);
    assert!(matches!(
        catalog.fetch_latest(&coordinate()).unwrap_err(),
        MvnError::NoVersionInRange { .. }
    ));
}

#[test]
fn test_missing_document_is_metadata_unavailable() {
    let repo = FakeRepository::new();
    let catalog = VersionCatalog::new(&repo);
    assert!(matches!(
        catalog.fetch_all(&coordinate()).unwrap_err(),
        MvnError::MetadataUnavailable { .. }
    ));
}

#[test]
fn test_malformed_document_is_metadata_unavailable() {
    let url = VersionCatalog::<FakeRepository>::metadata_url(&coordinate(), None);
    let repo = FakeRepository::new().with_document(url, "<metadata><versioning>");
    let catalog = VersionCatalog::new(&repo);
    assert!(matches!(
        catalog.fetch_latest(&coordinate()).unwrap_err(),
        MvnError::MetadataUnavailable { .. }
    ));
}

#[test]
fn test_fetch_snapshot_descriptor() {
    let repo = FakeRepository::new().with_snapshot(&coordinate(), "2.3-SNAPSHOT", "20230101.120000", "7");
    let catalog = VersionCatalog::new(&repo);
    let descriptor = catalog
        .fetch_snapshot_descriptor(&coordinate(), "2.3-SNAPSHOT")
        .unwrap();
    assert_eq!(
        descriptor,
        SnapshotDescriptor {
            timestamp: "20230101.120000".to_string(),
            build_number: "7".to_string(),
        }
    );
    assert_eq!(
        repo.requests(),
        vec!["https://repo.example.com/maven2/org/example/demo/2.3-SNAPSHOT/maven-metadata.xml"]
    );
}

#[test]
fn test_snapshot_document_without_snapshot_element() {
    let url = VersionCatalog::<FakeRepository>::metadata_url(&coordinate(), Some("2.3-SNAPSHOT"));
    let repo = FakeRepository::new().with_document(
        url,
        "<metadata><versioning><lastUpdated>1</lastUpdated></versioning></metadata>",
    );
    let catalog = VersionCatalog::new(&repo);
    let err = catalog
        .fetch_snapshot_descriptor(&coordinate(), "2.3-SNAPSHOT")
        .unwrap_err();
    assert!(err.to_string().contains("no snapshot element"));
}

#[test]
fn test_snapshot_descriptor_applies_to_version() {
    let descriptor = SnapshotDescriptor {
        timestamp: "20230101.120000".to_string(),
        build_number: "7".to_string(),
    };
    assert_eq!(descriptor.apply_to("2.3-SNAPSHOT"), "2.3-20230101.120000-7");
}

#[test]
fn test_sort_versions() {
    let listed: Vec<String> = ["1.10", "nightly", "1.2-beta", "1.2", "0.9", "1.2.3.4"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        sort_versions(&listed),
        vec!["0.9", "1.2", "1.2-beta", "1.10", "nightly", "1.2.3.4"]
    );
}
