//! Common test utilities for mvnfetch integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use url::Url;

pub const GROUP_ID: &str = "org.example";
pub const ARTIFACT_ID: &str = "demo";

/// A Maven-layout repository on disk, served through `file://` URLs
pub struct TestRepository {
    temp: TempDir,
    pub root: PathBuf,
}

impl TestRepository {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { temp, root }
    }

    /// Repository base URL
    pub fn url(&self) -> String {
        Url::from_directory_path(&self.root)
            .expect("temp dir is absolute")
            .to_string()
    }

    fn artifact_dir(&self) -> PathBuf {
        self.root
            .join(GROUP_ID.replace('.', "/"))
            .join(ARTIFACT_ID)
    }

    /// URL of a published file
    pub fn file_url(&self, version_dir: &str, file_version: &str) -> String {
        let path = self
            .artifact_dir()
            .join(version_dir)
            .join(format!("{ARTIFACT_ID}-{file_version}.jar"));
        Url::from_file_path(path)
            .expect("temp dir is absolute")
            .to_string()
    }

    /// Write the artifact-level maven-metadata.xml
    pub fn write_metadata(&self, release: Option<&str>, versions: &[&str]) {
        let release = release
            .map(|r| format!("    <release>{r}</release>\n"))
            .unwrap_or_default();
        let versions: String = versions
            .iter()
            .map(|v| format!("      <version>{v}</version>\n"))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<metadata>\n  <groupId>{GROUP_ID}</groupId>\n  \
             <artifactId>{ARTIFACT_ID}</artifactId>\n  <versioning>\n{release}    <versions>\n{versions}    \
             </versions>\n    <lastUpdated>20240101000000</lastUpdated>\n  </versioning>\n</metadata>\n"
        );
        write(&self.artifact_dir().join("maven-metadata.xml"), xml.as_bytes());
    }

    /// Publish a release build with its MD5 file
    pub fn publish(&self, version: &str, content: &str) -> PathBuf {
        let path = self.publish_without_checksum(version, version, content);
        let digest = format!("{:x}", md5::compute(content.as_bytes()));
        write(&checksum_path(&path), digest.as_bytes());
        path
    }

    /// Publish a build whose MD5 file doesn't match the content
    pub fn publish_corrupt(&self, version: &str, content: &str) -> PathBuf {
        let path = self.publish_without_checksum(version, version, content);
        write(&checksum_path(&path), b"0123456789abcdef0123456789abcdef");
        path
    }

    /// Publish a build without an MD5 file
    pub fn publish_without_checksum(&self, version_dir: &str, file_version: &str, content: &str) -> PathBuf {
        let path = self
            .artifact_dir()
            .join(version_dir)
            .join(format!("{ARTIFACT_ID}-{file_version}.jar"));
        write(&path, content.as_bytes());
        path
    }

    /// Publish a timestamped snapshot build and its version-level metadata
    pub fn publish_snapshot(&self, version: &str, timestamp: &str, build_number: &str, content: &str) {
        let file_version = version.replace("SNAPSHOT", &format!("{timestamp}-{build_number}"));
        self.publish_without_checksum(version, &file_version, content);

        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<metadata>\n  <groupId>{GROUP_ID}</groupId>\n  \
             <artifactId>{ARTIFACT_ID}</artifactId>\n  <version>{version}</version>\n  <versioning>\n    \
             <snapshot>\n      <timestamp>{timestamp}</timestamp>\n      <buildNumber>{build_number}</buildNumber>\n    \
             </snapshot>\n  </versioning>\n</metadata>\n"
        );
        write(
            &self.artifact_dir().join(version).join("maven-metadata.xml"),
            xml.as_bytes(),
        );
    }
}

/// A scratch directory for targets and the state file
pub struct TestWorkspace {
    temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    pub fn state_file(&self) -> PathBuf {
        self.path.join("state").join("state.json")
    }

    /// Observed state entries keyed by target path
    pub fn state_entries(&self) -> serde_json::Map<String, serde_json::Value> {
        let content = std::fs::read_to_string(self.state_file()).expect("Failed to read state file");
        let value: serde_json::Value = serde_json::from_str(&content).expect("state file is JSON");
        value["entries"]
            .as_object()
            .cloned()
            .expect("state file has entries")
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content.as_bytes());
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// mvnfetch running in this workspace with its own state file
    pub fn mvnfetch(&self) -> Command {
        let mut cmd = mvnfetch_cmd();
        cmd.current_dir(&self.path)
            .env("MVNFETCH_STATE_FILE", self.state_file())
            .env_remove("MVNFETCH_REPO_URL")
            .env_remove("RUST_LOG");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn mvnfetch_cmd() -> Command {
    Command::cargo_bin("mvnfetch").expect("mvnfetch binary is built")
}

fn checksum_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.md5", path.display()))
}

fn write(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
