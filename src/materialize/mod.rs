//! Writing artifacts to disk
//!
//! [`RepositoryMaterializer`] is the [`FileState`] used by the binary. A
//! download is streamed into a temp file in the destination directory, checked
//! against the published MD5 (when there is one), and then renamed over the
//! destination. A failed or corrupt download never replaces an existing file.

mod progress;

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::converge::{FileState, MaterializeSummary};
use crate::error::metadata::checksum_mismatch;
use crate::error::{Result, materialization_failure};
use crate::repository::RepositoryClient;
use crate::repository::checksum::{HashingWriter, extract_checksum};

pub use progress::DownloadProgress;

/// Materializes repository resources through a [`RepositoryClient`]
pub struct RepositoryMaterializer<'a> {
    client: &'a RepositoryClient,
    show_progress: bool,
}

impl<'a> RepositoryMaterializer<'a> {
    pub fn new(client: &'a RepositoryClient) -> Self {
        Self {
            client,
            show_progress: true,
        }
    }

    /// Enable or disable the download progress bar
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Published checksum, or `None` when the repository has none
    fn expected_checksum(&self, destination: &Path, checksum_url: &str) -> Result<Option<String>> {
        match self.client.fetch_text(checksum_url) {
            Ok(text) => Ok(extract_checksum(&text)),
            Err(e) if e.is_not_found() => {
                debug!(url = %checksum_url, "no checksum published, skipping verification");
                Ok(None)
            }
            Err(e) => Err(materialization_failure(
                destination.display().to_string(),
                format!("cannot read checksum {checksum_url}: {e}"),
            )),
        }
    }
}

impl FileState for RepositoryMaterializer<'_> {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn materialize_file(
        &self,
        destination: &Path,
        source_url: &str,
        checksum_url: &str,
        create_parent_dirs: bool,
    ) -> Result<MaterializeSummary> {
        let fail = |reason: String| materialization_failure(destination.display().to_string(), reason);

        let directory = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if create_parent_dirs {
            std::fs::create_dir_all(directory)
                .map_err(|e| fail(format!("cannot create {}: {e}", directory.display())))?;
        }

        let expected = self.expected_checksum(destination, checksum_url)?;

        let download = self
            .client
            .open(source_url)
            .map_err(|e| fail(format!("cannot download {source_url}: {e}")))?;

        let progress = DownloadProgress::new(source_url, download.length, self.show_progress);
        let temp = NamedTempFile::new_in(directory)
            .map_err(|e| fail(format!("cannot create temp file: {e}")))?;

        let mut writer = HashingWriter::new(BufWriter::new(temp));
        let mut reader = progress.bar().wrap_read(download.reader);
        if let Err(e) = io::copy(&mut reader, &mut writer).and_then(|_| writer.flush()) {
            progress.abandon();
            return Err(fail(format!("download of {source_url} interrupted: {e}")));
        }
        progress.finish();

        let bytes_written = writer.written();
        let (actual, buffered) = writer.finish();
        let temp = buffered
            .into_inner()
            .map_err(|e| fail(e.error().to_string()))?;

        if let Some(expected) = &expected {
            if *expected != actual {
                let mismatch = checksum_mismatch(source_url, expected.as_str(), actual);
                return Err(fail(mismatch.to_string()));
            }
            debug!(checksum = %expected, "checksum verified");
        }

        let replaced = destination.exists();
        temp.persist(destination)
            .map_err(|e| fail(format!("cannot move download into place: {}", e.error)))?;

        info!(url = %source_url, path = %destination.display(), bytes = bytes_written, "saved artifact");
        Ok(MaterializeSummary {
            bytes_written,
            checksum: expected,
            replaced,
        })
    }
}
