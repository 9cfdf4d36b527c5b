//! Observed state file
//!
//! Records which artifact URL was last materialized at each destination path:
//!
//! ```json
//! {
//!   "entries": {
//!     "/opt/tools/demo.jar": "https://repo1.maven.org/maven2/org/example/demo/1.2.0/demo-1.2.0.jar"
//!   }
//! }
//! ```
//!
//! A missing file is an empty record. Writes go to a temp file in the same
//! directory that is then renamed over the state file.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::converge::ObservedStateStore;
use crate::error::state::{read_failed, write_failed};
use crate::error::{Result, io_error};

/// Directory under the user's data directory
const STATE_DIR: &str = "mvnfetch";

/// File name of the default state file
pub const STATE_FILE: &str = "state.json";

/// Default state file location (e.g. `~/.local/share/mvnfetch/state.json`)
pub fn default_state_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| io_error("Could not determine user data directory"))?;
    Ok(base.join(STATE_DIR).join(STATE_FILE))
}

/// On-disk layout of the state file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// [`ObservedStateStore`] backed by a JSON file
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole record
    pub fn load(&self) -> Result<StateFile> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file yet");
                return Ok(StateFile::default());
            }
            Err(e) => return Err(read_failed(self.path.display().to_string(), e)),
        };

        if content.trim().is_empty() {
            return Ok(StateFile::default());
        }

        serde_json::from_str(&content).map_err(|e| read_failed(self.path.display().to_string(), e))
    }

    /// Replace the whole record
    pub fn save(&self, state: &StateFile) -> Result<()> {
        let fail = |reason: String| write_failed(self.path.display().to_string(), reason);

        let directory = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(directory).map_err(|e| fail(e.to_string()))?;

        let mut json = serde_json::to_string_pretty(state).map_err(|e| fail(e.to_string()))?;
        json.push('\n');
        let mut temp = NamedTempFile::new_in(directory).map_err(|e| fail(e.to_string()))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| fail(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| fail(e.error.to_string()))?;

        debug!(path = %self.path.display(), entries = state.entries.len(), "saved state file");
        Ok(())
    }
}

impl ObservedStateStore for JsonStateStore {
    fn read_observed_state(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    fn write_observed_state(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.load()?;
        state.entries.insert(key.to_string(), value.to_string());
        self.save(&state)
    }
}
