//! Destination paths
//!
//! An artifact is saved as `save_as` when given, otherwise as
//! `{save_to}/{artifactId}.{packaging}` where `save_to` falls back to the
//! logical name of the request. The result has `$VAR`, `${VAR}` and a leading
//! `~` expanded and is made absolute against the current directory.

use std::path::{Component, Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::{Result, invalid_path};

/// Where an artifact requested under `name` ends up
pub fn target_path(
    name: &str,
    coordinate: &Coordinate,
    save_to: Option<&str>,
    save_as: Option<&str>,
) -> Result<PathBuf> {
    if let Some(save_as) = non_empty(save_as) {
        return to_absolute_path(save_as);
    }

    let directory = non_empty(save_to).unwrap_or(name);
    let directory = directory.trim_end_matches('/');
    let file = format!("{}.{}", coordinate.artifact_id(), coordinate.packaging());
    let joined = if directory.is_empty() {
        format!("/{file}")
    } else {
        format!("{directory}/{file}")
    };
    to_absolute_path(&joined)
}

/// Expand variables and `~`, then make `raw` absolute and lexically normal
pub fn to_absolute_path(raw: &str) -> Result<PathBuf> {
    if raw.trim().is_empty() {
        return Err(invalid_path(raw, "path is empty"));
    }

    let expanded = expand_user(&expand_vars(raw, |name| std::env::var(name).ok()));
    let path = PathBuf::from(&expanded);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(|e| invalid_path(raw, format!("cannot read current directory: {e}")))?
            .join(path)
    };
    Ok(normalize(&absolute))
}

/// Replace `$NAME` and `${NAME}` with `lookup(NAME)`; unknown variables stay as written
fn expand_vars(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, len) = match after.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            },
            None => {
                let end = after
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                (&after[..end], end)
            }
        };

        let value = if name.is_empty() { None } else { lookup(name) };
        match value {
            Some(value) => out.push_str(&value),
            None => {
                out.push('$');
                out.push_str(&after[..len]);
            }
        }
        rest = &after[len..];
    }

    out.push_str(rest);
    out
}

fn expand_user(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix('~') else {
        return raw.to_string();
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        return raw.to_string();
    }
    match dirs::home_dir() {
        Some(home) => format!("{}{rest}", home.display()),
        None => raw.to_string(),
    }
}

// Resolves `.` and `..` without touching the file system
fn normalize(path: &Path) -> PathBuf {
    let mut normal = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normal.pop();
            }
            other => normal.push(other.as_os_str()),
        }
    }
    normal
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
