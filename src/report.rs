//! Reporting convergence results
//!
//! Results are rendered either as styled lines for a terminal or as JSON
//! documents for scripts.

use console::Style;
use serde::Serialize;

use crate::converge::ConvergenceResult;
use crate::error::{Result, io_error};
use crate::resolver::ResolvedArtifact;

/// Result of converging one named artifact
#[derive(Debug, Serialize)]
pub struct ArtifactReport<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub result: &'a ConvergenceResult,
    pub comment: String,
}

impl<'a> ArtifactReport<'a> {
    pub fn new(name: &'a str, result: &'a ConvergenceResult) -> Self {
        Self {
            name,
            result,
            comment: comment(name, result),
        }
    }
}

/// One-line plain description of a result
pub fn comment(name: &str, result: &ConvergenceResult) -> String {
    match result {
        ConvergenceResult::Unchanged { current } => format!(
            "Artifact from {} is already saved in {}",
            current.url,
            current.path.display()
        ),
        ConvergenceResult::WouldChange { new, .. } => format!(
            "'{name}' would change: {} would be saved to {}",
            new.url,
            new.path.display()
        ),
        ConvergenceResult::Changed { new, .. } => format!(
            "'{name}' changed: {} saved to {}",
            new.url,
            new.path.display()
        ),
        ConvergenceResult::Failed { reason, .. } => format!("'{name}' failed: {reason}"),
    }
}

/// Styled, possibly multi-line rendering for a terminal
pub fn render_human(name: &str, result: &ConvergenceResult) -> String {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    match result {
        ConvergenceResult::Unchanged { current } => format!(
            "{} {}\n  {} {}",
            Style::new().green().apply_to("unchanged"),
            bold.apply_to(name),
            dim.apply_to("path:"),
            current.path.display()
        ),
        ConvergenceResult::WouldChange { old, new } => {
            let mut out = format!(
                "{} {}\n  {} {}\n  {} {}",
                Style::new().yellow().apply_to("would change"),
                bold.apply_to(name),
                dim.apply_to("url: "),
                new.url,
                dim.apply_to("path:"),
                new.path.display()
            );
            if let Some(old) = old {
                out.push_str(&format!("\n  {} {}", dim.apply_to("was: "), old.url));
            }
            out
        }
        ConvergenceResult::Changed { old, new, summary } => {
            let mut out = format!(
                "{} {}\n  {} {}\n  {} {} ({} bytes)",
                Style::new().cyan().apply_to("changed"),
                bold.apply_to(name),
                dim.apply_to("url: "),
                new.url,
                dim.apply_to("path:"),
                new.path.display(),
                summary.bytes_written
            );
            if let Some(old) = old {
                out.push_str(&format!("\n  {} {}", dim.apply_to("was: "), old.url));
            }
            if let Some(checksum) = &summary.checksum {
                out.push_str(&format!("\n  {} {checksum}", dim.apply_to("md5: ")));
            }
            out
        }
        ConvergenceResult::Failed { reason, .. } => format!(
            "{} {}\n  {}",
            Style::new().red().bold().apply_to("failed"),
            bold.apply_to(name),
            reason
        ),
    }
}

/// Styled rendering of a resolution
pub fn render_resolved(resolved: &ResolvedArtifact) -> String {
    let dim = Style::new().dim();
    format!(
        "{} {}\n{} {}",
        dim.apply_to("version:"),
        Style::new().bold().apply_to(&resolved.version),
        dim.apply_to("url:    "),
        resolved.download_url
    )
}

/// Pretty-printed JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| io_error(format!("Failed to render JSON: {e}")))
}
