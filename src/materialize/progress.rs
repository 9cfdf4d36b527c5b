//! Progress display for downloads

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for one artifact download
///
/// Draws to stderr, and only when stderr is a terminal.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Bar sized to `length` when known, otherwise a spinner
    pub fn new(label: &str, length: Option<u64>, enabled: bool) -> Self {
        if !enabled || !Term::stderr().is_term() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = match length {
            Some(length) => {
                let bar = ProgressBar::new(length);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                {
                    bar.set_style(style.progress_chars("#>-"));
                }
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {bytes} {msg}")
                {
                    bar.set_style(style);
                }
                bar
            }
        };
        bar.set_message(shorten(label));
        Self { bar }
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

// Long URLs keep their tail, which names the file
fn shorten(label: &str) -> String {
    let count = label.chars().count();
    if count > 50 {
        let tail: String = label.chars().skip(count - 47).collect();
        format!("...{tail}")
    } else {
        label.to_string()
    }
}
