//! MD5 side-channel checksums
//!
//! Maven repositories publish `<file>.md5` next to every artifact. The file
//! holds the hex digest, optionally followed by whitespace and the file name.

use std::io::{self, Write};

/// First token of the first non-blank line, lowercased
pub fn extract_checksum(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_ascii_lowercase)
}

/// Writer that hashes everything passing through it
pub struct HashingWriter<W> {
    inner: W,
    context: md5::Context,
    written: u64,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            context: md5::Context::new(),
            written: 0,
        }
    }

    /// Bytes written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Hex digest of the content and the inner writer
    pub fn finish(self) -> (String, W) {
        (format!("{:x}", self.context.compute()), self.inner)
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.context.consume(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
