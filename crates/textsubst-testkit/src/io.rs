//! Writers with scripted failure behaviour

use std::io::{self, Write};

/// An `io::Write` that accepts a fixed number of bytes, then fails
///
/// Everything accepted before the failure is kept in [`FailingWriter::written`],
/// so tests can check exactly how far an expansion got.
#[derive(Debug)]
pub struct FailingWriter {
    budget: usize,
    written: Vec<u8>,
}

impl FailingWriter {
    /// Create a writer that fails once more than `budget` bytes are written
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }

    /// Bytes accepted so far
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Accepted bytes as (lossy) text
    pub fn written_str(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.budget - self.written.len();
        if room == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "FailingWriter budget exhausted",
            ));
        }
        let n = buf.len().min(room);
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_up_to_budget() {
        let mut writer = FailingWriter::new(5);
        writer.write_all(b"hello").unwrap();
        assert_eq!(writer.written(), b"hello");
    }

    #[test]
    fn test_fails_past_budget() {
        let mut writer = FailingWriter::new(3);
        let err = writer.write_all(b"hello").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(writer.written_str(), "hel");
    }

    #[test]
    fn test_zero_budget_fails_immediately() {
        let mut writer = FailingWriter::new(0);
        assert!(writer.write_all(b"x").is_err());
        assert!(writer.written().is_empty());
    }
}
