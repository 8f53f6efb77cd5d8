//! Output sinks for generated words

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordlistError};

/// Destination for generated words.
///
/// Write failures are returned as-is; retrying or giving up is the caller's
/// call.
pub trait WordSink {
    fn write_word(&mut self, word: &str) -> io::Result<()>;

    /// Flush anything buffered; called once when a run stops
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Newline-delimited writer that tracks how much it wrote
pub struct LineSink<W: Write> {
    writer: W,
    words: u64,
    bytes: u64,
}

impl LineSink<BufWriter<File>> {
    /// Create (or truncate) `path` behind a buffered writer
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| {
            WordlistError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words: 0,
            bytes: 0,
        }
    }

    pub fn words(&self) -> u64 {
        self.words
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> WordSink for LineSink<W> {
    fn write_word(&mut self, word: &str) -> io::Result<()> {
        self.writer.write_all(word.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.words += 1;
        self.bytes += word.len() as u64 + 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl WordSink for Vec<String> {
    fn write_word(&mut self, word: &str) -> io::Result<()> {
        self.push(word.to_string());
        Ok(())
    }
}
