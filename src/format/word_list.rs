//! Word-list input: one label per line.
//!
//! Trailing `\n` / `\r\n` are stripped; blank lines are kept as empty labels
//! so line numbers and node IDs stay aligned.

use std::io::BufRead;
use std::path::Path;

use memmap2::Mmap;

use crate::types::{GraphError, GraphResult};

/// Buffered reader for word-list files.
pub struct WordListReader;

impl WordListReader {
    /// Read every line of a word-list file.
    pub fn read_from_file(path: &Path) -> GraphResult<Vec<String>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read every line from any buffered reader.
    ///
    /// Invalid UTF-8 is reported as [`GraphError::InvalidUtf8`] with the byte
    /// offset into the whole input, matching [`MmapWordList::open`].
    pub fn read_from(mut reader: impl BufRead) -> GraphResult<Vec<String>> {
        let mut words = Vec::new();
        let mut buf = Vec::new();
        let mut offset = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = std::str::from_utf8(&buf)
                .map_err(|e| GraphError::InvalidUtf8(offset + e.valid_up_to()))?;
            words.push(line.to_string());
            offset += read;
        }
        Ok(words)
    }
}

/// Read-only memory-mapped word list.
///
/// The file is validated as UTF-8 once when opened.
pub struct MmapWordList {
    mmap: Option<Mmap>,
}

impl MmapWordList {
    /// Open and validate a word-list file.
    pub fn open(path: &Path) -> GraphResult<Self> {
        let file = std::fs::File::open(path)?;

        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Self { mmap: None });
        }

        let mmap = unsafe { Mmap::map(&file)? };
        std::str::from_utf8(&mmap).map_err(|e| GraphError::InvalidUtf8(e.valid_up_to()))?;

        Ok(Self { mmap: Some(mmap) })
    }

    /// The whole file as text.
    pub fn as_str(&self) -> &str {
        match &self.mmap {
            Some(mmap) => std::str::from_utf8(mmap).unwrap_or_default(),
            None => "",
        }
    }

    /// Iterate over the lines of the file.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.as_str().lines()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines().count()
    }

    /// Whether the file has no lines.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Size of the mapped file in bytes.
    pub fn byte_len(&self) -> usize {
        self.mmap.as_ref().map(|m| m.len()).unwrap_or(0)
    }
}
