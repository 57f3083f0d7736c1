//! Dictionary preparation.
//!
//! Raw lines are filtered and case-folded according to [`PrepareOptions`], then
//! sorted and deduplicated so that the classifier never sees the same word
//! twice. The resulting word order is sorted, which keeps downstream statistics
//! deterministic.

use crate::error::Result;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Filtering applied to each dictionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareOptions {
    /// Drop lines containing anything other than letters (checked after
    /// lower-casing, so `"Apple"` passes but `"don't"` does not).
    pub filter_non_alpha: bool,
    /// Lower-case lines before deduplication.
    pub filter_case: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            filter_non_alpha: true,
            filter_case: true,
        }
    }
}

impl PrepareOptions {
    /// Apply the options to one line, returning the word to keep.
    pub fn apply(&self, line: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }

        let folded = line.to_lowercase();
        if self.filter_non_alpha && !folded.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }

        if self.filter_case {
            Some(folded)
        } else {
            Some(line.to_owned())
        }
    }
}

/// A deduplicated word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    lines: usize,
}

impl Dictionary {
    /// Prepare an in-memory sequence of lines.
    pub fn prepare<I, S>(lines: I, options: &PrepareOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = lines.into_iter().map(|l| l.as_ref().to_owned()).collect();
        Self::from_lines(raw, options)
    }

    /// Read and prepare lines from `reader`. Line endings (`\n` or `\r\n`) are
    /// stripped. Bytes that are not UTF-8 decode to U+FFFD, so a damaged line is
    /// dropped by the letter filter instead of failing the whole load.
    pub fn from_reader<R: BufRead>(mut reader: R, options: &PrepareOptions) -> Result<Self> {
        let mut raw = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            raw.push(String::from_utf8_lossy(&buf).into_owned());
        }

        Ok(Self::from_lines(raw, options))
    }

    /// Open the dictionary file at `path`.
    pub fn open<P: AsRef<Path>>(path: P, options: &PrepareOptions) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dictionary");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), options)
    }

    fn from_lines(mut raw: Vec<String>, options: &PrepareOptions) -> Self {
        // Blank lines are not dictionary lines and are not counted.
        raw.retain(|line| !line.is_empty());
        let lines = raw.len();

        let mut words: Vec<String> = raw
            .into_par_iter()
            .filter_map(|line| options.apply(&line))
            .collect();
        let kept = words.len();

        words.par_sort_unstable();
        words.dedup();

        debug!(lines, kept, distinct = words.len(), "dictionary prepared");
        Self { words, lines }
    }

    /// Distinct words in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Non-blank lines read, including filtered ones.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
