use crate::dataset::record::{LineOutcome, SkipReason, StrokeEntry, parse_line};
use crate::foundation::error::{BihuaError, BihuaResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Summary of a dataset load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Number of records accepted (including ones later replaced by a duplicate).
    pub loaded: usize,
    /// Rejected lines as `(1-based line number, reason)`.
    pub skipped: Vec<(usize, SkipReason)>,
}

/// In-memory stroke dataset keyed by character.
///
/// Built once by the host and passed by reference to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct StrokeDataset {
    entries: HashMap<char, StrokeEntry>,
}

impl StrokeDataset {
    /// Empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON Lines dataset from a reader, discarding the load report.
    pub fn from_reader<R: BufRead>(r: R) -> BihuaResult<Self> {
        Self::load_with_report(r).map(|(ds, _)| ds)
    }

    /// Parse a JSON Lines dataset held in memory.
    pub fn from_json_lines(text: &str) -> Self {
        let mut ds = Self::new();
        let mut report = LoadReport::default();
        for (i, line) in text.lines().enumerate() {
            ds.ingest(i + 1, Some(line), &mut report);
        }
        log_report(&report);
        ds
    }

    /// Parse a JSON Lines dataset file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BihuaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BihuaError::dataset(format!("open stroke dataset '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a JSON Lines dataset and return the per-line report.
    ///
    /// Corrupt lines (bad JSON, bad UTF-8, inconsistent stroke/median counts) are skipped. Only a
    /// failing reader is an error.
    #[tracing::instrument(skip(r))]
    pub fn load_with_report<R: BufRead>(mut r: R) -> BihuaResult<(Self, LoadReport)> {
        let mut ds = Self::new();
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            let n = r
                .read_until(b'\n', &mut buf)
                .map_err(|e| BihuaError::dataset(format!("read stroke dataset: {e}")))?;
            if n == 0 {
                break;
            }
            line_no += 1;
            let line = std::str::from_utf8(&buf).ok();
            ds.ingest(line_no, line, &mut report);
        }
        log_report(&report);
        Ok((ds, report))
    }

    fn ingest(&mut self, line_no: usize, line: Option<&str>, report: &mut LoadReport) {
        let outcome = match line {
            Some(line) => parse_line(line),
            None => Some(LineOutcome::Skipped(SkipReason::InvalidUtf8)),
        };
        match outcome {
            None => {}
            Some(LineOutcome::Loaded(entry)) => {
                report.loaded += 1;
                self.insert(entry);
            }
            Some(LineOutcome::Skipped(reason)) => {
                tracing::warn!(line = line_no, %reason, "skipping stroke dataset line");
                report.skipped.push((line_no, reason));
            }
        }
    }

    /// Insert or replace the entry for `entry.character`.
    pub fn insert(&mut self, entry: StrokeEntry) {
        if let Some(old) = self.entries.insert(entry.character, entry) {
            tracing::debug!(character = %old.character, "replacing duplicate stroke entry");
        }
    }

    /// Look up a character. `None` means no animation is available for it.
    pub fn get(&self, ch: char) -> Option<&StrokeEntry> {
        self.entries.get(&ch)
    }

    /// Return `true` when stroke data exists for `ch`.
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no character is loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over loaded characters in unspecified order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

fn log_report(report: &LoadReport) {
    tracing::debug!(
        loaded = report.loaded,
        skipped = report.skipped.len(),
        "stroke dataset loaded"
    );
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/store.rs"]
mod tests;
