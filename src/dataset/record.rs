use serde::{Deserialize, Serialize};

/// A median point in glyph units, `[x, y]`.
pub type MedianPoint = [f64; 2];

/// Raw JSON shape of one dataset line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StrokeRecordDef {
    pub(crate) character: String,
    pub(crate) strokes: Vec<String>,
    pub(crate) medians: Vec<Vec<MedianPoint>>,
}

/// Stroke data for a single character.
///
/// `strokes[i]` and `medians[i]` describe the same physical stroke; the order is the canonical
/// writing order.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeEntry {
    /// Lookup key.
    pub character: char,
    /// SVG path descriptions of the stroke outlines.
    pub strokes: Vec<String>,
    /// Centerline polylines, index-aligned with `strokes`.
    pub medians: Vec<Vec<MedianPoint>>,
}

impl StrokeEntry {
    /// Number of strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

/// Why a dataset line was not loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    /// Line is not a JSON object of the expected shape.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// `character` is empty or more than one glyph.
    #[error("character {0:?} is not a single glyph")]
    BadCharacter(String),
    /// `strokes` and `medians` have different lengths.
    #[error("{strokes} strokes but {medians} medians")]
    CountMismatch {
        /// Number of stroke outlines.
        strokes: usize,
        /// Number of medians.
        medians: usize,
    },
    /// Line bytes are not valid UTF-8.
    #[error("line is not valid utf-8")]
    InvalidUtf8,
}

/// Result of parsing one dataset line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Record accepted.
    Loaded(StrokeEntry),
    /// Record rejected; loading continues with the next line.
    Skipped(SkipReason),
}

/// Parse one line. Blank lines yield `None`.
pub(crate) fn parse_line(line: &str) -> Option<LineOutcome> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let def: StrokeRecordDef = match serde_json::from_str(line) {
        Ok(def) => def,
        Err(e) => return Some(LineOutcome::Skipped(SkipReason::InvalidRecord(e.to_string()))),
    };
    Some(match entry_from_def(def) {
        Ok(entry) => LineOutcome::Loaded(entry),
        Err(reason) => LineOutcome::Skipped(reason),
    })
}

fn entry_from_def(def: StrokeRecordDef) -> Result<StrokeEntry, SkipReason> {
    let mut chars = def.character.chars();
    let character = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(SkipReason::BadCharacter(def.character)),
    };
    if def.strokes.len() != def.medians.len() {
        return Err(SkipReason::CountMismatch {
            strokes: def.strokes.len(),
            medians: def.medians.len(),
        });
    }
    Ok(StrokeEntry {
        character,
        strokes: def.strokes,
        medians: def.medians,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/record.rs"]
mod tests;
