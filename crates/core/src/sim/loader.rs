//! Source Loader.
//!
//! This module reads program text and prepares it for linking. It performs:
//! 1. **Comment Stripping:** Everything from `#` to end of line is dropped.
//! 2. **Label Extraction:** A line whose last character is `:` defines a label bound to
//!    the index of the next instruction. Names containing digits are rejected; duplicates
//!    are reported and the last definition wins.
//! 3. **Compaction:** Blank lines and label lines are dropped; every remaining line keeps
//!    its 1-based source line number.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::common::constants::{COMMENT_CHAR, LABEL_SUFFIX};
use crate::common::{DiagnosticKind, Diagnostics, SimError};

/// Label name to program index.
pub type LabelTable = HashMap<String, usize>;

/// One compacted program line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original text.
    pub line: usize,
    /// Comment-free, trimmed instruction text.
    pub text: String,
}

/// Output of the loader: compacted lines and the label table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedSource {
    /// Instruction lines in program order; the position is the word index.
    pub lines: Vec<SourceLine>,
    /// Label definitions.
    pub labels: LabelTable,
}

/// Removes a trailing `#` comment and surrounding whitespace.
pub fn strip_comment(raw: &str) -> &str {
    raw.split_once(COMMENT_CHAR).map_or(raw, |(code, _)| code).trim()
}

/// Loads program text.
///
/// # Arguments
///
/// * `source` - Program text, one instruction or label definition per line.
/// * `diagnostics` - Collector for label faults.
///
/// # Returns
///
/// The compacted instruction lines and the label table.
pub fn load(source: &str, diagnostics: &mut Diagnostics) -> LoadedSource {
    let mut loaded = LoadedSource::default();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = strip_comment(raw);
        if text.is_empty() {
            continue;
        }

        if let Some(name) = text.strip_suffix(LABEL_SUFFIX) {
            define_label(&mut loaded, name.trim(), line, diagnostics);
            continue;
        }

        loaded.lines.push(SourceLine {
            line,
            text: text.to_string(),
        });
    }

    tracing::debug!(
        instructions = loaded.lines.len(),
        labels = loaded.labels.len(),
        "loaded program source"
    );
    loaded
}

fn define_label(loaded: &mut LoadedSource, name: &str, line: usize, diagnostics: &mut Diagnostics) {
    if name.is_empty() {
        diagnostics.push(line, DiagnosticKind::EmptyLabel);
        return;
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        diagnostics.push(line, DiagnosticKind::LabelContainsDigits(name.to_string()));
        return;
    }
    let index = loaded.lines.len();
    if loaded.labels.insert(name.to_string(), index).is_some() {
        diagnostics.push(line, DiagnosticKind::DuplicateLabel(name.to_string()));
    }
}

/// Reads program text from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SimError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}
