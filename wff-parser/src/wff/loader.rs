//! Expression batch loading
//!
//! This module provides `ExpressionLoader`, which reads expression batches from files or
//! strings. A batch file has a header line with the number of expressions, followed by one
//! expression per line:
//!
//!     3
//!     (\neg p0)
//!     (\wedge p0)
//!     true
//!
//! The header is authoritative. Lines past the declared count are ignored, and declared
//! entries with no line behind them are reported as [BatchEntry::Missing] (and count as
//! invalid) rather than failing the whole batch.

use crate::wff::lexing::is_blank;
use crate::wff::validation::validate;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading a batch
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header: the first line must hold the number of expressions")]
    MissingHeader,
    #[error("invalid header {line:?}: the first line must hold the number of expressions")]
    InvalidHeader { line: String },
}

/// One declared entry of a batch, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEntry {
    Present { index: usize, expression: String },
    Missing { index: usize },
}

impl BatchEntry {
    pub fn index(&self) -> usize {
        match self {
            BatchEntry::Present { index, .. } | BatchEntry::Missing { index } => *index,
        }
    }

    pub fn expression(&self) -> Option<&str> {
        match self {
            BatchEntry::Present { expression, .. } => Some(expression),
            BatchEntry::Missing { .. } => None,
        }
    }

    /// Missing entries are never valid.
    pub fn is_valid(&self) -> bool {
        self.expression().is_some_and(validate)
    }
}

/// A parsed batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Number of expressions the header announces.
    pub declared: usize,
    /// Number of lines in the source, header included.
    pub line_count: usize,
    pub entries: Vec<BatchEntry>,
}

impl Batch {
    /// Validity of every entry, in order.
    pub fn results(&self) -> Vec<bool> {
        self.entries.iter().map(BatchEntry::is_valid).collect()
    }
}

/// Batch loader
pub struct ExpressionLoader {
    source: String,
}

impl ExpressionLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(ExpressionLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ExpressionLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Splits the source into header and entries.
    ///
    /// Each expression line is trimmed of surrounding blanks.
    pub fn batch(&self) -> Result<Batch, LoaderError> {
        let lines: Vec<&str> = self.source.lines().collect();
        let header = lines.first().ok_or(LoaderError::MissingHeader)?;
        let declared = parse_header(header)?;

        let entries = (1..=declared)
            .map(|index| match lines.get(index) {
                Some(line) => BatchEntry::Present {
                    index,
                    expression: line.trim_matches(is_blank).to_string(),
                },
                None => BatchEntry::Missing { index },
            })
            .collect();

        Ok(Batch {
            declared,
            line_count: lines.len(),
            entries,
        })
    }
}

fn parse_header(line: &str) -> Result<usize, LoaderError> {
    line.trim_matches(is_blank)
        .parse::<usize>()
        .map_err(|_| LoaderError::InvalidHeader {
            line: line.to_string(),
        })
}
