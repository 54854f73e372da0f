use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::NumericMatrix;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token is not a floating-point literal. `line` and `column` are 1-based.
    #[error("line {line}, column {column}: '{token}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a numeric matrix from a whitespace-delimited text file.
///
/// One row per line, any run of whitespace between values:
///
/// ```text
/// 1.0 2.0
/// 3.0   4.0
/// 5.0	6.0
/// ```
pub fn load_file(path: &Path) -> Result<NumericMatrix, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = parse_matrix(&text)?;

    if matrix.is_ragged() {
        log::warn!(
            "{} has rows of unequal length; short rows are skipped for missing columns",
            path.display()
        );
    }
    log::info!(
        "Loaded {} rows x {} columns from {}",
        matrix.len(),
        matrix.column_count(),
        path.display()
    );

    Ok(matrix)
}

const LINE_BREAKS: &[char] = &['\n', '\r'];

/// Parse matrix text. Fails on the first non-numeric token; nothing is skipped.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line break does not
/// start an extra row.
pub fn parse_matrix(text: &str) -> Result<NumericMatrix, LoadError> {
    if text.is_empty() {
        return Ok(NumericMatrix::default());
    }
    let text = text.replace("\r\n", "\n");
    let body = text.strip_suffix(LINE_BREAKS).unwrap_or(&text);

    body.split(LINE_BREAKS)
        .enumerate()
        .map(|(i, line)| parse_row(line, i + 1))
        .collect::<Result<Vec<_>, _>>()
        .map(NumericMatrix::from_rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, LoadError> {
    line.split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|source| LoadError::Parse {
                line: line_no,
                column: j + 1,
                token: tok.to_string(),
                source,
            })
        })
        .collect()
}
