use thiserror::Error;

// Unified error type for mdlinalg

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("backend error: {0}")]
    Backend(String),
}

impl LinalgError {
    /// Fails with `DimensionMismatch` unless `got == expected`.
    pub(crate) fn check(
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    ) -> Result<(), LinalgError> {
        if expected == got {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch { op, expected, got })
        }
    }
}
