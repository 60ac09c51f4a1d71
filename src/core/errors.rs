//! RAIL-prefixed error types with structured error codes.

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, RailError>;

/// Opaque error raised by an application routine or hook.
///
/// Routines surface whatever error type they like; the harness only needs
/// `Display` + `Debug` to report it and fold it into an exit code.
pub type RoutineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for clirail.
///
/// These are *usage* errors: they fail the offending call immediately and
/// never travel through the hook pipeline.
#[derive(Debug, Error)]
pub enum RailError {
    /// A row was appended whose cell count does not match the header count.
    #[error("[RAIL-1001] row has {found} cells but the table defines {expected} columns")]
    RowArity {
        /// Number of columns the table was constructed with.
        expected: usize,
        /// Number of cells in the rejected row.
        found: usize,
    },

    /// A table was constructed with no column headers at all.
    #[error("[RAIL-1002] a table requires at least one column header")]
    EmptyHeaders,
}

impl RailError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RowArity { .. } => "RAIL-1001",
            Self::EmptyHeaders => "RAIL-1002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_unique() {
        let errors: Vec<RailError> = vec![
            RailError::RowArity {
                expected: 2,
                found: 3,
            },
            RailError::EmptyHeaders,
        ];

        let codes: Vec<&str> = errors.iter().map(RailError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_rail_prefix() {
        let errors: Vec<RailError> = vec![
            RailError::RowArity {
                expected: 1,
                found: 0,
            },
            RailError::EmptyHeaders,
        ];

        for err in &errors {
            assert!(
                err.code().starts_with("RAIL-"),
                "code {} must start with RAIL-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = RailError::RowArity {
            expected: 2,
            found: 5,
        };
        let msg = err.to_string();
        assert!(
            msg.contains("RAIL-1001"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains('5'),
            "display should contain the offending cell count: {msg}"
        );
    }
}
