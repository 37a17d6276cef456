//! Diagnostics collected while validating or executing a script.
//!
//! A diagnostic is data, never control flow: both passes catch problems at
//! the instruction boundary, record them, and keep going. After a run the
//! ordered diagnostics list is the authoritative report of everything
//! wrong with the script.

use std::fmt;

use crate::ast::AggregateOp;

/// One recorded problem, tagged with the 1-based position of the
/// instruction it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A variable referenced before any instruction defines it (static)
    UndefinedVariable { name: String, line: usize },

    /// An aggregate applied to the wrong number of arguments (static)
    ArityMismatch {
        operator: AggregateOp,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// An instruction that failed while executing (dynamic)
    ExecutionFailure { message: String, line: usize },
}

impl Diagnostic {
    /// The instruction position this diagnostic is tagged with.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UndefinedVariable { line, .. }
            | Diagnostic::ArityMismatch { line, .. }
            | Diagnostic::ExecutionFailure { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndefinedVariable { name, line } => {
                write!(f, "line {}: undefined variable '{}'", line, name)
            }
            Diagnostic::ArityMismatch {
                operator,
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {}: {} expects {} argument{}, got {}",
                line,
                operator,
                expected,
                if *expected == 1 { "" } else { "s" },
                actual
            ),
            Diagnostic::ExecutionFailure { message, line } => {
                write!(f, "line {}: {}", line, message)
            }
        }
    }
}
