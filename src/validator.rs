//! Static validation: a single forward pass over a script.
//!
//! The pass maintains the set of variable names defined so far (each
//! `load` target and each `assign` target joins it in order) and reports
//! two kinds of problems without executing anything:
//!
//! - a reference to a name not yet defined at that point in the script;
//! - an aggregate applied to the wrong number of arguments.
//!
//! The pass never stops early. An assignment's own target joins the
//! defined set even when the assignment was diagnosed, so one mistake
//! does not cascade into spurious reports downstream.
//!
//! Literals contribute no referenced names, including object literals
//! whose field values are run-time placeholders; those surface during
//! execution instead.

use std::collections::HashSet;

use crate::{
    ast::{Expr, Instruction, Literal, Script},
    diagnostics::Diagnostic,
    value::Value,
};

/// Validates a script, returning every diagnostic found in order.
pub fn validate(script: &Script) -> Vec<Diagnostic> {
    let mut defined: HashSet<&str> = HashSet::new();
    let mut diagnostics = Vec::new();

    for (index, instruction) in script.instructions.iter().enumerate() {
        let line = index + 1;
        match instruction {
            Instruction::Load { target, .. } => {
                defined.insert(target);
            }
            Instruction::Save { .. } => {
                // An unbound save source is a run-time concern.
            }
            Instruction::Assign { var, expr } => {
                for name in referenced_variables(expr) {
                    if !defined.contains(name) {
                        diagnostics.push(Diagnostic::UndefinedVariable {
                            name: name.to_string(),
                            line,
                        });
                    }
                }
                check_arity(expr, line, &mut diagnostics);
                defined.insert(var);
            }
        }
    }

    diagnostics
}

/// The variable names an expression reads from the environment.
///
/// Property access contributes its base; aggregates recurse; literals
/// contribute nothing.
fn referenced_variables(expr: &Expr) -> Vec<&str> {
    match expr {
        Expr::Variable(name) => vec![name.as_str()],
        Expr::PropertyAccess { base, .. } => vec![base.as_str()],
        Expr::Aggregate { inner, .. } => referenced_variables(inner),
        Expr::Literal(_) => Vec::new(),
    }
}

fn check_arity(expr: &Expr, line: usize, diagnostics: &mut Vec<Diagnostic>) {
    if let Expr::Aggregate { inner, op } = expr {
        let expected = op.expected_args();
        let actual = match inner.as_ref() {
            Expr::Literal(Literal::Array(elements)) => elements.len(),
            Expr::Literal(Literal::Value(Value::Array(elements))) => elements.len(),
            _ => 1,
        };
        if actual != expected {
            diagnostics.push(Diagnostic::ArityMismatch {
                operator: *op,
                line,
                expected,
                actual,
            });
        }
        check_arity(inner, line, diagnostics);
    }
}
