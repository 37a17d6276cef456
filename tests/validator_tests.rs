// tests/validator_tests.rs

use sprig_lang::ast::{AggregateOp, Expr, Instruction, Literal, Script};
use sprig_lang::diagnostics::Diagnostic;
use sprig_lang::validator::validate;
use sprig_lang::value::Value;

fn load(param: &str, target: &str) -> Instruction {
    Instruction::Load {
        param: param.to_string(),
        target: target.to_string(),
    }
}

fn save(param: &str, source: &str) -> Instruction {
    Instruction::Save {
        param: param.to_string(),
        source: source.to_string(),
    }
}

fn assign(var: &str, expr: Expr) -> Instruction {
    Instruction::Assign {
        var: var.to_string(),
        expr,
    }
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

fn prop(base: &str, path: &[&str]) -> Expr {
    Expr::PropertyAccess {
        base: base.to_string(),
        path: path.iter().map(|s| s.to_string()).collect(),
    }
}

fn agg(inner: Expr, op: AggregateOp) -> Expr {
    Expr::Aggregate {
        inner: Box::new(inner),
        op,
    }
}

fn array_literal(elements: Vec<Literal>) -> Expr {
    Expr::Literal(Literal::Array(elements))
}

fn number(n: f64) -> Literal {
    Literal::Value(Value::Number(n))
}

// ============================================================================
// Use-before-definition
// ============================================================================

#[test]
fn test_forward_reference_is_reported_once() {
    let script = Script::new(vec![
        assign("curso", var("doc")),
        load("$1", "doc"),
    ]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::UndefinedVariable {
            name: "doc".into(),
            line: 1,
        }]
    );
}

#[test]
fn test_load_target_defines_the_name() {
    let script = Script::new(vec![
        load("$1", "doc"),
        assign("curso", prop("doc", &["curso"])),
    ]);

    assert_eq!(validate(&script), vec![]);
}

#[test]
fn test_property_access_base_is_checked() {
    let script = Script::new(vec![assign("siglas", prop("doc", &["ucs", "sigla"]))]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::UndefinedVariable {
            name: "doc".into(),
            line: 1,
        }]
    );
}

#[test]
fn test_aggregate_recurses_into_inner() {
    let script = Script::new(vec![assign(
        "total",
        agg(prop("ucs", &[]), AggregateOp::Count),
    )]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::UndefinedVariable {
            name: "ucs".into(),
            line: 1,
        }]
    );
}

#[test]
fn test_collects_every_offence() {
    let script = Script::new(vec![
        assign("a", var("x")),
        assign("b", var("y")),
        assign("c", var("a")),
    ]);

    assert_eq!(
        validate(&script),
        vec![
            Diagnostic::UndefinedVariable {
                name: "x".into(),
                line: 1,
            },
            Diagnostic::UndefinedVariable {
                name: "y".into(),
                line: 2,
            },
        ]
    );
}

#[test]
fn test_diagnosed_assignment_still_defines_its_target() {
    // `a` is diagnosed, but later uses of `a` are fine
    let script = Script::new(vec![
        assign("a", var("missing")),
        assign("b", var("a")),
    ]);

    let diagnostics = validate(&script);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), 1);
}

#[test]
fn test_literal_placeholders_are_not_checked() {
    // The known gap: placeholders inside literals are a run-time concern
    let script = Script::new(vec![assign(
        "resumo",
        Expr::Literal(Literal::Object(vec![(
            "curso".into(),
            Literal::VarRef("curso".into()),
        )])),
    )]);

    assert_eq!(validate(&script), vec![]);
}

#[test]
fn test_save_source_is_not_checked() {
    let script = Script::new(vec![save("$1", "never_defined")]);

    assert_eq!(validate(&script), vec![]);
}

// ============================================================================
// Aggregate arity
// ============================================================================

#[test]
fn test_aggregate_over_array_literal_has_wrong_arity() {
    let script = Script::new(vec![assign(
        "s",
        agg(
            array_literal(vec![number(1.0), number(2.0), number(3.0)]),
            AggregateOp::Sum,
        ),
    )]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::ArityMismatch {
            operator: AggregateOp::Sum,
            line: 1,
            expected: 1,
            actual: 3,
        }]
    );
}

#[test]
fn test_aggregate_over_literal_wrapping_an_array() {
    let script = Script::new(vec![assign(
        "s",
        agg(
            Expr::Literal(Literal::Value(Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
            ]))),
            AggregateOp::Avg,
        ),
    )]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::ArityMismatch {
            operator: AggregateOp::Avg,
            line: 1,
            expected: 1,
            actual: 2,
        }]
    );
}

#[test]
fn test_single_element_array_literal_passes_arity() {
    let script = Script::new(vec![assign(
        "s",
        agg(array_literal(vec![number(1.0)]), AggregateOp::Sum),
    )]);

    assert_eq!(validate(&script), vec![]);
}

#[test]
fn test_aggregate_over_path_passes_arity() {
    let script = Script::new(vec![
        load("$1", "doc"),
        assign(
            "creditos",
            agg(prop("doc", &["ucs", "creditos"]), AggregateOp::Sum),
        ),
    ]);

    assert_eq!(validate(&script), vec![]);
}

#[test]
fn test_empty_array_literal_has_zero_arity() {
    let script = Script::new(vec![assign(
        "s",
        agg(array_literal(vec![]), AggregateOp::Max),
    )]);

    assert_eq!(
        validate(&script),
        vec![Diagnostic::ArityMismatch {
            operator: AggregateOp::Max,
            line: 1,
            expected: 1,
            actual: 0,
        }]
    );
}
