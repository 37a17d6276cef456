//! Translation from the parse tree to the AST.
//!
//! Rules:
//! - string lexemes lose their surrounding quotes here (nowhere else);
//! - bare identifiers in value position become late-resolved
//!   [`Literal::VarRef`] placeholders, except at the top of an assignment
//!   where they are plain variable references;
//! - operator names resolve to [`AggregateOp`]; anything unknown is
//!   rejected up front rather than at run time.
//!
//! The mapping always works from structured parse-tree children. The path
//! and aggregate shapes arrive pre-split from the parser.

use std::fmt;

use crate::{
    ast::{AggregateOp, Expr, Instruction, Literal, Script},
    syntax::{ExprNode, InstructionNode, ScriptNode, ValueNode},
    value::Value,
};

/// Errors that can occur while translating a parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// An aggregate name that is not SUM/COUNT/MAX/MIN/AVG
    UnknownOperator(String),
    /// A bare identifier inside a JSON document (valid only in scripts)
    BareIdentifier(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnknownOperator(name) => {
                write!(f, "unknown aggregate operator '{}'", name)
            }
            TranslateError::BareIdentifier(name) => {
                write!(f, "bare identifier '{}' is not valid in a JSON document", name)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// Strips the surrounding quotes off a raw string lexeme.
fn strip_quotes(raw: &str) -> String {
    raw[1..raw.len() - 1].to_string()
}

pub fn script_to_ast(node: &ScriptNode) -> Result<Script, TranslateError> {
    let instructions = node
        .instructions
        .iter()
        .map(instruction_to_ast)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Script::new(instructions))
}

pub fn instruction_to_ast(node: &InstructionNode) -> Result<Instruction, TranslateError> {
    match node {
        InstructionNode::Load { param, target } => Ok(Instruction::Load {
            param: param.clone(),
            target: target.clone(),
        }),
        InstructionNode::Save { param, source } => Ok(Instruction::Save {
            param: param.clone(),
            source: source.clone(),
        }),
        InstructionNode::Assign { id, expr } => Ok(Instruction::Assign {
            var: id.clone(),
            expr: expr_to_ast(expr)?,
        }),
    }
}

pub fn expr_to_ast(node: &ExprNode) -> Result<Expr, TranslateError> {
    match node {
        // A lone identifier on the right-hand side is a variable
        // reference, not a literal placeholder.
        ExprNode::Value(ValueNode::Ident(name)) => Ok(Expr::Variable(name.clone())),
        ExprNode::Value(value) => Ok(Expr::Literal(value_to_literal(value))),
        ExprNode::Path { base, segments } => Ok(Expr::PropertyAccess {
            base: base.clone(),
            path: segments.clone(),
        }),
        ExprNode::Aggregate { operand, operator } => {
            let op = AggregateOp::from_name(operator)
                .ok_or_else(|| TranslateError::UnknownOperator(operator.clone()))?;
            Ok(Expr::Aggregate {
                inner: Box::new(expr_to_ast(operand)?),
                op,
            })
        }
    }
}

/// Maps a value node to a script literal, keeping bare identifiers as
/// placeholders for run-time resolution.
pub fn value_to_literal(node: &ValueNode) -> Literal {
    match node {
        ValueNode::Str(raw) => Literal::Value(Value::String(strip_quotes(raw))),
        ValueNode::Num(n) => Literal::Value(Value::Number(*n)),
        ValueNode::Bool(b) => Literal::Value(Value::Boolean(*b)),
        ValueNode::Null => Literal::Value(Value::Null),
        ValueNode::Ident(name) => Literal::VarRef(name.clone()),
        ValueNode::Array(elements) => {
            Literal::Array(elements.iter().map(value_to_literal).collect())
        }
        ValueNode::Object(pairs) => Literal::Object(
            pairs
                .iter()
                .map(|(key, value)| (strip_quotes(key), value_to_literal(value)))
                .collect(),
        ),
    }
}

/// Maps a value node to a concrete [`Value`].
///
/// Used when decoding JSON documents, where a bare identifier has no
/// environment to resolve against and is rejected.
pub fn value_to_json(node: &ValueNode) -> Result<Value, TranslateError> {
    match node {
        ValueNode::Str(raw) => Ok(Value::String(strip_quotes(raw))),
        ValueNode::Num(n) => Ok(Value::Number(*n)),
        ValueNode::Bool(b) => Ok(Value::Boolean(*b)),
        ValueNode::Null => Ok(Value::Null),
        ValueNode::Ident(name) => Err(TranslateError::BareIdentifier(name.clone())),
        ValueNode::Array(elements) => Ok(Value::Array(
            elements
                .iter()
                .map(value_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        ValueNode::Object(pairs) => Ok(Value::Object(
            pairs
                .iter()
                .map(|(key, value)| Ok((strip_quotes(key), value_to_json(value)?)))
                .collect::<Result<Vec<_>, TranslateError>>()?,
        )),
    }
}
