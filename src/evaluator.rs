//! Script execution against a variable environment.
//!
//! Instructions run strictly in document order. Each instruction is
//! isolated: a failure becomes one [`Diagnostic::ExecutionFailure`] tagged
//! with that instruction's line, its target stays unbound, and execution
//! moves on to the next instruction. Nothing is ever re-validated or
//! re-run on error.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{AggregateOp, Expr, Instruction, Literal, Script},
    diagnostics::Diagnostic,
    json::{self, DecodeError},
    output,
    value::Value,
};

/// The `$N` positional placeholder form in load/save params.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$([0-9]+)$").expect("placeholder pattern"));

/// The script evaluator.
///
/// Owns the variable environment and the runtime argument list for one
/// script run. The environment is created fresh per run and is not shared.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Variable bindings made by load and assign instructions
    env: HashMap<String, Value>,
    /// Runtime arguments substituted into `$N` placeholders (1-based)
    args: Vec<String>,
}

/// Errors that can occur while executing a single instruction.
///
/// These never cross an instruction boundary: [`Evaluator::execute`]
/// converts each into a diagnostic at the failing instruction's line.
#[derive(Debug)]
pub enum EvalError {
    /// Reference to a variable with no binding
    UnboundVariable(String),

    /// Property lookup on an object that lacks the field
    MissingProperty(String),

    /// A value of the wrong kind for the operation
    TypeMismatch(String),

    /// A `$N` placeholder with no matching runtime argument
    MissingArgument(String),

    /// A numeric aggregate over an array with no numeric elements
    EmptyAggregate(AggregateOp),

    /// File read or write failure
    Io { path: String, source: std::io::Error },

    /// A loaded file that does not decode as a JSON document
    Decode { path: String, source: DecodeError },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => {
                write!(f, "no value bound to variable '{}'", name)
            }
            EvalError::MissingProperty(name) => {
                write!(f, "property '{}' not found in object", name)
            }
            EvalError::TypeMismatch(msg) => write!(f, "{}", msg),
            EvalError::MissingArgument(param) => {
                write!(f, "no runtime argument for placeholder '{}'", param)
            }
            EvalError::EmptyAggregate(op) => write!(f, "{} over empty numeric input", op),
            EvalError::Io { path, source } => write!(f, "file '{}': {}", path, source),
            EvalError::Decode { path, source } => write!(f, "file '{}': {}", path, source),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Io { source, .. } => Some(source),
            EvalError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Evaluator {
    /// Creates an evaluator with no runtime arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator whose `$N` placeholders resolve against
    /// `args` (`$1` is `args[0]`).
    pub fn with_args(args: Vec<String>) -> Self {
        Evaluator {
            env: HashMap::new(),
            args,
        }
    }

    /// The value currently bound to a variable, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }

    /// Executes every instruction in order, returning the diagnostics
    /// accumulated along the way. Never short-circuits: a failing
    /// instruction yields exactly one diagnostic and execution continues.
    pub fn execute(&mut self, script: &Script) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, instruction) in script.instructions.iter().enumerate() {
            let line = index + 1;
            if let Err(e) = self.execute_instruction(instruction) {
                diagnostics.push(Diagnostic::ExecutionFailure {
                    message: e.to_string(),
                    line,
                });
            }
        }

        diagnostics
    }

    fn execute_instruction(&mut self, instruction: &Instruction) -> Result<(), EvalError> {
        match instruction {
            Instruction::Load { param, target } => {
                let path = self.resolve_param(param)?;
                let text = fs::read_to_string(&path).map_err(|e| EvalError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                let value = json::decode(&text).map_err(|e| EvalError::Decode {
                    path: path.clone(),
                    source: e,
                })?;
                self.env.insert(target.clone(), value);
                Ok(())
            }
            Instruction::Save { param, source } => {
                let value = self
                    .env
                    .get(source)
                    .ok_or_else(|| EvalError::UnboundVariable(source.clone()))?;
                let content = output::render(value);
                let path = self.resolve_param(param)?;
                fs::write(&path, content).map_err(|e| EvalError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(())
            }
            Instruction::Assign { var, expr } => {
                let value = self.eval_expr(expr)?;
                self.env.insert(var.clone(), value);
                Ok(())
            }
        }
    }

    /// Resolves a load/save param: `$N` substitutes the N-th runtime
    /// argument, anything else is a literal file path.
    fn resolve_param(&self, param: &str) -> Result<String, EvalError> {
        let Some(captures) = PLACEHOLDER.captures(param) else {
            return Ok(param.to_string());
        };
        captures[1]
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .and_then(|n| self.args.get(n - 1))
            .cloned()
            .ok_or_else(|| EvalError::MissingArgument(param.to_string()))
    }

    fn eval_expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Variable(name) => self.lookup_value(name),
            Expr::Literal(literal) => self.resolve_literal(literal),
            Expr::PropertyAccess { base, path } => self.eval_property_access(base, path),
            Expr::Aggregate { inner, op } => {
                let value = self.eval_expr(inner)?;
                self.eval_aggregate(&value, *op)
            }
        }
    }

    fn lookup_value(&self, name: &str) -> Result<Value, EvalError> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
    }

    /// Turns a literal into a concrete value, resolving any bare
    /// identifier placeholders against the environment. Values that are
    /// already concrete (for example, data decoded from a JSON file) pass
    /// through untouched.
    fn resolve_literal(&self, literal: &Literal) -> Result<Value, EvalError> {
        match literal {
            Literal::Value(value) => Ok(value.clone()),
            Literal::VarRef(name) => self.lookup_value(name),
            Literal::Array(elements) => Ok(Value::Array(
                elements
                    .iter()
                    .map(|element| self.resolve_literal(element))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Literal::Object(fields) => Ok(Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), self.resolve_literal(value)?)))
                    .collect::<Result<Vec<_>, EvalError>>()?,
            )),
        }
    }

    fn eval_property_access(&self, base: &str, path: &[String]) -> Result<Value, EvalError> {
        let base_value = self.lookup_value(base)?;

        // An empty path is the identity.
        let Some(first) = path.first() else {
            return Ok(base_value);
        };

        if !matches!(base_value, Value::Object(_)) {
            return Err(EvalError::TypeMismatch(format!(
                "property lookup requires an object, got {}",
                base_value.type_name()
            )));
        }
        let current = base_value
            .get(first)
            .cloned()
            .ok_or_else(|| EvalError::MissingProperty(first.clone()))?;

        if path.len() == 1 {
            return Ok(current);
        }

        // Fan-out: the remaining segments project over an array of
        // objects, dropping elements without the field.
        let mut elements = match current {
            Value::Array(elements) => elements,
            other => {
                return Err(EvalError::TypeMismatch(format!(
                    "property '{}' must be an array to fan out, got {}",
                    first,
                    other.type_name()
                )));
            }
        };
        for segment in &path[1..] {
            elements = elements
                .iter()
                .filter_map(|element| element.get(segment).cloned())
                .collect();
        }
        Ok(Value::Array(elements))
    }

    fn eval_aggregate(&self, value: &Value, op: AggregateOp) -> Result<Value, EvalError> {
        let Value::Array(elements) = value else {
            return Err(EvalError::TypeMismatch(format!(
                "{} requires an array, got {}",
                op,
                value.type_name()
            )));
        };

        // COUNT sees every element, whatever its kind.
        if op == AggregateOp::Count {
            return Ok(Value::Number(elements.len() as f64));
        }

        let numbers: Vec<f64> = elements.iter().filter_map(|e| e.as_number()).collect();
        if numbers.is_empty() {
            return Err(EvalError::EmptyAggregate(op));
        }

        let result = match op {
            AggregateOp::Sum => numbers.iter().sum(),
            AggregateOp::Max => numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregateOp::Min => numbers.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateOp::Avg => numbers.iter().sum::<f64>() / numbers.len() as f64,
            AggregateOp::Count => unreachable!("COUNT handled above"),
        };
        Ok(Value::Number(result))
    }
}
