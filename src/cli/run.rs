//! Run a sprig script: front end, translation, validation, execution.

use std::fs;
use std::path::PathBuf;

use super::CliError;
use crate::{
    diagnostics::Diagnostic,
    evaluator::Evaluator,
    lexer::Lexer,
    parser::Parser,
    translate,
    validator::validate,
};

/// Options for running a script
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to the script file
    pub script: PathBuf,
    /// Runtime arguments substituted into `$N` placeholders
    pub args: Vec<String>,
    /// Only validate, don't execute
    pub check_only: bool,
}

/// Reads, parses, validates and (unless `check_only`) executes a script.
///
/// Returns every diagnostic the validate and execute passes accumulated,
/// in order: static diagnostics first, then dynamic ones. Execution is
/// not gated on validation; both passes are collect-all over the same
/// immutable AST, and a statically suspect script may still run its
/// healthy instructions.
pub fn execute_run(options: &RunOptions) -> Result<Vec<Diagnostic>, CliError> {
    let source = fs::read_to_string(&options.script)?;

    let mut parser = Parser::new(Lexer::new(&source))?;
    let tree = parser.parse_script()?;
    let script = translate::script_to_ast(&tree)?;

    let mut diagnostics = validate(&script);

    if !options.check_only {
        let mut evaluator = Evaluator::with_args(options.args.clone());
        diagnostics.extend(evaluator.execute(&script));
    }

    Ok(diagnostics)
}
