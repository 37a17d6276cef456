use crate::ast::Expr;

/// A single script instruction.
///
/// `param` on `Load` and `Save` is either a literal filename or a `$N`
/// placeholder (N ≥ 1) resolved against the runtime argument list when the
/// instruction executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Decode a JSON file into a variable
    ///
    /// # Example
    /// ```text
    /// load $1 to doc
    /// ```
    Load {
        param: String,
        target: String,
    },

    /// Render a variable and write it to a file
    ///
    /// # Example
    /// ```text
    /// save resumo to out.json
    /// ```
    Save {
        param: String,
        source: String,
    },

    /// Evaluate an expression into a variable
    ///
    /// # Example
    /// ```text
    /// total = ucs | COUNT
    /// ```
    Assign {
        var: String,
        expr: Expr,
    },
}
