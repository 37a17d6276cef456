use crate::ast::AggregateOp;
use crate::value::Value;

/// Abstract Syntax Tree node representing the right-hand side of an
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value written directly in the script.
    ///
    /// # Example
    /// ```text
    /// resumo = {"curso": curso, "totalUcs": total}
    /// ```
    Literal(Literal),

    /// A reference to a previously assigned or loaded variable.
    ///
    /// # Example
    /// ```text
    /// copia = doc
    /// ```
    Variable(String),

    /// A dotted property path rooted at a variable.
    ///
    /// An empty path is the identity: the expression yields the base
    /// variable's value unchanged. Two or more segments fan out over an
    /// array of objects (see the module docs on [`crate::ast`]).
    ///
    /// # Examples
    /// ```text
    /// curso  = doc.curso
    /// siglas = doc.ucs.sigla
    /// ```
    PropertyAccess {
        base: String,
        path: Vec<String>,
    },

    /// An aggregate operator applied to an array-valued expression.
    ///
    /// # Example
    /// ```text
    /// creditos = doc.ucs.creditos | SUM
    /// ```
    Aggregate {
        inner: Box<Expr>,
        op: AggregateOp,
    },
}

/// A literal as written in a script.
///
/// Mostly this is a [`Value`] in waiting, but a literal written with bare
/// identifiers (`{"curso": curso}`) carries [`Literal::VarRef`]
/// placeholders that the evaluator resolves against the environment when
/// the assignment runs. Values decoded from JSON files are always
/// concrete and pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A concrete value needing no resolution
    Value(Value),

    /// An array literal, elements resolved individually
    Array(Vec<Literal>),

    /// An object literal, field values resolved individually,
    /// insertion order preserved
    Object(Vec<(String, Literal)>),

    /// A bare identifier in value position, looked up at run time
    VarRef(String),
}
