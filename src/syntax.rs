//! Parse-tree node types produced by the front end.
//!
//! These mirror the concrete syntax one-to-one and carry lexemes close to
//! their written form (string nodes keep their quotes, operator names stay
//! strings). The translator maps them onto the AST; nothing downstream of
//! [`crate::translate`] sees these types.

/// A parsed script: one node per instruction, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptNode {
    pub instructions: Vec<InstructionNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstructionNode {
    /// `load PARAM to ID`
    Load { param: String, target: String },
    /// `save ID to PARAM`
    Save { param: String, source: String },
    /// `ID = expression`
    Assign { id: String, expr: ExprNode },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// A value production: literal, object, array, or bare identifier
    Value(ValueNode),

    /// A dotted path. A lone identifier on the right-hand side of `|`
    /// also parses as a path with no segments (`ucs | COUNT`).
    Path { base: String, segments: Vec<String> },

    /// `operand | OPERATOR`. The operator is kept as written; the
    /// translator resolves it.
    Aggregate {
        operand: Box<ExprNode>,
        operator: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// Raw string lexeme, quotes included
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    /// Bare identifier in value position
    Ident(String),
    /// Pairs in written order; keys are raw string lexemes, quotes included
    Object(Vec<(String, ValueNode)>),
    Array(Vec<ValueNode>),
}
