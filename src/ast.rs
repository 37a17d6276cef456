//! # Sprig Scripting Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for sprig, a tiny
//! scripting language that loads JSON documents into named variables,
//! reshapes them, and saves the results back to files.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, variables, property paths, aggregates)
//! - **[operators]** - Columnar aggregate operators (SUM, COUNT, MAX, MIN, AVG)
//! - **[instructions]** - Script instructions (load, save, assign)
//! - **[script]** - A complete script: an ordered instruction sequence
//!
//! ## Quick Start
//!
//! ```text
//! load $1 to doc
//! siglas = doc.ucs.sigla
//! creditos = doc.ucs.creditos | SUM
//! save siglas to $2
//! ```
//!
//! This script loads the document named by the first runtime argument,
//! projects the `sigla` field out of every element of `doc.ucs`, sums the
//! `creditos` column, and saves the projection to the second argument.
//!
//! ## Core Concepts
//!
//! ### The Three Instructions
//!
//! - **Load** `load PARAM to ID` - Decode a JSON file into a variable
//! - **Save** `save ID to PARAM` - Render a variable and write it to a file
//! - **Assign** `ID = expression` - Evaluate an expression into a variable
//!
//! `PARAM` is either a literal filename or a `$N` placeholder substituted
//! from the runtime argument list (1-based).
//!
//! ### Property Paths and Fan-Out
//!
//! `doc.curso` looks a field up on an object. A longer path fans out:
//! `doc.ucs.sigla` resolves `ucs` to an array of objects and collects each
//! element's `sigla` into a new array, dropping elements without one.
//!
//! ### Aggregates
//!
//! `expr | SUM` (also `COUNT`, `MAX`, `MIN`, `AVG`) reduces an array.
//! `COUNT` counts every element; the numeric operators silently skip
//! non-numbers.
//!
//! ### Late-Resolved Literals
//!
//! An object literal may use bare identifiers as field values:
//!
//! ```text
//! resumo = {"curso": curso, "totalUcs": total}
//! ```
//!
//! Those fields are placeholders looked up in the environment when the
//! assignment runs, not when the script is translated.
//!
//! Nodes are built once by [`crate::translate`] and never mutated; the
//! validator and evaluator are independent passes over the same tree.

pub mod expressions;
pub mod instructions;
pub mod operators;
pub mod script;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use instructions::Instruction;
pub use operators::AggregateOp;
pub use script::Script;
pub use tokens::Token;
