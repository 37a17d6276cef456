//! JSON codec for sprig values.
//!
//! Decoding reuses the script front end's `value` production, so a JSON
//! file is read with exactly the grammar a script literal uses (this is
//! also why field order and duplicate names survive a round trip).
//! Encoding is the canonical renderer from [`crate::output`].
//!
//! For every value `v`, `decode(&encode(&v))` yields `v` back.

use std::fmt;

use crate::{
    lexer::Lexer,
    output,
    parser::{ParseError, Parser},
    translate::{self, TranslateError},
    value::Value,
};

/// Errors that can occur while decoding a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The text does not match the value grammar
    Parse(ParseError),
    /// The tree contains script-only constructs (bare identifiers)
    Translate(TranslateError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Parse(e) => write!(f, "invalid JSON: {}", e),
            DecodeError::Translate(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Parse(e) => Some(e),
            DecodeError::Translate(e) => Some(e),
        }
    }
}

impl From<ParseError> for DecodeError {
    fn from(e: ParseError) -> Self {
        DecodeError::Parse(e)
    }
}

impl From<TranslateError> for DecodeError {
    fn from(e: TranslateError) -> Self {
        DecodeError::Translate(e)
    }
}

/// Decodes JSON text into a [`Value`].
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    let node = parser.parse_value_document()?;
    Ok(translate::value_to_json(&node)?)
}

/// Encodes a [`Value`] as canonical pretty-printed JSON text.
pub fn encode(value: &Value) -> String {
    output::render(value)
}
