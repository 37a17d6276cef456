//! Recursive-descent parser producing the parse tree in [`crate::syntax`].
//!
//! The parser keeps structure structural: a dotted path becomes a base
//! plus a segment list, and `expr | OPERATOR` becomes an aggregate node,
//! directly from the token stream. Nothing is ever reconstructed by
//! splitting a rendered string.

use std::fmt;
use std::mem;

use crate::{
    ast::Token,
    lexer::{LexError, Lexer},
    syntax::{ExprNode, InstructionNode, ScriptNode, ValueNode},
};

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

/// Errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer rejected the input
    Lex(LexError),
    /// The token stream does not match the grammar
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, got {:?}", expected, found)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// Takes the current token, leaving the next one in its place.
    fn take(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current_token, next))
    }

    fn expect(&mut self, expected: Token, label: &'static str) -> Result<(), ParseError> {
        if self.current_token != expected {
            return Err(ParseError::UnexpectedToken {
                expected: label,
                found: self.current_token.clone(),
            });
        }
        self.advance()
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.take()? {
            Token::Identifier(name) => Ok(name),
            found => Err(ParseError::UnexpectedToken {
                expected: "an identifier",
                found,
            }),
        }
    }

    fn expect_param(&mut self) -> Result<String, ParseError> {
        match self.take()? {
            Token::Param(param) => Ok(param),
            found => Err(ParseError::UnexpectedToken {
                expected: "a parameter",
                found,
            }),
        }
    }

    /// Parse a complete script: `instruction*` up to end of input.
    pub fn parse_script(&mut self) -> Result<ScriptNode, ParseError> {
        let mut instructions = Vec::new();
        while self.current_token != Token::Eof {
            instructions.push(self.parse_instruction()?);
        }
        Ok(ScriptNode { instructions })
    }

    /// Parse a standalone value followed by end of input.
    ///
    /// This is the entry point the JSON codec uses on file contents.
    pub fn parse_value_document(&mut self) -> Result<ValueNode, ParseError> {
        let value = self.parse_value()?;
        if self.current_token != Token::Eof {
            return Err(ParseError::UnexpectedToken {
                expected: "end of input",
                found: self.current_token.clone(),
            });
        }
        Ok(value)
    }

    fn parse_instruction(&mut self) -> Result<InstructionNode, ParseError> {
        match self.current_token {
            Token::Load => {
                self.advance()?;
                let param = self.expect_param()?;
                self.expect(Token::To, "'to'")?;
                let target = self.expect_identifier()?;
                Ok(InstructionNode::Load { param, target })
            }
            Token::Save => {
                self.advance()?;
                let source = self.expect_identifier()?;
                self.expect(Token::To, "'to'")?;
                let param = self.expect_param()?;
                Ok(InstructionNode::Save { param, source })
            }
            Token::Identifier(_) => {
                let id = self.expect_identifier()?;
                self.expect(Token::Equals, "'='")?;
                let expr = self.parse_expression()?;
                Ok(InstructionNode::Assign { id, expr })
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: "an instruction",
                found: self.current_token.clone(),
            }),
        }
    }

    pub fn parse_expression(&mut self) -> Result<ExprNode, ParseError> {
        let operand = self.parse_operand()?;

        if self.current_token == Token::Pipe {
            self.advance()?;
            let operator = self.expect_identifier()?;
            return Ok(ExprNode::Aggregate {
                operand: Box::new(operand),
                operator,
            });
        }
        Ok(operand)
    }

    fn parse_operand(&mut self) -> Result<ExprNode, ParseError> {
        match self.current_token {
            Token::Identifier(_) => {
                let base = self.expect_identifier()?;

                let mut segments = Vec::new();
                while self.current_token == Token::Dot {
                    self.advance()?;
                    segments.push(self.expect_identifier()?);
                }

                // A lone identifier is a variable reference, except as an
                // aggregate operand, where it reads as a segmentless path
                // (`ucs | COUNT`).
                if segments.is_empty() && self.current_token != Token::Pipe {
                    Ok(ExprNode::Value(ValueNode::Ident(base)))
                } else {
                    Ok(ExprNode::Path { base, segments })
                }
            }
            _ => Ok(ExprNode::Value(self.parse_value()?)),
        }
    }

    fn parse_value(&mut self) -> Result<ValueNode, ParseError> {
        match self.take()? {
            Token::String(raw) => Ok(ValueNode::Str(raw)),
            Token::Number(n) => Ok(ValueNode::Num(n)),
            Token::Boolean(b) => Ok(ValueNode::Bool(b)),
            Token::Null => Ok(ValueNode::Null),
            Token::Identifier(name) => Ok(ValueNode::Ident(name)),
            Token::LBrace => self.parse_object_literal(),
            Token::LBracket => self.parse_array_literal(),
            found => Err(ParseError::UnexpectedToken {
                expected: "a value",
                found,
            }),
        }
    }

    fn parse_object_literal(&mut self) -> Result<ValueNode, ParseError> {
        let mut pairs = Vec::new();

        while self.current_token != Token::RBrace {
            let key = match self.take()? {
                Token::String(raw) => raw,
                found => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "a string key",
                        found,
                    });
                }
            };

            self.expect(Token::Colon, "':'")?;
            let value = self.parse_value()?;
            pairs.push((key, value));

            if self.current_token != Token::RBrace {
                self.expect(Token::Comma, "','")?;
            }
        }

        self.advance()?; // consume '}'
        Ok(ValueNode::Object(pairs))
    }

    fn parse_array_literal(&mut self) -> Result<ValueNode, ParseError> {
        let mut elements = Vec::new();

        while self.current_token != Token::RBracket {
            elements.push(self.parse_value()?);

            if self.current_token != Token::RBracket {
                self.expect(Token::Comma, "','")?;
            }
        }

        self.advance()?; // consume ']'
        Ok(ValueNode::Array(elements))
    }
}
