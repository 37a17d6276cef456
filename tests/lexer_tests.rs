// tests/lexer_tests.rs

use sprig_lang::ast::Token;
use sprig_lang::lexer::{LexError, Lexer};

fn lex_all(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

// ============================================================================
// Punctuation and Keywords
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("=", Token::Equals),
        (".", Token::Dot),
        ("|", Token::Pipe),
        ("{", Token::LBrace),
        ("}", Token::RBrace),
        ("[", Token::LBracket),
        ("]", Token::RBracket),
        (":", Token::Colon),
        (",", Token::Comma),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        lex_all("to null true false doc"),
        vec![
            Token::To,
            Token::Null,
            Token::Boolean(true),
            Token::Boolean(false),
            Token::Identifier("doc".into()),
            Token::Eof,
        ]
    );
}

// ============================================================================
// Load/Save Parameters
// ============================================================================

#[test]
fn test_load_with_placeholder_param() {
    assert_eq!(
        lex_all("load $1 to doc"),
        vec![
            Token::Load,
            Token::Param("$1".into()),
            Token::To,
            Token::Identifier("doc".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_filename_param_keeps_dots() {
    // `lei.json` is one param token; the dot never becomes Token::Dot here
    assert_eq!(
        lex_all("load lei.json to doc"),
        vec![
            Token::Load,
            Token::Param("lei.json".into()),
            Token::To,
            Token::Identifier("doc".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_save_param_follows_to() {
    assert_eq!(
        lex_all("save resumo to $2"),
        vec![
            Token::Save,
            Token::Identifier("resumo".into()),
            Token::To,
            Token::Param("$2".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_quoted_filename_param() {
    assert_eq!(
        lex_all("save resumo to \"my out.json\""),
        vec![
            Token::Save,
            Token::Identifier("resumo".into()),
            Token::To,
            Token::Param("my out.json".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_dot_is_a_path_separator_outside_params() {
    assert_eq!(
        lex_all("curso = doc.curso"),
        vec![
            Token::Identifier("curso".into()),
            Token::Equals,
            Token::Identifier("doc".into()),
            Token::Dot,
            Token::Identifier("curso".into()),
            Token::Eof,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers_are_doubles() {
    let test_cases = vec![
        ("6", 6.0),
        ("4.5", 4.5),
        ("-3", -3.0),
        ("0", 0.0),
        ("1.5e3", 1500.0),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Number(expected),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_string_token_keeps_quotes() {
    // The raw lexeme survives lexing; quote stripping is the translator's job
    let mut lexer = Lexer::new("\"LEI\"");
    assert_eq!(lexer.next_token().unwrap(), Token::String("\"LEI\"".into()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_string_contents_pass_through_unescaped() {
    let mut lexer = Lexer::new(r#""a\nb""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String(r#""a\nb""#.into())
    );
}

#[test]
fn test_aggregate_pipe() {
    assert_eq!(
        lex_all("total = ucs | COUNT"),
        vec![
            Token::Identifier("total".into()),
            Token::Equals,
            Token::Identifier("ucs".into()),
            Token::Pipe,
            Token::Identifier("COUNT".into()),
            Token::Eof,
        ]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("\"abc");
    assert_eq!(lexer.next_token(), Err(LexError::UnterminatedString));
}

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("x = ^");
    lexer.next_token().unwrap(); // x
    lexer.next_token().unwrap(); // =
    assert_eq!(lexer.next_token(), Err(LexError::UnexpectedCharacter('^')));
}

#[test]
fn test_missing_parameter() {
    let mut lexer = Lexer::new("load");
    lexer.next_token().unwrap(); // load
    assert_eq!(lexer.next_token(), Err(LexError::MissingParameter));
}
