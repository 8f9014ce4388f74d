use std::ops::Range;

pub use error::ParseError;
use parser::Parser;
pub use token::{lex, tokenize, Token, TokenKind};

pub mod ast;
mod error;
pub mod parser;
mod token;

pub type StrSpan = Range<usize>;

/// Parse a whole source text into its root block, failing on the first grammar violation.
pub fn parse(data: &str) -> Result<ast::Block, ParseError> {
    let mut parser = Parser::new(data);
    tracing::debug!(tokens = parser.token_count(), "tokenized source");
    let result = parser.parse_program();
    if let Err(e) = &result {
        tracing::debug!(error = %e, span = ?e.span(), "parse failed");
    }
    result
}

/// Whether `s` is a single identifier token, i.e. something that can be used as a variable or type
/// name and will survive a print/parse round trip.
pub fn is_identifier(s: &str) -> bool {
    match lex(s).as_slice() {
        [tok] => tok.kind == TokenKind::Ident && tok.str_ == s,
        _ => false,
    }
}
