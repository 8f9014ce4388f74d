use itertools::Itertools;
use nom::{
    branch::alt,
    bytes::complete::{take, take_while, take_while1},
    error::ParseError,
    multi::many0,
    sequence::preceded,
    Finish, IResult, Parser,
};
use nom_supreme::error::ErrorTree;
use nom_supreme::ParserExt;

use crate::StrSpan;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Num,
    // identifiers and the keywords `var`, `return` and `new`
    Ident,
    // every other single character, including ones the grammar never accepts
    Ctrl,
}

impl TokenKind {
    /// Classification only looks at the first character. `1abc` is a `Num`, `_1` is an `Ident`.
    pub fn of_str(s: &str) -> Self {
        match s.chars().next() {
            Some(c) if c.is_alphabetic() || c == '_' => TokenKind::Ident,
            Some(c) if c.is_numeric() => TokenKind::Num,
            _ => TokenKind::Ctrl,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub str_: &'a str,
    pub span: StrSpan,
}

impl<'a> Token<'a> {
    fn of_str(data: &'a str, str_: &'a str) -> Self {
        // every token is a sub-slice of `data`, so the pointer offset is its byte position
        let start = str_.as_ptr() as usize - data.as_ptr() as usize;
        Token {
            kind: TokenKind::of_str(str_),
            str_,
            span: start..start + str_.len(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn whitespace<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    take_while(char::is_whitespace)(i)
}

fn padded_token<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    let word = take_while1(is_word_char);
    let ctrl = take(1usize);
    preceded(whitespace, alt((word, ctrl)))(i)
}

pub fn lexer<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, Vec<&'a str>, E> {
    many0(padded_token).terminated(whitespace).all_consuming().parse(i)
}

/// Splits `data` into tokens. Never fails: characters the grammar has no use for still come out as
/// one-character tokens and are rejected later by the parser.
pub fn lex(data: &str) -> Vec<Token<'_>> {
    match lexer::<ErrorTree<&str>>(data).finish() {
        Ok((_, words)) => words.into_iter().map(|w| Token::of_str(data, w)).collect_vec(),
        // any character is either whitespace, part of a word, or a token by itself
        Err(e) => unreachable!("lexer rejected its input: {}", e),
    }
}

pub fn tokenize(data: &str) -> Vec<String> {
    lex(data).into_iter().map(|tok| tok.str_.to_string()).collect_vec()
}
