use thiserror::Error;

use crate::token::Token;
use crate::StrSpan;

/// The only way a parse can fail. The parser stops at the first of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token was required but the input had already ended.
    #[error("unexpected end of input")]
    UnexpectedEof { at: usize },

    /// The current token is not the one the grammar requires here.
    #[error("expected {expected}, got {found}")]
    Expected {
        expected: String,
        found: String,
        span: StrSpan,
    },

    /// The current token cannot start an expression or a statement.
    #[error("invalid {context} {found}")]
    Invalid {
        context: &'static str,
        found: String,
        span: StrSpan,
    },
}

impl ParseError {
    pub(crate) fn expected(expected: &str, found: &Token) -> Self {
        ParseError::Expected {
            expected: expected.to_string(),
            found: found.str_.to_string(),
            span: found.span.clone(),
        }
    }

    pub(crate) fn invalid(context: &'static str, found: &Token) -> Self {
        ParseError::Invalid {
            context,
            found: found.str_.to_string(),
            span: found.span.clone(),
        }
    }

    /// Byte range of the offending token. Empty (and positioned at the end of the source) for
    /// `UnexpectedEof`.
    pub fn span(&self) -> StrSpan {
        match self {
            ParseError::UnexpectedEof { at } => *at..*at,
            ParseError::Expected { span, .. } | ParseError::Invalid { span, .. } => span.clone(),
        }
    }
}
