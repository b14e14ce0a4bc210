use thiserror::Error;

use crate::lexer::LexError;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ParseError {
    #[error("unmatched closing brace at byte {position}")]
    UnmatchedRightBrace { position: usize },
    #[error("brace opened at byte {position} is never closed")]
    UnterminatedList { position: usize },
    #[error("lists nested too deeply (brace at byte {position})")]
    NestingTooDeep { position: usize },
}

/// Anything that can go wrong between raw text and a parsed [`crate::ast::Program`].
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
