mod error;

pub use error::{ParseError, SyntaxError};

use crate::ast::{Expression, Program};
use crate::lexer::{Token, TokenKind, Tokenizer};
use crate::literal::classify_literals;

/// Deepest list nesting the parser accepts. Printing, evaluating and
/// dropping a tree all recurse per level, so this bounds their stack use too.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Groups a flat, literal-classified token stream into nested lists.
pub struct Parser {
    iter: std::vec::IntoIter<Token>,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            iter: tokens.into_iter(),
            depth: 0,
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut expressions = Vec::new();
        while let Some(token) = self.iter.next() {
            expressions.push(self.parse_node(token)?);
        }
        tracing::debug!(nodes = expressions.len(), "parsed top-level nodes");
        Ok(Program { expressions })
    }

    fn parse_node(&mut self, token: Token) -> Result<Expression, ParseError> {
        match token.kind {
            TokenKind::LeftBrace => self.parse_list(token.start),
            TokenKind::RightBrace => Err(ParseError::UnmatchedRightBrace {
                position: token.start,
            }),
            TokenKind::Symbol(name) => Ok(Expression::Symbol(name)),
            TokenKind::String(value) => Ok(Expression::String(value)),
            TokenKind::Integer(value) => Ok(Expression::Integer(value)),
            TokenKind::Float(value) => Ok(Expression::Float(value)),
            TokenKind::Nil => Ok(Expression::Nil),
            TokenKind::True => Ok(Expression::True),
        }
    }

    fn parse_list(&mut self, start: usize) -> Result<Expression, ParseError> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: start });
        }
        self.depth += 1;
        let list = self.parse_list_items(start);
        self.depth -= 1;
        list
    }

    fn parse_list_items(&mut self, start: usize) -> Result<Expression, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.iter.next() {
                None => return Err(ParseError::UnterminatedList { position: start }),
                Some(Token {
                    kind: TokenKind::RightBrace,
                    ..
                }) => return Ok(Expression::List(children)),
                Some(token) => children.push(self.parse_node(token)?),
            }
        }
    }
}

/// Runs the whole front end: tokenize, classify literals, build the tree.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let mut tokens = Tokenizer::new(source).tokenize()?;
    classify_literals(&mut tokens);
    Ok(Parser::new(tokens).parse_program()?)
}
