use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    Symbol(Rc<str>),
    String(String),

    // Produced by literal classification, never by the tokenizer itself
    Integer(i32),
    Float(f32),
    Nil,
    True,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LexError {
    #[error("unterminated quote (opened at byte {position})")]
    UnterminatedQuote { position: usize },
    #[error("unterminated brace")]
    UnterminatedBrace,
    #[error("excess closing braces")]
    ExcessClosingBraces,
}

/// Splits the first line of the input into tokens.
///
/// Anything after the first newline is ignored. Brace balance is only
/// checked once the whole line has been consumed.
pub struct Tokenizer<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pending: String,
    pending_start: usize,
    depth: i64,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            pending: String::new(),
            pending_start: 0,
            depth: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut quote_start: Option<usize> = None;
        let input = self.input;

        for (idx, ch) in input.char_indices() {
            if ch == '\n' {
                break;
            }

            if let Some(start) = quote_start {
                if ch == '"' {
                    let text = std::mem::take(&mut self.pending);
                    self.push(TokenKind::String(text), start);
                    quote_start = None;
                } else {
                    self.pending.push(ch);
                }
                continue;
            }

            match ch {
                '"' => {
                    self.flush_symbol();
                    quote_start = Some(idx);
                }
                ';' => {
                    // comment runs to the end of the line
                    self.flush_symbol();
                    break;
                }
                ' ' | '\t' => self.flush_symbol(),
                '(' => {
                    self.flush_symbol();
                    self.push(TokenKind::LeftBrace, idx);
                    self.depth += 1;
                }
                ')' => {
                    self.flush_symbol();
                    self.push(TokenKind::RightBrace, idx);
                    self.depth -= 1;
                }
                _ => {
                    if self.pending.is_empty() {
                        self.pending_start = idx;
                    }
                    self.pending.push(ch);
                }
            }
        }

        if let Some(position) = quote_start {
            return Err(LexError::UnterminatedQuote { position });
        }
        self.flush_symbol();

        if self.depth > 0 {
            return Err(LexError::UnterminatedBrace);
        }
        if self.depth < 0 {
            return Err(LexError::ExcessClosingBraces);
        }

        tracing::debug!(tokens = self.tokens.len(), "tokenized line");
        Ok(self.tokens)
    }

    fn flush_symbol(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        self.push(TokenKind::Symbol(text.into()), self.pending_start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token { kind, start });
    }
}
