use std::rc::Rc;

use lisp_lang_core::ast::Expression;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("cannot evaluate non-list {0}")]
    NonList(Expression),
    #[error("empty list cannot be evaluated")]
    EmptyList,
    #[error("{0} is not a symbol")]
    HeadNotSymbol(Expression),
    #[error("{0} is not a function")]
    NotAFunction(Rc<str>),
    #[error("variable {0} not found")]
    UnknownVariable(Rc<str>),
    #[error("{function}: unexpected number of arguments. Expected {expected} got {got}")]
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{function}: unexpected argument type. Expected {expected} got {got}")]
    UnexpectedArgumentType {
        function: &'static str,
        expected: &'static str,
        got: Expression,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
