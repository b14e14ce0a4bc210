use std::io::Write;

use lisp_lang_core::ast::{Expression, Program};

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::error::EvaluationError;

/// Evaluation context: variable bindings, the current scope depth and the
/// sink `write-line` prints to.
///
/// No builtin opens a nested scope, so `depth` stays at 0 and every binding
/// is effectively global.
pub struct Interpreter<'w> {
    pub(crate) environment: Environment,
    pub(crate) output: &'w mut dyn Write,
    depth: usize,
}

impl<'w> Interpreter<'w> {
    pub fn new(output: &'w mut dyn Write) -> Self {
        Self {
            environment: Environment::new(),
            output,
            depth: 0,
        }
    }

    /// Evaluates every top-level node in order, stopping at the first error.
    pub fn eval_program(&mut self, program: &Program) -> Result<(), EvaluationError> {
        for expression in &program.expressions {
            self.eval(expression)?;
        }
        Ok(())
    }

    pub fn eval(&mut self, expression: &Expression) -> Result<Expression, EvaluationError> {
        let Expression::List(children) = expression else {
            return Err(EvaluationError::NonList(expression.clone()));
        };
        let (head, args) = children.split_first().ok_or(EvaluationError::EmptyList)?;
        let Expression::Symbol(name) = head else {
            return Err(EvaluationError::HeadNotSymbol(head.clone()));
        };
        let builtin =
            Builtin::lookup(name).ok_or_else(|| EvaluationError::NotAFunction(name.clone()))?;

        tracing::debug!(builtin = builtin.name(), args = args.len(), "calling builtin");
        builtin.call(self, args)
    }

    /// Evaluates `expression` if it is a list, otherwise returns it as is.
    pub(crate) fn eval_if_list(
        &mut self,
        expression: &Expression,
    ) -> Result<Expression, EvaluationError> {
        match expression {
            Expression::List(_) => self.eval(expression),
            other => Ok(other.clone()),
        }
    }

    /// Looks a symbol up at the current depth; other nodes pass through.
    pub(crate) fn resolve_symbol(
        &self,
        expression: &Expression,
    ) -> Result<Expression, EvaluationError> {
        match expression {
            Expression::Symbol(name) => self.environment.get(name, self.depth).cloned(),
            other => Ok(other.clone()),
        }
    }

    /// Releases the top-level bindings and flushes the output.
    pub fn finish(mut self) -> Result<(), EvaluationError> {
        self.environment.release_scope(0);
        self.output.flush()?;
        Ok(())
    }
}
