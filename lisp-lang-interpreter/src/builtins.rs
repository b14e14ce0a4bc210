use lisp_lang_core::ast::Expression;

use crate::error::EvaluationError;
use crate::evaluator::Interpreter;

/// The fixed set of native functions callable from a list's head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    WriteLine,
    Setq,
    When,
}

const BUILTINS: [Builtin; 3] = [Builtin::WriteLine, Builtin::Setq, Builtin::When];

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::WriteLine => "write-line",
            Builtin::Setq => "setq",
            Builtin::When => "when",
        }
    }

    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Runs the builtin on its unevaluated arguments.
    pub fn call(
        self,
        interpreter: &mut Interpreter<'_>,
        args: &[Expression],
    ) -> Result<Expression, EvaluationError> {
        match self {
            Builtin::WriteLine => builtin_write_line(interpreter, args),
            Builtin::Setq => builtin_setq(interpreter, args),
            Builtin::When => builtin_when(interpreter, args),
        }
    }
}

fn expect_argument_count(
    builtin: Builtin,
    expected: usize,
    args: &[Expression],
) -> Result<(), EvaluationError> {
    if args.len() != expected {
        return Err(EvaluationError::WrongArgumentCount {
            function: builtin.name(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn unexpected_argument_type(
    builtin: Builtin,
    expected: &'static str,
    got: Expression,
) -> EvaluationError {
    EvaluationError::UnexpectedArgumentType {
        function: builtin.name(),
        expected,
        got,
    }
}

fn builtin_write_line(
    interpreter: &mut Interpreter<'_>,
    args: &[Expression],
) -> Result<Expression, EvaluationError> {
    expect_argument_count(Builtin::WriteLine, 1, args)?;
    match interpreter.resolve_symbol(&args[0])? {
        Expression::String(text) => {
            writeln!(interpreter.output, "{}", text)?;
            Ok(Expression::String(text))
        }
        other => Err(unexpected_argument_type(Builtin::WriteLine, "string", other)),
    }
}

fn builtin_setq(
    interpreter: &mut Interpreter<'_>,
    args: &[Expression],
) -> Result<Expression, EvaluationError> {
    expect_argument_count(Builtin::Setq, 2, args)?;
    let Expression::Symbol(name) = &args[0] else {
        return Err(unexpected_argument_type(
            Builtin::Setq,
            "symbol",
            args[0].clone(),
        ));
    };

    let value = interpreter.eval_if_list(&args[1])?;
    let value = interpreter.resolve_symbol(&value)?;

    interpreter.environment.clear(name);
    interpreter.environment.set(name.clone(), 0, value.clone());
    Ok(value)
}

fn builtin_when(
    interpreter: &mut Interpreter<'_>,
    args: &[Expression],
) -> Result<Expression, EvaluationError> {
    expect_argument_count(Builtin::When, 2, args)?;
    let condition = interpreter.eval_if_list(&args[0])?;
    match interpreter.resolve_symbol(&condition)? {
        Expression::Nil => Ok(Expression::Nil),
        Expression::True => interpreter.eval(&args[1]),
        other => Err(unexpected_argument_type(Builtin::When, "nil or T", other)),
    }
}
