use std::io::Write;

use lisp_lang_core::parser::{self, SyntaxError};
use lisp_lang_interpreter::error::EvaluationError;
use lisp_lang_interpreter::evaluator::Interpreter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses one line, echoes each top-level node in canonical form followed
/// by a blank line, then evaluates the nodes in order.
pub fn execute(source: &str, output: &mut dyn Write) -> Result<(), RunError> {
    let program = parser::parse_source(source)?;

    tracing::debug!(nodes = program.expressions.len(), "echoing program");
    write!(output, "{}", program)?;
    writeln!(output)?;

    tracing::debug!("evaluating program");
    let mut interpreter = Interpreter::new(output);
    interpreter.eval_program(&program)?;
    interpreter.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> (Result<(), RunError>, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = execute(source, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_hello_world() {
        let (result, output) = run(
            "(setq greeting \"Hello, world!\")(setq flag T)(when flag (write-line greeting))",
        );
        assert!(result.is_ok());
        assert_eq!(
            output,
            "(setq greeting \"Hello, world!\")\n\
             (setq flag T)\n\
             (when flag (write-line greeting))\n\
             \n\
             Hello, world!\n"
        );
    }

    #[test]
    fn test_when_nil_prints_only_the_echo() {
        let (result, output) = run("(when nil (write-line \"unreachable\"))");
        assert!(result.is_ok());
        assert_eq!(output, "(when nil (write-line \"unreachable\"))\n\n");
    }

    #[test]
    fn test_syntax_error_prints_nothing() {
        let (result, output) = run("(write-line \"open");
        assert!(matches!(result, Err(RunError::Syntax(_))));
        assert_eq!(output, "");
        assert_eq!(
            result.unwrap_err().to_string(),
            "unterminated quote (opened at byte 12)"
        );
    }

    #[test]
    fn test_evaluation_error_names_the_variable() {
        let (result, _) = run("(write-line undefined-var)");
        let err = result.unwrap_err();
        assert!(matches!(err, RunError::Evaluation(_)));
        assert_eq!(err.to_string(), "variable undefined-var not found");
    }

    #[test]
    fn test_deep_nesting_is_a_syntax_error() {
        let source = format!("{}{}", "(".repeat(100_000), ")".repeat(100_000));
        let (result, output) = run(&source);
        assert!(matches!(result, Err(RunError::Syntax(_))));
        assert_eq!(output, "");
    }

    #[test]
    fn test_only_first_line_runs() {
        let (result, output) = run("(write-line \"one\")\n(write-line \"two\")");
        assert!(result.is_ok());
        assert_eq!(output, "(write-line \"one\")\n\none\n");
    }
}
