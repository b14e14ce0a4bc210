use std::fmt::Display;
use std::rc::Rc;

/// A parsed node. Lists own their children, so dropping a list drops the
/// whole subtree.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    List(Vec<Expression>),
    String(String),
    Symbol(Rc<str>),
    Integer(i32),
    Float(f32),
    Nil,
    True,
}

impl Expression {
    pub fn symbol(name: &str) -> Self {
        Expression::Symbol(name.into())
    }

    pub fn string(value: &str) -> Self {
        Expression::String(value.to_owned())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Expression::String(value) => write!(f, "\"{}\"", value),
            Expression::Symbol(name) => write!(f, "{}", name),
            Expression::Integer(value) => write!(f, "{}", value),
            Expression::Float(value) => write!(f, "{:.6}", value),
            Expression::Nil => write!(f, "nil"),
            Expression::True => write!(f, "T"),
        }
    }
}

/// The top-level nodes of one input line, in source order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub expressions: Vec<Expression>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for expression in &self.expressions {
            writeln!(f, "{}", expression)?;
        }
        Ok(())
    }
}
