use std::rc::Rc;

use lisp_lang_core::ast::Expression;

use crate::error::EvaluationError;

/// Variable bindings tagged with the scope depth they were made at.
///
/// There is at most one binding per (name, depth). A lookup at depth `d`
/// walks `d, d - 1, ..., 0` and returns the first binding it finds.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Environment {
    entries: Vec<Entry>,
}

#[derive(Debug, PartialEq, Clone)]
struct Entry {
    depth: usize,
    name: Rc<str>,
    value: Expression,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: Rc<str>, depth: usize, value: Expression) {
        tracing::trace!(%name, depth, %value, "set variable");
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.depth == depth && entry.name == name)
        {
            Some(entry) => entry.value = value,
            None => self.entries.push(Entry { depth, name, value }),
        }
    }

    pub fn get(&self, name: &str, depth: usize) -> Result<&Expression, EvaluationError> {
        (0..=depth)
            .rev()
            .find_map(|d| {
                self.entries
                    .iter()
                    .find(|entry| entry.depth == d && &*entry.name == name)
            })
            .map(|entry| &entry.value)
            .ok_or_else(|| EvaluationError::UnknownVariable(name.into()))
    }

    /// Drops every binding of `name`, at any depth.
    pub fn clear(&mut self, name: &str) {
        tracing::trace!(name, "clear variable");
        self.entries.retain(|entry| &*entry.name != name);
    }

    /// Drops every binding made at `min_depth` or deeper.
    pub fn release_scope(&mut self, min_depth: usize) {
        tracing::trace!(min_depth, "release scope");
        self.entries.retain(|entry| entry.depth < min_depth);
    }
}
