//! A dialect bundles a grammar with the model it builds and the output it
//! renders from that model. Fast Forms is the dialect implemented here; the
//! engine doesn't know anything about forms.

use crate::building;
use crate::error::FormsError;
use crate::grammar::{engine, table, Engine, Grammar, GrammarError, NodeId, Rejection, Tree};
use crate::language::Model;
use crate::parsing::ParsingError;
use crate::rendering::{self, RenderingError};

pub trait Dialect {
    type Model;

    /// The grammar table, for parsing and for introspection.
    fn grammar(&self) -> &Grammar;

    /// A fresh, empty accumulator for one parse.
    fn model(&self) -> Self::Model;

    /// The semantic action for a rule marked as handled.
    fn build(&self, tree: &Tree<'_>, node: NodeId, model: &mut Self::Model) -> Result<(), Rejection>;

    fn output(&self, model: &Self::Model) -> Result<String, RenderingError>;
}

/// Parse the source and run the dialect's actions over the result.
pub fn interpret<D: Dialect>(dialect: &D, source: &str) -> Result<D::Model, ParsingError> {
    let grammar = dialect.grammar();
    let tree = Engine::new(grammar, source).parse()?;

    let mut model = dialect.model();
    engine::apply(grammar, &tree, &mut model, |tree, node, model| {
        dialect.build(tree, node, model)
    })?;

    Ok(model)
}

/// Source text in, output text out.
pub fn process<D: Dialect>(dialect: &D, source: &str) -> Result<String, FormsError> {
    let model = interpret(dialect, source)?;
    let output = dialect.output(&model)?;
    Ok(output)
}

#[derive(Debug, Clone)]
pub struct FastForms {
    grammar: Grammar,
}

impl FastForms {
    pub fn new() -> Result<FastForms, GrammarError> {
        Ok(FastForms {
            grammar: table::grammar()?,
        })
    }
}

impl Dialect for FastForms {
    type Model = Model;

    fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    fn model(&self) -> Model {
        Model::default()
    }

    fn build(&self, tree: &Tree<'_>, node: NodeId, model: &mut Model) -> Result<(), Rejection> {
        building::build(tree, node, model)
    }

    fn output(&self, model: &Model) -> Result<String, RenderingError> {
        rendering::render(model)
    }
}
