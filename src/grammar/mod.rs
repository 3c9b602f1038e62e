//! Grammar tables and the engine that interprets them.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

mod definition;
pub mod engine;
pub mod table;

pub use definition::*;
pub use engine::{Engine, NodeId, Part, Rejection, Tree};

/// Descriptive information about a dialect, for tooling and for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub source: &'static str,
}

/// Defects in a grammar table. These are found when the grammar is
/// constructed, before any input is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    DuplicateRule(&'static str),
    UnknownRule {
        rule: &'static str,
        referenced_by: &'static str,
    },
    MissingRoot(&'static str),
    IgnoredRoot(&'static str),
    InvalidPattern {
        rule: &'static str,
        message: String,
    },
    EmptySequence(&'static str),
    IgnoredAction(&'static str),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateRule(rule) => write!(f, "rule \"{}\" is defined twice", rule),
            GrammarError::UnknownRule {
                rule,
                referenced_by,
            } => write!(
                f,
                "rule \"{}\" refers to \"{}\" which is not defined",
                referenced_by, rule
            ),
            GrammarError::MissingRoot(rule) => write!(f, "root rule \"{}\" is not defined", rule),
            GrammarError::IgnoredRoot(rule) => write!(f, "root rule \"{}\" is ignored", rule),
            GrammarError::InvalidPattern { rule, message } => {
                write!(f, "rule \"{}\" has an invalid pattern: {}", rule, message)
            }
            GrammarError::EmptySequence(rule) => {
                write!(f, "rule \"{}\" has an empty sequence", rule)
            }
            GrammarError::IgnoredAction(rule) => write!(
                f,
                "rule \"{}\" is ignored and so cannot have a handler",
                rule
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// A validated set of rules. Once constructed it is never modified, and
/// can be shared between threads; everything a parse mutates belongs to
/// that parse.
#[derive(Debug, Clone)]
pub struct Grammar {
    metadata: Metadata,
    root: &'static str,
    rules: IndexMap<&'static str, PartDefinition>,
}

impl Grammar {
    pub fn new(
        metadata: Metadata,
        root: &'static str,
        definitions: Vec<PartDefinition>,
    ) -> Result<Grammar, GrammarError> {
        let mut rules = IndexMap::new();

        for definition in definitions {
            let name = definition.name;
            if rules
                .insert(name, definition)
                .is_some()
            {
                return Err(GrammarError::DuplicateRule(name));
            }
        }

        for definition in rules.values() {
            if definition.ignore && definition.handled {
                return Err(GrammarError::IgnoredAction(definition.name));
            }

            if let RuleKind::Sequence { alternatives } = &definition.kind {
                if alternatives.is_empty()
                    || alternatives
                        .iter()
                        .any(|sequence| sequence.is_empty())
                {
                    return Err(GrammarError::EmptySequence(definition.name));
                }

                for constituent in alternatives
                    .iter()
                    .flatten()
                {
                    if !rules.contains_key(constituent.rule) {
                        return Err(GrammarError::UnknownRule {
                            rule: constituent.rule,
                            referenced_by: definition.name,
                        });
                    }
                }
            }
        }

        match rules.get(root) {
            None => return Err(GrammarError::MissingRoot(root)),
            Some(definition) if definition.ignore => return Err(GrammarError::IgnoredRoot(root)),
            Some(_) => {}
        }

        debug!(
            "Loaded grammar \"{}\" with {} rule{}",
            metadata.title,
            rules.len(),
            if rules.len() == 1 { "" } else { "s" }
        );

        Ok(Grammar {
            metadata,
            root,
            rules,
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn rule(&self, name: &str) -> Option<&PartDefinition> {
        self.rules
            .get(name)
    }

    /// All rules, in the order they were defined.
    pub fn rules(&self) -> impl Iterator<Item = &PartDefinition> {
        self.rules
            .values()
    }
}
