//! The declarative pieces a grammar is written in.

use regex::Regex;
use std::fmt;

use super::GrammarError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quantifier {
    One,      // exactly once
    Optional, // zero or one, written with a trailing '?'
    Many,     // zero or more, written with a trailing '*'
}

/// A reference from within a sequence to another rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Constituent {
    pub rule: &'static str,
    pub quantifier: Quantifier,
}

impl Constituent {
    /// Read a reference such as `"value?"` or `"option*"`.
    pub fn parse(reference: &'static str) -> Constituent {
        if let Some(rule) = reference.strip_suffix('?') {
            Constituent {
                rule,
                quantifier: Quantifier::Optional,
            }
        } else if let Some(rule) = reference.strip_suffix('*') {
            Constituent {
                rule,
                quantifier: Quantifier::Many,
            }
        } else {
            Constituent {
                rule: reference,
                quantifier: Quantifier::One,
            }
        }
    }
}

impl fmt::Display for Constituent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantifier {
            Quantifier::One => write!(f, "{}", self.rule),
            Quantifier::Optional => write!(f, "{}?", self.rule),
            Quantifier::Many => write!(f, "{}*", self.rule),
        }
    }
}

/// Which part of a terminal's match becomes the value of its node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Whole,
    Group(usize),
}

#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Matched directly against the text at the current position.
    Terminal { regex: Regex, format: Format },
    /// Ordered alternatives; the first that matches in full wins.
    Sequence { alternatives: Vec<Vec<Constituent>> },
}

/// A named rule of a grammar.
#[derive(Debug, Clone)]
pub struct PartDefinition {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub kind: RuleKind,
    pub ignore: bool,
    pub handled: bool,
}

impl PartDefinition {
    /// A rule matched by regular expression. The pattern is anchored at
    /// the position being matched, so there is no need to begin it with
    /// '^'.
    pub fn terminal(name: &'static str, pattern: &str) -> Result<PartDefinition, GrammarError> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|error| {
            GrammarError::InvalidPattern {
                rule: name,
                message: error.to_string(),
            }
        })?;

        Ok(PartDefinition {
            name,
            description: None,
            kind: RuleKind::Terminal {
                regex,
                format: Format::Whole,
            },
            ignore: false,
            handled: false,
        })
    }

    /// A rule composed of other rules, given as one or more alternative
    /// sequences of references.
    pub fn sequence(name: &'static str, alternatives: &[&[&'static str]]) -> PartDefinition {
        let alternatives = alternatives
            .iter()
            .map(|sequence| {
                sequence
                    .iter()
                    .map(|reference| Constituent::parse(*reference))
                    .collect()
            })
            .collect();

        PartDefinition {
            name,
            description: None,
            kind: RuleKind::Sequence { alternatives },
            ignore: false,
            handled: false,
        }
    }

    pub fn described(mut self, description: &'static str) -> PartDefinition {
        self.description = Some(description);
        self
    }

    /// Take the value of this terminal's node from the given capture group
    /// rather than from the whole match.
    pub fn formatted(mut self, format: Format) -> PartDefinition {
        if let RuleKind::Terminal { format: ref mut current, .. } = self.kind {
            *current = format;
        }
        self
    }

    /// Consume the text but leave no node behind.
    pub fn ignored(mut self) -> PartDefinition {
        self.ignore = true;
        self
    }

    /// Ask for the dialect's builder to be run whenever this rule has
    /// matched.
    pub fn handled(mut self) -> PartDefinition {
        self.handled = true;
        self
    }

    /// Human readable summary of what this rule matches.
    pub fn shape(&self) -> String {
        let mut result = match &self.kind {
            RuleKind::Terminal { regex, .. } => {
                let pattern = regex.as_str();
                let pattern = pattern
                    .strip_prefix("^(?:")
                    .and_then(|inner| inner.strip_suffix(')'))
                    .unwrap_or(pattern);
                format!("/{}/", pattern)
            }
            RuleKind::Sequence { alternatives } => alternatives
                .iter()
                .map(|sequence| {
                    sequence
                        .iter()
                        .map(|constituent| constituent.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect::<Vec<_>>()
                .join(" | "),
        };

        if self.ignore {
            result.push_str(" (ignored)");
        }
        result
    }
}
