//! Recursive descent over a grammar table.
//!
//! Rules are tried against the text at a cursor position. Alternatives are
//! ordered and the first to match in full wins; there is no ambiguity
//! resolution and no left recursion. Nodes of the match tree live in an
//! arena and refer to their children by index.

use std::collections::HashMap;
use std::ops::Index;
use tracing::{debug, trace};

use super::{Constituent, Format, Grammar, GrammarError, Quantifier, RuleKind};
use crate::parsing::ParsingError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NodeId(usize);

/// A node of the match tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<'i> {
    pub rule: &'static str,
    /// For a terminal, the (possibly formatted) match; for a composite rule,
    /// the whole span of text it consumed.
    pub value: &'i str,
    pub offset: usize,
    pub children: Vec<NodeId>,
}

/// The result of a successful match. Nodes are stored in the order their
/// rules completed, so every child precedes its parent and the root is
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<'i> {
    nodes: Vec<Part<'i>>,
    root: NodeId,
}

impl<'i> Tree<'i> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes
            .is_empty()
    }

    pub fn children<'t>(&'t self, part: &'t Part<'i>) -> impl Iterator<Item = &'t Part<'i>> + 't {
        part.children
            .iter()
            .map(move |id| &self.nodes[id.0])
    }

    /// Every node, bottom-up, in the order its rule finished matching.
    pub fn completed(&self) -> impl Iterator<Item = (NodeId, &Part<'i>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, part)| (NodeId(i), part))
    }
}

impl<'i> Index<NodeId> for Tree<'i> {
    type Output = Part<'i>;

    fn index(&self, id: NodeId) -> &Part<'i> {
        &self.nodes[id.0]
    }
}

/// Returned by a semantic action that refuses an otherwise good match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Rejection {
        Rejection {
            reason: reason.into(),
        }
    }
}

enum Outcome {
    Node(NodeId),
    Skipped, // matched an ignored rule
}

#[derive(Debug)]
pub struct Engine<'g, 'i> {
    grammar: &'g Grammar,
    source: &'i str,
    nodes: Vec<Part<'i>>,
    furthest: Option<(usize, &'static str)>,
    failures: HashMap<usize, &'static str>,
}

impl<'g, 'i> Engine<'g, 'i> {
    pub fn new(grammar: &'g Grammar, source: &'i str) -> Engine<'g, 'i> {
        Engine {
            grammar,
            source,
            nodes: Vec::new(),
            furthest: None,
            failures: HashMap::new(),
        }
    }

    /// Match the grammar's root rule against the whole of the source.
    /// Whitespace may follow whatever the root rule consumed; anything else
    /// is an error. If some rule was tried and failed right where the
    /// leftover input begins, the error names it.
    pub fn parse(mut self) -> Result<Tree<'i>, ParsingError> {
        let root = self
            .grammar
            .root();

        match self.attempt(root, root, 0)? {
            Some((Outcome::Node(id), end)) => {
                let rest = &self.source[end..];
                let remaining = rest.trim_start();
                if !remaining.is_empty() {
                    let offset = self.source.len() - remaining.len();
                    debug!(offset, "Input remaining after root rule matched");

                    let rule = self
                        .failures
                        .get(&offset)
                        .or_else(|| {
                            self.failures
                                .get(&end)
                        })
                        .copied();
                    return Err(match rule {
                        Some(rule) => ParsingError::Expected(offset, rule),
                        None => ParsingError::TrailingInput(offset),
                    });
                }

                debug!("Matched {} nodes", self.nodes.len());
                Ok(Tree {
                    nodes: self.nodes,
                    root: id,
                })
            }
            // unreachable once Grammar::new has refused an ignored root
            Some((Outcome::Skipped, _)) => Err(GrammarError::IgnoredRoot(root).into()),
            None => {
                let (offset, rule) = self
                    .furthest
                    .unwrap_or((0, root));
                Err(ParsingError::Expected(offset, rule))
            }
        }
    }

    /// Try to match the named rule at the given offset, returning what
    /// matched and the offset just past it. `None` means the rule did not
    /// match, and the caller's position is unchanged.
    fn attempt(
        &mut self,
        name: &'static str,
        parent: &'static str,
        offset: usize,
    ) -> Result<Option<(Outcome, usize)>, ParsingError> {
        let grammar = self.grammar;
        let source = self.source;
        let rule = grammar
            .rule(name)
            .ok_or(GrammarError::UnknownRule {
                rule: name,
                referenced_by: parent,
            })?;

        trace!(rule = name, offset);

        match &rule.kind {
            RuleKind::Terminal { regex, format } => {
                let rest = &source[offset..];

                let captures = match regex.captures(rest) {
                    Some(captures) => captures,
                    None => {
                        self.note_failure(offset, name);
                        return Ok(None);
                    }
                };

                let width = captures
                    .get(0)
                    .map_or(0, |whole| whole.end());
                let end = offset + width;

                if rule.ignore {
                    return Ok(Some((Outcome::Skipped, end)));
                }

                let value = match format {
                    Format::Whole => &rest[..width],
                    Format::Group(n) => captures
                        .get(*n)
                        .map_or("", |group| group.as_str()),
                };

                let id = self.push(Part {
                    rule: name,
                    value,
                    offset,
                    children: Vec::new(),
                });
                Ok(Some((Outcome::Node(id), end)))
            }
            RuleKind::Sequence { alternatives } => {
                for alternative in alternatives {
                    let mark = self
                        .nodes
                        .len();

                    if let Some((children, end)) =
                        self.attempt_alternative(name, alternative, offset)?
                    {
                        if rule.ignore {
                            self.nodes
                                .truncate(mark);
                            return Ok(Some((Outcome::Skipped, end)));
                        }

                        let id = self.push(Part {
                            rule: name,
                            value: &source[offset..end],
                            offset,
                            children,
                        });
                        return Ok(Some((Outcome::Node(id), end)));
                    }

                    // discard whatever the failed alternative had built
                    self.nodes
                        .truncate(mark);
                }
                Ok(None)
            }
        }
    }

    fn attempt_alternative(
        &mut self,
        parent: &'static str,
        alternative: &[Constituent],
        offset: usize,
    ) -> Result<Option<(Vec<NodeId>, usize)>, ParsingError> {
        let mut children = Vec::new();
        let mut position = offset;

        for constituent in alternative {
            match constituent.quantifier {
                Quantifier::One => match self.attempt(constituent.rule, parent, position)? {
                    Some((outcome, end)) => {
                        collect(outcome, &mut children);
                        position = end;
                    }
                    None => return Ok(None),
                },
                Quantifier::Optional => {
                    if let Some((outcome, end)) = self.attempt(constituent.rule, parent, position)? {
                        collect(outcome, &mut children);
                        position = end;
                    }
                }
                Quantifier::Many => {
                    while let Some((outcome, end)) = self.attempt(constituent.rule, parent, position)? {
                        collect(outcome, &mut children);
                        if end == position {
                            // a match that consumes nothing would repeat forever
                            break;
                        }
                        position = end;
                    }
                }
            }
        }

        Ok(Some((children, position)))
    }

    fn push(&mut self, part: Part<'i>) -> NodeId {
        self.nodes
            .push(part);
        NodeId(self.nodes.len() - 1)
    }

    fn note_failure(&mut self, offset: usize, rule: &'static str) {
        self.failures
            .entry(offset)
            .or_insert(rule);

        match self.furthest {
            Some((furthest, _)) if furthest >= offset => {}
            _ => self.furthest = Some((offset, rule)),
        }
    }
}

fn collect(outcome: Outcome, children: &mut Vec<NodeId>) {
    if let Outcome::Node(id) = outcome {
        children.push(id);
    }
}

/// Run the semantic action of every handled rule in the tree, bottom-up.
/// Actions only ever see matches that survived into the final tree; the
/// first rejection stops the walk.
pub fn apply<M, F>(
    grammar: &Grammar,
    tree: &Tree<'_>,
    model: &mut M,
    mut handler: F,
) -> Result<(), ParsingError>
where
    F: FnMut(&Tree<'_>, NodeId, &mut M) -> Result<(), Rejection>,
{
    for (id, part) in tree.completed() {
        let rule = grammar
            .rule(part.rule)
            .ok_or(GrammarError::UnknownRule {
                rule: part.rule,
                referenced_by: grammar.root(),
            })?;

        if !rule.handled {
            continue;
        }

        trace!(rule = part.rule, offset = part.offset, "handling");

        handler(tree, id, model).map_err(|rejection| {
            debug!(rule = part.rule, reason = %rejection.reason, "Rejected");
            ParsingError::Rejected(part.offset, part.rule, rejection.reason)
        })?;
    }
    Ok(())
}
