use std::fmt;

use crate::grammar::GrammarError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    Grammar(GrammarError),
    Expected(usize, &'static str),
    TrailingInput(usize),
    Rejected(usize, &'static str, String),
}

impl ParsingError {
    /// Byte offset into the source where the problem was found.
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::Grammar(_) => 0,
            ParsingError::Expected(offset, _) => *offset,
            ParsingError::TrailingInput(offset) => *offset,
            ParsingError::Rejected(offset, _, _) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::Grammar(error) => format!("invalid grammar: {}", error),
            ParsingError::Expected(_, rule) => format!("expected {}", rule),
            ParsingError::TrailingInput(_) => "unexpected input".to_string(),
            ParsingError::Rejected(_, rule, _) => format!("invalid {}", rule),
        }
    }

    /// Longer explanation, suitable for showing underneath the offending
    /// line of source.
    pub fn details(&self) -> String {
        match self {
            ParsingError::Grammar(_) => {
                "The grammar table itself is defective. This should not have happened! Sorry."
                    .to_string()
            }
            ParsingError::Expected(_, rule) => format!(
                "The parser was looking for {} but found something else.",
                rule
            ),
            ParsingError::TrailingInput(_) => r#"
Form attributes and field attributes are lines beginning with a hyphen and
a space, as in "- method post". Fields begin with a line naming the input
type, such as "text" or "select", and are separated by a single blank line.
            "#
            .trim_ascii()
            .to_string(),
            ParsingError::Rejected(_, _, reason) => reason.clone(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

impl From<GrammarError> for ParsingError {
    fn from(error: GrammarError) -> Self {
        ParsingError::Grammar(error)
    }
}
