//! Errors reported to callers, and their presentation

use std::fmt;

use crate::grammar::GrammarError;
use crate::parsing::ParsingError;
use crate::rendering::RenderingError;

mod display;

pub use display::Diagnostic;

/// Anything that can go wrong turning Fast Forms source into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormsError {
    Grammar(GrammarError),
    Parsing(ParsingError),
    Rendering(RenderingError),
}

impl fmt::Display for FormsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormsError::Grammar(error) => write!(f, "{}", error),
            FormsError::Parsing(error) => write!(f, "{}", error),
            FormsError::Rendering(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for FormsError {}

impl From<GrammarError> for FormsError {
    fn from(error: GrammarError) -> Self {
        FormsError::Grammar(error)
    }
}

impl From<ParsingError> for FormsError {
    fn from(error: ParsingError) -> Self {
        match error {
            ParsingError::Grammar(error) => FormsError::Grammar(error),
            _ => FormsError::Parsing(error),
        }
    }
}

impl From<RenderingError> for FormsError {
    fn from(error: RenderingError) -> Self {
        FormsError::Rendering(error)
    }
}
