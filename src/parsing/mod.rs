//! parser for the Fast Forms language

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::dialect::{self, FastForms};
use crate::language::{LoadingError, Model};

mod error;

pub use error::ParsingError;

/// Read a file and return an owned String. A filename of "-" reads
/// standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Model describing the form, or return the error that
/// stopped the parse.
pub fn parse(content: &str) -> Result<Model, ParsingError> {
    let forms = FastForms::new()?;
    let result = dialect::interpret(&forms, content);

    match result {
        Ok(model) => {
            debug!(
                "Found {} attribute{} and {} field{}",
                model
                    .attributes
                    .len(),
                if model.attributes.len() == 1 { "" } else { "s" },
                model
                    .fields
                    .len(),
                if model.fields.len() == 1 { "" } else { "s" }
            );
            Ok(model)
        }
        Err(error) => {
            debug!(%error);
            Err(error)
        }
    }
}
