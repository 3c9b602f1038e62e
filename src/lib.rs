//! Fast Forms: a terse, line-oriented language for writing HTML5 forms.
//!
//! ```text
//! - method post
//!
//! text
//! - name name
//! - required
//!
//! submit
//! - value Send message
//! ```

pub mod building;
pub mod dialect;
pub mod error;
pub mod grammar;
pub mod language;
pub mod output;
pub mod parsing;
pub mod rendering;

use dialect::FastForms;
use error::FormsError;

/// Convert Fast Forms source into the markup of a `<form>` element. Nothing
/// is produced if any part of the source fails to parse.
pub fn convert(source: &str) -> Result<String, FormsError> {
    let forms = FastForms::new()?;
    dialect::process(&forms, source)
}
