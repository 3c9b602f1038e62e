//! The rules of the Fast Forms language.
//!
//! A document is a block of form attributes followed by blocks describing
//! fields, each separated by a blank line:
//!
//! ```text
//! - method post
//!
//! text
//! - name name
//! - required
//!
//! select
//! - name department
//! - [
//!   sales
//!   tech Tech Support
//! ]
//! ```

use super::{Example, Format, Grammar, GrammarError, Metadata, PartDefinition};

pub const FORM: &str = "form";
pub const FORM_ATTRIBUTE: &str = "form attribute";
pub const FIELD: &str = "field";
pub const FIELD_TYPE: &str = "field type";
pub const FIELD_NAME: &str = "field name";
pub const FIELD_ATTRIBUTE: &str = "field attribute";
pub const ARRAY: &str = "array";
pub const ARRAY_OPEN: &str = "array open";
pub const ARRAY_CLOSE: &str = "array close";
pub const OPTION: &str = "option";
pub const NAME: &str = "name";
pub const VALUE: &str = "value";
pub const HYPHEN: &str = "hyphen";
pub const INDENT: &str = "indent";
pub const NEWLINE: &str = "newline";

static CONTACT_FORM: &str = r#"- method post

text
- name name
- maxlength 30
- required

email
- name email

textarea
- name message

submit
- value Send message"#;

static OPTION_FIELDS: &str = r#"radio
- name preference
- [
  call Call me back
  email Email me a message
  mail Send me a letter
]

checkbox
- name permission
- [
  yes I give my permission to contact me
]

select
- name department
- [
  sales
  tech Tech Support
  receivables
]"#;

pub fn metadata() -> Metadata {
    Metadata {
        title: "Fast Forms",
        description: "The Fast Forms DSL speeds the creation of HTML5 forms, often cutting the number of characters required in half.",
        version: "1.0",
        examples: vec![
            Example {
                title: "Basic Contact Form",
                source: CONTACT_FORM,
            },
            Example {
                title: "Option Fields",
                source: OPTION_FIELDS,
            },
        ],
    }
}

pub fn definitions() -> Result<Vec<PartDefinition>, GrammarError> {
    Ok(vec![
        PartDefinition::sequence(FORM, &[&["form attribute*", "field*"]])
            .described("Composed of zero-or-more attributes and zero-or-more fields."),
        PartDefinition::sequence(FORM_ATTRIBUTE, &[&[HYPHEN, NAME, "value?", NEWLINE]])
            .described("Defines an attribute of the form tag.")
            .handled(),
        PartDefinition::sequence(FIELD, &[&["newline?", FIELD_TYPE, "field attribute*"]])
            .described("Composed of optional new-line, field type, and zero-or-more field attributes.")
            .handled(),
        PartDefinition::sequence(FIELD_TYPE, &[&[FIELD_NAME, NEWLINE]])
            .described("The input type of a field, on a line of its own."),
        PartDefinition::terminal(FIELD_NAME, r"[a-zA-Z][a-zA-Z0-9_-]+")?,
        PartDefinition::sequence(
            FIELD_ATTRIBUTE,
            &[
                &[HYPHEN, NAME, "value?", "newline?"],
                &[HYPHEN, ARRAY, "newline?"],
            ],
        )
        .described("An attribute of a field, either a name and value or an array of options."),
        PartDefinition::sequence(ARRAY, &[&[ARRAY_OPEN, NEWLINE, "option*", ARRAY_CLOSE]])
            .described("Square brackets enclosing one option per line."),
        PartDefinition::terminal(ARRAY_OPEN, r"\[")?.ignored(),
        PartDefinition::sequence(OPTION, &[&[INDENT, NAME, "value?", NEWLINE]])
            .described("An indented option value, optionally followed by its label."),
        PartDefinition::terminal(ARRAY_CLOSE, r"\]")?.ignored(),
        // grab up to and including the first space, keeping only the name
        PartDefinition::terminal(NAME, r"([a-zA-Z0-9_.-]+)( )?")?.formatted(Format::Group(1)),
        PartDefinition::terminal(VALUE, r"[^\n]+")?,
        PartDefinition::terminal(HYPHEN, r"- ")?.ignored(),
        PartDefinition::terminal(INDENT, r"  ")?.ignored(),
        PartDefinition::terminal(NEWLINE, r"\n")?.ignored(),
    ])
}

/// The validated grammar table, rooted at "form".
pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::new(metadata(), FORM, definitions()?)
}
