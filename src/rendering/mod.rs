//! Renderer from a completed Model to an HTML5 form fragment

use std::fmt;
use tracing::debug;

use crate::language::Model;

mod html;

use html::{Control, Strategy, INDENT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderingError {
    /// The model describes something that cannot be rendered. `field` is
    /// the 1-based position of the offending field.
    InvalidModel { field: usize, problem: String },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderingError::InvalidModel { field, problem } => {
                write!(f, "cannot render field {}: {}", field, problem)
            }
        }
    }
}

impl std::error::Error for RenderingError {}

/// Produce the `<form>` element described by the model. Rendering the same
/// model again gives the same output; the model is never changed.
pub fn render(model: &Model) -> Result<String, RenderingError> {
    validate(model)?;

    let mut output = String::new();

    output.push_str("<form");
    for attribute in &model.attributes {
        html::attribute(&mut output, &attribute.name, &attribute.value);
    }
    output.push_str(">\n");

    for (i, field) in model
        .fields
        .iter()
        .enumerate()
    {
        let control = Control::new(field, i + 1);

        output.push_str(INDENT);
        output.push_str("<div class=\"form-group\">\n");

        match Strategy::of(&field.input_type) {
            Strategy::Textarea => {
                html::render_label(&mut output, &control);
                html::render_textarea(&mut output, &control);
            }
            Strategy::Select => {
                html::render_label(&mut output, &control);
                html::render_select(&mut output, &control);
            }
            Strategy::Choice(input_type) => {
                html::render_choices(&mut output, &control, input_type);
            }
            Strategy::Input(input_type) => {
                html::render_label(&mut output, &control);
                html::render_input(&mut output, &control, input_type);
            }
        }

        output.push_str(INDENT);
        output.push_str("</div>\n");
    }

    output.push_str("</form>\n");

    debug!(
        "Rendered {} field{}",
        model
            .fields
            .len(),
        if model.fields.len() == 1 { "" } else { "s" }
    );
    Ok(output)
}

fn validate(model: &Model) -> Result<(), RenderingError> {
    for (i, field) in model
        .fields
        .iter()
        .enumerate()
    {
        if field
            .input_type
            .is_empty()
        {
            return Err(RenderingError::InvalidModel {
                field: i + 1,
                problem: "the input type is empty".to_string(),
            });
        }
        if field
            .options
            .keys()
            .any(|value| value.is_empty())
        {
            return Err(RenderingError::InvalidModel {
                field: i + 1,
                problem: "an option has an empty value".to_string(),
            });
        }
    }
    Ok(())
}
