//! Markup for each kind of form control.

use std::borrow::Cow;

use crate::language::{capitalize, Field};

pub(crate) const INDENT: &str = "  ";

/// How a field is turned into markup, chosen by its input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy<'m> {
    Textarea,
    Select,
    Choice(&'m str), // radio and checkbox
    Input(&'m str),
}

impl<'m> Strategy<'m> {
    pub(crate) fn of(input_type: &'m str) -> Strategy<'m> {
        match input_type {
            "textarea" => Strategy::Textarea,
            "select" => Strategy::Select,
            "radio" | "checkbox" => Strategy::Choice(input_type),
            _ => Strategy::Input(input_type),
        }
    }
}

/// A field as it will be rendered: with a name and an id, synthesized if
/// the document didn't give them. The Field itself is left untouched.
pub(crate) struct Control<'m> {
    pub(crate) field: &'m Field,
    pub(crate) name: Cow<'m, str>,
    pub(crate) id: Cow<'m, str>,
    pub(crate) attributes: Vec<(&'m str, Cow<'m, str>)>,
}

impl<'m> Control<'m> {
    /// `ordinal` is the 1-based position of the field within the form.
    pub(crate) fn new(field: &'m Field, ordinal: usize) -> Control<'m> {
        let mut attributes: Vec<(&'m str, Cow<'m, str>)> = field
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), Cow::Borrowed(value.as_str())))
            .collect();

        let name = match &field.name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => {
                let name: Cow<'m, str> = Cow::Owned(format!("field{}", ordinal));
                assign(&mut attributes, "name", name.clone());
                name
            }
        };

        let id = match &field.id {
            Some(id) => Cow::Borrowed(id.as_str()),
            None => {
                assign(&mut attributes, "id", name.clone());
                name.clone()
            }
        };

        Control {
            field,
            name,
            id,
            attributes,
        }
    }

    /// The label is shown when one was declared, or else the capitalized
    /// name is shown, except on submit buttons.
    fn label(&self) -> Option<Cow<'m, str>> {
        match &self
            .field
            .label
        {
            Some(label) => Some(Cow::Borrowed(label.as_str())),
            None if self.field.input_type == "submit" => None,
            None => Some(Cow::Owned(capitalize(&self.name))),
        }
    }
}

fn assign<'m>(attributes: &mut Vec<(&'m str, Cow<'m, str>)>, name: &'m str, value: Cow<'m, str>) {
    match attributes
        .iter_mut()
        .find(|(existing, _)| *existing == name)
    {
        Some((_, current)) => *current = value,
        None => attributes.push((name, value)),
    }
}

pub(crate) fn attribute(output: &mut String, name: &str, value: &str) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    output.push_str(value);
    output.push('"');
}

fn attributes(output: &mut String, control: &Control<'_>) {
    for (name, value) in &control.attributes {
        attribute(output, name, value);
    }
}

pub(crate) fn render_label(output: &mut String, control: &Control<'_>) {
    if let Some(text) = control.label() {
        output.push_str(INDENT);
        output.push_str(INDENT);
        output.push_str("<label for=\"");
        output.push_str(&control.id);
        output.push_str("\">");
        output.push_str(&text);
        output.push_str("</label>\n");
    }
}

pub(crate) fn render_input(output: &mut String, control: &Control<'_>, input_type: &str) {
    output.push_str(INDENT);
    output.push_str(INDENT);
    output.push_str("<input");
    attribute(output, "type", input_type);
    attributes(output, control);
    output.push_str(" />\n");
}

pub(crate) fn render_textarea(output: &mut String, control: &Control<'_>) {
    output.push_str(INDENT);
    output.push_str(INDENT);
    output.push_str("<textarea");
    attributes(output, control);
    output.push_str("></textarea>\n");
}

pub(crate) fn render_select(output: &mut String, control: &Control<'_>) {
    output.push_str(INDENT);
    output.push_str(INDENT);
    output.push_str("<select");
    attributes(output, control);
    output.push_str(">\n");

    for (value, label) in &control
        .field
        .options
    {
        output.push_str(INDENT);
        output.push_str(INDENT);
        output.push_str(INDENT);
        output.push_str("<option");
        attribute(output, "value", value);
        output.push('>');
        output.push_str(label);
        output.push_str("</option>\n");
    }

    output.push_str(INDENT);
    output.push_str(INDENT);
    output.push_str("</select>\n");
}

/// One labelled input per option. Only the first input carries the id, so
/// that it remains unique within the document.
pub(crate) fn render_choices(output: &mut String, control: &Control<'_>, input_type: &str) {
    for (i, (value, label)) in control
        .field
        .options
        .iter()
        .enumerate()
    {
        output.push_str(INDENT);
        output.push_str(INDENT);
        output.push_str("<label><input");
        attribute(output, "type", input_type);
        for (name, setting) in &control.attributes {
            if i > 0 && *name == "id" {
                continue;
            }
            attribute(output, name, setting);
        }
        attribute(output, "value", value);
        output.push_str("/>");
        output.push_str(label);
        output.push_str("</label>\n");
    }
}
