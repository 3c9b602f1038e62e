//! Types representing the semantic model of a form, accumulated while a
//! document is being parsed and subsequently consumed by the renderer.

use indexmap::IndexMap;

/// Everything a Fast Forms document says about a form: the attributes of
/// the `<form>` tag itself, in the order they were declared, and the
/// fields within it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub attributes: Vec<Attribute>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// A bare attribute (one given without a value) takes its own name as
    /// its value, which is how `- required` becomes `required="required"`.
    pub fn new(name: &str, value: Option<&str>) -> Attribute {
        Attribute {
            name: name.to_string(),
            value: value
                .unwrap_or(name)
                .to_string(),
        }
    }
}

/// One form control. The generic attributes and the options are kept in
/// declaration order so that rendering is reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    pub input_type: String,
    pub label: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub attributes: IndexMap<String, String>,
    pub options: IndexMap<String, String>,
}

impl Field {
    pub fn new(input_type: &str) -> Field {
        Field {
            input_type: input_type.to_string(),
            ..Field::default()
        }
    }

    /// Record an attribute declared on this field. A `label` is held apart
    /// and never becomes an attribute of the rendered element; `id` and
    /// `name` are remembered specially but are also ordinary attributes.
    /// Declaring the same attribute twice replaces the earlier value in
    /// its original position.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match name {
            "label" => {
                self.label = Some(value.to_string());
                return;
            }
            "id" => self.id = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            _ => {}
        }

        self.attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn add_option(&mut self, option: FormOption) {
        self.options
            .insert(option.value, option.label);
    }
}

/// A choice offered by a `select`, `radio` or `checkbox` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

impl FormOption {
    /// Without an explicit label the value is shown, capitalized.
    pub fn new(value: &str, label: Option<&str>) -> FormOption {
        let label = match label {
            Some(label) => label.to_string(),
            None => capitalize(value),
        };

        FormOption {
            value: value.to_string(),
            label,
        }
    }
}

/// Upper-case the first character, leaving the rest untouched. The empty
/// string comes back empty.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}
