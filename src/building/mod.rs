//! Semantic actions which accumulate a Model as the rules of the Fast Forms
//! grammar match.

use tracing::debug;

use crate::grammar::table::{ARRAY, FIELD, FIELD_TYPE, FORM_ATTRIBUTE, NAME, OPTION, VALUE};
use crate::grammar::{NodeId, Part, Rejection, Tree};
use crate::language::{Attribute, Field, FormOption, Model};

/// Dispatch on the rule that matched. Rules without an action here are
/// accepted as they are.
pub fn build(tree: &Tree<'_>, node: NodeId, model: &mut Model) -> Result<(), Rejection> {
    let part = &tree[node];
    match part.rule {
        FORM_ATTRIBUTE => form_attribute(tree, part, model),
        FIELD => field(tree, part, model),
        _ => Ok(()),
    }
}

fn form_attribute(tree: &Tree<'_>, part: &Part<'_>, model: &mut Model) -> Result<(), Rejection> {
    let (name, value) = name_and_value(tree, part)?;

    model
        .attributes
        .push(Attribute::new(name, value));
    Ok(())
}

fn field(tree: &Tree<'_>, part: &Part<'_>, model: &mut Model) -> Result<(), Rejection> {
    let mut children = tree.children(part);

    // the input type is the first constituent of the first constituent
    let input_type = children
        .next()
        .filter(|child| child.rule == FIELD_TYPE)
        .and_then(|kind| {
            tree.children(kind)
                .next()
        })
        .ok_or_else(|| Rejection::new("A field must begin with a line naming its type."))?;

    let mut field = Field::new(input_type.value);

    for attribute in children {
        let first = tree
            .children(attribute)
            .next()
            .ok_or_else(|| Rejection::new("A field attribute must have a name or an array."))?;

        match first.rule {
            NAME => {
                let (name, value) = name_and_value(tree, attribute)?;
                field.set_attribute(name, value.unwrap_or(name));
            }
            ARRAY => {
                for option in tree.children(first) {
                    if option.rule != OPTION {
                        return Err(Rejection::new(format!(
                            "Arrays contain options, not {}.",
                            option.rule
                        )));
                    }
                    let (value, label) = name_and_value(tree, option)?;
                    field.add_option(FormOption::new(value, label));
                }
            }
            other => {
                return Err(Rejection::new(format!(
                    "A field attribute cannot begin with {}.",
                    other
                )))
            }
        }
    }

    debug!(
        input_type = %field.input_type,
        attributes = field
            .attributes
            .len(),
        options = field
            .options
            .len(),
        "Field"
    );

    model
        .fields
        .push(field);
    Ok(())
}

/// The leading name of a line and the value that may follow it.
fn name_and_value<'i>(
    tree: &Tree<'i>,
    part: &Part<'i>,
) -> Result<(&'i str, Option<&'i str>), Rejection> {
    let mut children = tree.children(part);

    let name = children
        .next()
        .filter(|child| child.rule == NAME)
        .ok_or_else(|| Rejection::new(format!("A {} must start with a name.", part.rule)))?;

    let value = children
        .next()
        .filter(|child| child.rule == VALUE)
        .map(|child| child.value);

    Ok((name.value, value))
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::grammar::table::{ARRAY_CLOSE, ARRAY_OPEN, FIELD_ATTRIBUTE, FIELD_NAME, HYPHEN, NEWLINE};
    use crate::grammar::{engine, table, Engine, Format, Grammar, PartDefinition};

    fn model_of(source: &str) -> Model {
        let grammar = table::grammar().unwrap();
        let tree = Engine::new(&grammar, source)
            .parse()
            .unwrap();
        let mut model = Model::default();
        engine::apply(&grammar, &tree, &mut model, build).unwrap();
        model
    }

    #[test]
    fn form_attributes_in_order() {
        let model = model_of("- method post\n- action /contact\n- novalidate\n");

        assert_eq!(
            model.attributes,
            vec![
                Attribute::new("method", Some("post")),
                Attribute::new("action", Some("/contact")),
                Attribute::new("novalidate", None),
            ]
        );
        assert!(model
            .fields
            .is_empty());
    }

    #[test]
    fn field_with_special_attributes() {
        let model = model_of("text\n- label Your name\n- id who\n- name person\n- required\n");

        assert_eq!(model.fields.len(), 1);
        let field = &model.fields[0];
        assert_eq!(field.input_type, "text");
        assert_eq!(field.label, Some("Your name".to_string()));
        assert_eq!(field.id, Some("who".to_string()));
        assert_eq!(field.name, Some("person".to_string()));

        let attributes: Vec<(&str, &str)> = field
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attributes,
            vec![("id", "who"), ("name", "person"), ("required", "required")]
        );
    }

    #[test]
    fn options_with_and_without_labels() {
        let model = model_of("radio\n- name preference\n- [\n  call Call me back\n  sales\n]\n");

        let options: Vec<(&str, &str)> = model.fields[0]
            .options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(options, vec![("call", "Call me back"), ("sales", "Sales")]);
    }

    #[test]
    fn fields_in_order() {
        let model = model_of("- method get\n\ntext\n- name q\n\nsubmit\n");

        let types: Vec<&str> = model
            .fields
            .iter()
            .map(|field| field.input_type.as_str())
            .collect();
        assert_eq!(types, vec!["text", "submit"]);
        assert_eq!(model.attributes.len(), 1);
    }

    /// Run the field action against the tree of a grammar which uses the
    /// same rule names as the real one but arranges them differently.
    fn reject(definitions: Vec<PartDefinition>, source: &str) -> Rejection {
        let grammar = Grammar::new(table::metadata(), FIELD, definitions).unwrap();
        let tree = Engine::new(&grammar, source)
            .parse()
            .unwrap();
        let mut model = Model::default();

        let rejection = build(&tree, tree.root(), &mut model).unwrap_err();
        assert!(model
            .fields
            .is_empty());
        rejection
    }

    fn terminals() -> Vec<PartDefinition> {
        vec![
            PartDefinition::terminal(FIELD_NAME, r"[a-z]+").unwrap(),
            PartDefinition::terminal(NAME, r"([a-z]+)( )?")
                .unwrap()
                .formatted(Format::Group(1)),
            PartDefinition::terminal(VALUE, r"[^\n]+").unwrap(),
            PartDefinition::terminal(HYPHEN, r"- ")
                .unwrap()
                .ignored(),
            PartDefinition::terminal(NEWLINE, r"\n")
                .unwrap()
                .ignored(),
            PartDefinition::terminal(ARRAY_OPEN, r"\[")
                .unwrap()
                .ignored(),
            PartDefinition::terminal(ARRAY_CLOSE, r"\]")
                .unwrap()
                .ignored(),
        ]
    }

    #[test]
    fn field_without_type() {
        let mut definitions = terminals();
        definitions.push(PartDefinition::sequence(FIELD, &[&[NAME, NEWLINE]]));

        let rejection = reject(definitions, "text\n");
        assert_eq!(
            rejection.reason,
            "A field must begin with a line naming its type."
        );
    }

    #[test]
    fn field_attribute_without_name() {
        let mut definitions = terminals();
        definitions.push(PartDefinition::sequence(FIELD, &[&[FIELD_TYPE, "field attribute*"]]));
        definitions.push(PartDefinition::sequence(FIELD_TYPE, &[&[FIELD_NAME, NEWLINE]]));
        definitions.push(PartDefinition::sequence(FIELD_ATTRIBUTE, &[&[HYPHEN, VALUE, "newline?"]]));

        let rejection = reject(definitions, "text\n- anything at all\n");
        assert_eq!(
            rejection.reason,
            "A field attribute cannot begin with value."
        );
    }

    #[test]
    fn array_of_something_other_than_options() {
        let mut definitions = terminals();
        definitions.push(PartDefinition::sequence(FIELD, &[&[FIELD_TYPE, "field attribute*"]]));
        definitions.push(PartDefinition::sequence(FIELD_TYPE, &[&[FIELD_NAME, NEWLINE]]));
        definitions.push(PartDefinition::sequence(FIELD_ATTRIBUTE, &[&[HYPHEN, ARRAY, "newline?"]]));
        definitions.push(PartDefinition::sequence(ARRAY, &[&[ARRAY_OPEN, NAME, ARRAY_CLOSE]]));

        let rejection = reject(definitions, "select\n- [one]\n");
        assert_eq!(rejection.reason, "Arrays contain options, not name.");
    }
}
