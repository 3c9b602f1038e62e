#[cfg(test)]
mod verify {
    use std::path::Path;

    use fastforms::error::{Diagnostic, FormsError};
    use fastforms::language::*;
    use fastforms::parsing::{self, ParsingError};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn pairs(map: &indexmap::IndexMap<String, String>) -> Vec<(&str, &str)> {
        map.iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn contact_message() {
        let result = fastforms::convert(trim(
            r#"
- method post

text
- name name
- maxlength 30
- required

submit
- value Send message
            "#,
        ));

        assert_eq!(
            result,
            Ok(trim(
                r#"
<form method="post">
  <div class="form-group">
    <label for="name">Name</label>
    <input type="text" name="name" maxlength="30" required="required" id="name" />
  </div>
  <div class="form-group">
    <input type="submit" value="Send message" name="field2" id="field2" />
  </div>
</form>
"#
            )
            .to_string())
        );
    }

    #[test]
    fn select_options_in_declared_order() {
        let result = fastforms::convert(trim(
            r#"
select
- name department
- [
  sales
  tech Tech Support
  receivables
]
            "#,
        ))
        .unwrap();

        assert!(result.contains(trim(
            r#"
    <select name="department" id="department">
      <option value="sales">Sales</option>
      <option value="tech">Tech Support</option>
      <option value="receivables">Receivables</option>
    </select>
"#
        )));
    }

    #[test]
    fn radio_id_only_on_first_input() {
        let result = fastforms::convert(trim(
            r#"
radio
- id contact
- name preference
- [
  call Call me back
  email
]
            "#,
        ))
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
<form>
  <div class="form-group">
    <label><input type="radio" id="contact" name="preference" value="call"/>Call me back</label>
    <label><input type="radio" name="preference" value="email"/>Email</label>
  </div>
</form>
"#
            )
        );
        assert_eq!(
            result
                .matches("id=\"contact\"")
                .count(),
            1
        );
    }

    #[test]
    fn default_values() {
        let model = parsing::parse(trim(
            r#"
checkbox
- required
- [
  call Call me back
  sales
]
            "#,
        ))
        .unwrap();

        let field = &model.fields[0];
        assert_eq!(pairs(&field.attributes), vec![("required", "required")]);
        assert_eq!(
            pairs(&field.options),
            vec![("call", "Call me back"), ("sales", "Sales")]
        );
    }

    #[test]
    fn fourth_field_is_named_field4() {
        let model = parsing::parse(trim(
            r#"
text
- name one

text
- name two

text
- name three

text
- maxlength 5
            "#,
        ))
        .unwrap();

        assert_eq!(model.fields.len(), 4);
        assert_eq!(model.fields[3].name, None);

        let html = fastforms::rendering::render(&model).unwrap();
        assert!(html.contains(
            r#"<input type="text" maxlength="5" name="field4" id="field4" />"#
        ));
        assert!(html.contains(r#"<label for="field4">Field4</label>"#));
    }

    #[test]
    fn parsing_is_deterministic() {
        let source = trim(
            r#"
- method post
- action /go

select
- name department
- size 3
- multiple
- [
  sales
  tech Tech Support
  receivables
  zoo
  alpha
]
            "#,
        );

        let first = parsing::parse(source).unwrap();
        let second = parsing::parse(source).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.attributes, second.attributes);
        for (one, two) in first
            .fields
            .iter()
            .zip(second.fields.iter())
        {
            assert_eq!(pairs(&one.attributes), pairs(&two.attributes));
            assert_eq!(pairs(&one.options), pairs(&two.options));
        }

        let values: Vec<&str> = first.fields[0]
            .options
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(values, vec!["sales", "tech", "receivables", "zoo", "alpha"]);
    }

    #[test]
    fn form_attributes() {
        let model = parsing::parse("- method post\n- novalidate\n").unwrap();
        assert_eq!(
            model,
            Model {
                attributes: vec![
                    Attribute {
                        name: "method".to_string(),
                        value: "post".to_string()
                    },
                    Attribute {
                        name: "novalidate".to_string(),
                        value: "novalidate".to_string()
                    },
                ],
                fields: vec![],
            }
        );
    }

    #[test]
    fn missing_hyphen() {
        let source = trim(
            r#"
text
- name name
maxlength 30
            "#,
        );

        let error = parsing::parse(source).unwrap_err();
        assert_eq!(error, ParsingError::Expected(17, "hyphen"));
        assert_eq!(error.message(), "expected hyphen");

        let diagnostic = Diagnostic::new(&error, Path::new("broken.ff"), source);
        assert_eq!(diagnostic.location(), (3, 1));
        assert_eq!(
            diagnostic.to_string(),
            "error: broken.ff:3:1 expected hyphen"
        );

        let result = fastforms::convert(source);
        assert_eq!(
            result,
            Err(FormsError::Parsing(ParsingError::Expected(17, "hyphen")))
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(fastforms::convert(""), Ok("<form>\n</form>\n".to_string()));
        assert_eq!(fastforms::convert("\n\n"), Ok("<form>\n</form>\n".to_string()));
    }
}
