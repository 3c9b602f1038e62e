//! Output generation for the Fast Forms CLI application

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::{debug, info};

use crate::grammar::{Example, Grammar};

static TEMPLATE: &'static str = r#"{title} (version {version})

{description}

Rules, starting from "{root}":
{{ for rule in rules }}  {rule.name} = {rule.shape}{{ if rule.description }}
      {rule.description}{{ endif }}
{{ endfor }}{{ if show_examples }}{{ for example in examples }}
# {example.title}

{example.source}
{{ endfor }}{{ endif }}"#;

#[derive(Serialize)]
struct Context<'g> {
    title: &'g str,
    description: &'g str,
    version: &'g str,
    root: &'g str,
    rules: Vec<Rule<'g>>,
    examples: &'g [Example],
    show_examples: bool,
}

#[derive(Serialize)]
struct Rule<'g> {
    name: &'g str,
    shape: String,
    description: &'g str,
}

/// Describe a grammar for humans: its metadata, its rules, and optionally
/// its worked examples.
pub fn describe(grammar: &Grammar, show_examples: bool) -> Result<String, tinytemplate::error::Error> {
    let metadata = grammar.metadata();

    let context = Context {
        title: metadata.title,
        description: metadata.description,
        version: metadata.version,
        root: grammar.root(),
        rules: grammar
            .rules()
            .map(|rule| Rule {
                name: rule.name,
                shape: rule.shape(),
                description: rule
                    .description
                    .unwrap_or(""),
            })
            .collect(),
        examples: &metadata.examples,
        show_examples,
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("describe", TEMPLATE)?;

    tt.render("describe", &context)
}

/// Write the rendered markup to the named file, or to standard output if
/// no file (or "-") was given.
pub fn write(target: Option<&Path>, markup: &str) -> std::io::Result<()> {
    match target {
        Some(path) if path.to_str() != Some("-") => {
            info!("Writing file: {}", path.display());
            std::fs::write(path, markup)
        }
        _ => {
            debug!("Writing to standard output");
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()
        }
    }
}
