use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, Level};

use fastforms::dialect::{Dialect, FastForms};
use fastforms::error::{Diagnostic, FormsError};
use fastforms::{output, parsing, rendering};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("fastforms")
        .version(VERSION)
        .propagate_version(true)
        .about("The Fast Forms language for writing HTML5 forms.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the parser and renderer are doing to standard error."),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given form to HTML")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("The file to write the HTML to. By default it is written to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the form you want to render, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given form")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the form you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("dialect")
                .about("Describe the rules of the Fast Forms language")
                .arg(
                    Arg::new("examples")
                        .long("examples")
                        .action(ArgAction::SetTrue)
                        .help("Include worked examples."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let filename = filename(submatches);
            let content = read(filename);
            let model = parse(filename, &content);

            let markup = match rendering::render(&model) {
                Ok(markup) => markup,
                Err(error) => fail(&error.to_string()),
            };

            let target = submatches
                .get_one::<String>("output")
                .map(Path::new);
            if let Err(error) = output::write(target, &markup) {
                fail(&format!("Unable to write output: {}", error));
            }
        }
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = read(filename);
            let model = parse(filename, &content);

            debug!(?model);
            eprintln!(
                "{}: {} form attribute{}, {} field{}",
                "ok".bright_green(),
                model
                    .attributes
                    .len(),
                if model.attributes.len() == 1 { "" } else { "s" },
                model
                    .fields
                    .len(),
                if model.fields.len() == 1 { "" } else { "s" }
            );
        }
        Some(("dialect", submatches)) => {
            let dialect = match FastForms::new() {
                Ok(dialect) => dialect,
                Err(error) => fail(&FormsError::from(error).to_string()),
            };

            match output::describe(dialect.grammar(), submatches.get_flag("examples")) {
                Ok(text) => print!("{}", text),
                Err(error) => fail(&error.to_string()),
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: fastforms [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &clap::ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => fail("A filename is required"),
    }
}

fn read(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => fail(&format!(
            "{}: {}",
            error
                .filename
                .display(),
            error
        )),
    }
}

fn parse(filename: &Path, content: &str) -> fastforms::language::Model {
    match parsing::parse(content) {
        Ok(model) => model,
        Err(error) => {
            let diagnostic = Diagnostic::new(&error, filename, content);
            eprintln!("{}", diagnostic.full_details());
            std::process::exit(1);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}: {}", "error".bright_red(), message);
    std::process::exit(1);
}
