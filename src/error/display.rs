use std::{fmt, path::Path};

use owo_colors::OwoColorize;

use crate::parsing::ParsingError;

/// A parsing error placed in its source, ready to be shown to a human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub source: &'i str,
    pub offset: usize,
}

impl<'i> Diagnostic<'i> {
    pub fn new(error: &ParsingError, filename: &'i Path, source: &'i str) -> Diagnostic<'i> {
        Diagnostic {
            problem: error.message(),
            details: error.details(),
            filename,
            source,
            offset: error
                .offset()
                .min(source.len()),
        }
    }

    /// 1-origin line and column, for humans.
    pub fn location(&self) -> (usize, usize) {
        let i = calculate_line_number(self.source, self.offset);
        let j = calculate_column_number(self.source, self.offset);
        (i + 1, j + 1)
    }

    // Verbose detailed explanation
    pub fn full_details(&self) -> String {
        let i = calculate_line_number(self.source, self.offset);

        let code = self
            .source
            .lines()
            .nth(i)
            .unwrap_or("");

        let (line, column) = self.location();

        let width = line
            .to_string()
            .len();
        let width = 3.max(width);

        format!(
            r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
            "#,
            "error".bright_red(),
            self.filename
                .to_string_lossy(),
            line,
            column,
            self.problem
                .bold(),
            ' ',
            '|'.bright_blue(),
            line.bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for Diagnostic<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.location();

        write!(
            f,
            "error: {}:{}:{} {}",
            self.filename
                .to_string_lossy(),
            line,
            column,
            self.problem
        )
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
