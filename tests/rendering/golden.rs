#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use fastforms::parsing;

    /// Golden test for the render command
    ///
    /// Every .ff file in tests/golden/ is rendered and compared with the
    /// .html file of the same name beside it. If a file fails this test
    /// either the parser & renderer is wrong (a bug that needs to be
    /// fixed!) or the expected output is out of date.

    /// Simple diff function to show line-by-line differences
    fn show_diff(expected: &str, rendered: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let rendered_lines: Vec<&str> = rendered
            .lines()
            .collect();

        let max_lines = expected_lines
            .len()
            .max(rendered_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Rendered");

        for i in 0..max_lines {
            let expected_line = expected_lines
                .get(i)
                .unwrap_or(&"");
            let rendered_line = rendered_lines
                .get(i)
                .unwrap_or(&"");

            if expected_line != rendered_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", expected_line);
                println!("+ {}", rendered_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("ff")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .ff files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let expected = fs::read_to_string(file.with_extension("html"))
                .unwrap_or_else(|e| panic!("Failed to load expected output for {:?}: {:?}", file, e));

            let rendered = fastforms::convert(&content)
                .unwrap_or_else(|e| panic!("Failed to render {:?}: {}", file, e));

            if rendered != expected {
                show_diff(&expected, &rendered, file);
                failures.push(file.clone());
            }

            // and a second time, which must be identical
            let again = fastforms::convert(&content).unwrap();
            assert_eq!(rendered, again);
        }

        if !failures.is_empty() {
            panic!(
                "Golden files should render identically, but {} files differed",
                failures.len()
            );
        }
    }
}
