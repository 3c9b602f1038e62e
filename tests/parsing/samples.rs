#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use fastforms::parsing;

    fn files_in(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

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

        assert!(!files.is_empty(), "No .ff files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = files_in(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(_) => {}
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = files_in(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match fastforms::convert(&content) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(_) => {}
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/nonexistent.ff"));
        let error = result.unwrap_err();
        assert_eq!(error.problem, "File not found");
    }
}
