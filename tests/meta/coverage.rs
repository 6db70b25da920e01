//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Top-level test crates that only declare the mirrored module trees
    const HARNESS_FILES: [&str; 3] = ["main.rs", "unit.rs", "meta.rs"];

    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every directory and `.rs` file below `root`
    fn mirror_entries(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut entries = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    entries.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    entries.insert(relative);
                }
            }
        }

        Ok(entries)
    }

    #[test]
    fn test_src_and_unit_tests_mirror_each_other() {
        let sources = mirror_entries(Path::new("src")).unwrap();
        let unit_tests = mirror_entries(Path::new("tests/unit")).unwrap();

        let untested: Vec<_> = sources
            .iter()
            .filter(|path| !is_exempt(path) && !unit_tests.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();
        assert!(
            untested.is_empty(),
            "Source files without unit tests:\n{}",
            untested.join("\n")
        );

        let orphaned: Vec<_> = unit_tests
            .iter()
            .filter(|path| !is_exempt(path) && !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();
        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let files = mirror_entries(tests_dir).unwrap();

        let empty: Vec<_> = files
            .iter()
            .filter(|relative| relative.ends_with(".rs"))
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| !HARNESS_FILES.contains(&relative.as_str()))
            .filter(|relative| {
                fs::read_to_string(tests_dir.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
