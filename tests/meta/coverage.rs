//! Structural checks keeping `tests/unit` a one-to-one mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Entry points and module organisation files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_tree(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, root: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                found.insert(relative);
                walk(&path, root, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn report(title: &str, gaps: &[String]) -> String {
        format!("{title}:\n{}", gaps.join("\n"))
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by adding a source file without tests
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = rust_tree(Path::new(SRC)).expect("Failed to read src");
        let unit = rust_tree(Path::new(UNIT)).unwrap_or_default();

        let missing: Vec<String> = src
            .iter()
            .filter(|relative| !is_structural(relative) && !unit.contains(*relative))
            .map(|relative| format!("  - src/{relative} -> {UNIT}/{relative}"))
            .collect();

        assert!(missing.is_empty(), "{}", report("Source files without unit tests", &missing));
    }

    // Tests every unit test file has a source file at the mirrored path
    // Verified by adding an orphaned unit test file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = rust_tree(Path::new(SRC)).expect("Failed to read src");
        let unit = rust_tree(Path::new(UNIT)).unwrap_or_default();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|relative| !is_structural(relative) && !src.contains(*relative))
            .map(|relative| format!("  - {UNIT}/{relative} -> src/{relative} (missing)"))
            .collect();

        assert!(orphaned.is_empty(), "{}", report("Unit tests without sources", &orphaned));
    }

    // Tests every test file outside module organisation files declares a test
    // Verified by adding a test file with no #[test] function
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests = rust_tree(Path::new("tests")).expect("Failed to read tests");

        let empty: Vec<String> = tests
            .iter()
            .filter(|relative| relative.ends_with(".rs") && !relative.ends_with("mod.rs"))
            .filter(|relative| {
                !fs::read_to_string(Path::new("tests").join(relative))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(empty.is_empty(), "{}", report("Test files without tests", &empty));
    }
}
