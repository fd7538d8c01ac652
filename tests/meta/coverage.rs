//! Checks that every source module has a matching unit test file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    fn collect_rs_files(root: &Path, dir: &Path, found: &mut BTreeSet<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_rs_files(root, &path, found);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                if let Ok(relative) = path.strip_prefix(root) {
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }

    // Entry points and module organization files carry no logic of their own
    fn needs_unit_tests(path: &str) -> bool {
        path != "lib.rs" && path != "main.rs" && !path.ends_with("mod.rs")
    }

    #[test]
    fn test_every_src_module_has_a_unit_test_file() {
        let src_root = Path::new("src");
        let unit_root = Path::new("tests/unit");

        let mut src_files = BTreeSet::new();
        collect_rs_files(src_root, src_root, &mut src_files);
        assert!(
            !src_files.is_empty(),
            "no source files found; the test expects to run from the crate root",
        );

        let mut test_files = BTreeSet::new();
        collect_rs_files(unit_root, unit_root, &mut test_files);

        let missing: Vec<_> = src_files
            .iter()
            .filter(|path| needs_unit_tests(path.as_str()))
            .filter(|path| !test_files.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit test counterparts under tests/unit: {missing:?}",
        );
    }
}
