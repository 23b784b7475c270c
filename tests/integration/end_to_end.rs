// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use assert_cmd::Command;
use sandbox_probe::{config::Config, run};
use tempfile::TempDir;

const FILES_BANNER: &str = "\n\n############# Files ############\n";

fn config_for(root: &Path) -> Config {
    Config { root: root.to_path_buf(), ..Config::default() }
}

fn report(root: &Path) -> (String, usize, usize, bool) {
    let mut out = Vec::new();
    let summary = run(&config_for(root), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary.properties, summary.files.listed(), summary.files.is_failed())
}

fn split_sections(output: &str) -> (&str, Vec<&str>) {
    let (properties, files) = output.split_once(FILES_BANNER).expect("files banner missing");
    let mut files: Vec<&str> = files.lines().collect();
    files.sort_unstable();
    (properties, files)
}

#[test]
fn missing_root_prints_only_the_fallback_line() {
    let dir = TempDir::new().unwrap();
    let (output, _, listed, failed) = report(&dir.path().join("gone"));

    let (_, files) = split_sections(&output);
    assert_eq!(files, vec!["We got ourselves an IOExcetion!"]);
    assert!(failed);
    assert_eq!(listed, 0);
}

#[test]
fn nested_tree_lists_each_file_once() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "b").unwrap();

    let (output, _, listed, failed) = report(dir.path());
    let (_, files) = split_sections(&output);

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.txt"));
    assert!(files[1].ends_with(&format!("sub{}b.txt", std::path::MAIN_SEPARATOR)));
    assert_eq!(listed, 2);
    assert!(!failed);
}

#[test]
fn property_lines_match_summary() {
    let dir = TempDir::new().unwrap();
    let (output, properties, _, _) = report(dir.path());
    let (section, _) = split_sections(&output);

    assert_eq!(section.lines().next(), Some("########## Properties ##########"));
    assert!(section.contains("\nos.name: "));
    assert!(properties > 0);
}

#[test]
fn rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
    fs::write(dir.path().join("x/y/z/deep.bin"), [0u8, 1, 2]).unwrap();
    fs::write(dir.path().join("top.md"), "# top").unwrap();

    let run_binary = || {
        let output = Command::new(env!("CARGO_BIN_EXE_sandbox_probe"))
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run_binary();
    let second = run_binary();

    assert_eq!(split_sections(&first), split_sections(&second));
}
