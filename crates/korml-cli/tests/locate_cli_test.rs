use std::fs;

use anyhow::Result;
use serde_json::{json, Value};

use korml_cli::commands::execute_locate;
use korml_cli::OutputFormat;

fn create_temp_source(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp_dir.path().join(name);
    fs::write(&path, content).expect("failed to write file");
    (tmp_dir, path)
}

#[test]
fn locate_prints_text_form_per_offset() -> Result<()> {
    let (_dir, path) = create_temp_source("main.korml", "first\nsecond\n");

    let lines = execute_locate(&path, &[0, 8], OutputFormat::Text)?;

    assert_eq!(
        lines,
        vec![
            format!(
                "FileInfo(filename={}, lineinfo=LineInfo(line=1, column=1))",
                path.display()
            ),
            format!(
                "FileInfo(filename={}, lineinfo=LineInfo(line=2, column=3))",
                path.display()
            ),
        ]
    );
    Ok(())
}

#[test]
fn locate_prints_nested_json() -> Result<()> {
    let (_dir, path) = create_temp_source("main.korml", "first\nsecond\n");

    let lines = execute_locate(&path, &[6], OutputFormat::Json)?;
    assert_eq!(lines.len(), 1);

    let value: Value = serde_json::from_str(&lines[0])?;
    assert_eq!(
        value,
        json!({
            "filename": path.display().to_string(),
            "lineinfo": {"line": 2, "column": 1},
        })
    );
    Ok(())
}

#[test]
fn locate_fails_on_offset_past_end() {
    let (_dir, path) = create_temp_source("main.korml", "abc");

    let err = execute_locate(&path, &[1, 10], OutputFormat::Text)
        .expect_err("offset past end must fail");
    let msg = format!("{err:#}");
    assert!(msg.contains("offset 10"), "unexpected error: {msg}");
}

#[test]
fn locate_fails_on_missing_file() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp_dir.path().join("missing.korml");

    let err = execute_locate(&path, &[0], OutputFormat::Text).expect_err("missing file must fail");
    assert!(err.to_string().contains("Failed to load source"));
}
