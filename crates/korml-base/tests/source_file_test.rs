use std::fs;

use anyhow::Result;
use korml_base::models::{FileInfo, LineInfo};
use korml_base::{BaseError, SourceFile};

#[test]
fn resolves_offsets_to_file_info() -> Result<()> {
    let source = SourceFile::new("doc.korml", "title: x\nbody:\n  text\n");

    assert_eq!(
        source.file_info(0)?,
        FileInfo::new("doc.korml", LineInfo::new(1, 1))
    );
    assert_eq!(
        source.file_info(11)?,
        FileInfo::new("doc.korml", LineInfo::new(2, 3))
    );
    assert_eq!(
        source.file_info(17)?,
        FileInfo::new("doc.korml", LineInfo::new(3, 3))
    );
    assert_eq!(source.converter().line_count(), 4);

    Ok(())
}

#[test]
fn reads_file_from_disk() -> Result<()> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("main.korml");
    fs::write(&path, "a\nbc\n")?;

    let source = SourceFile::read(&path)?;
    assert_eq!(source.filename(), path.display().to_string());
    assert_eq!(source.text(), "a\nbc\n");
    assert_eq!(
        source.file_info(3)?.to_string(),
        format!(
            "FileInfo(filename={}, lineinfo=LineInfo(line=2, column=2))",
            path.display()
        )
    );

    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp_dir.path().join("absent.korml");

    match SourceFile::read(&path) {
        Err(BaseError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn offset_past_end_is_an_error() {
    let source = SourceFile::new("short.korml", "abc");

    assert!(source.file_info(3).is_ok());
    assert!(matches!(
        source.file_info(4),
        Err(BaseError::OffsetOutOfBounds { offset: 4, len: 3 })
    ));
}
