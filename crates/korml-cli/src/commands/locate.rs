use crate::OutputFormat;
use anyhow::{Context, Result};
use korml_base::models::FileInfo;
use korml_base::SourceFile;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Resolves byte offsets in a file and renders one line per offset
pub fn execute_locate(path: &Path, offsets: &[usize], format: OutputFormat) -> Result<Vec<String>> {
    let source = SourceFile::read(path)
        .with_context(|| format!("Failed to load source: {}", path.display()))?;

    let lines = offsets
        .iter()
        .map(|&offset| {
            let file_info = source
                .file_info(offset)
                .with_context(|| format!("Failed to locate offset {offset}"))?;
            render(&file_info, format)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        path = %path.display(),
        offsets = offsets.len(),
        "Located offsets"
    );
    Ok(lines)
}

/// Renders a single position in the requested format
pub fn render(file_info: &FileInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(file_info.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Value::Object(file_info.json()))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use korml_base::models::LineInfo;

    #[test]
    fn test_render_text_and_json() -> Result<()> {
        let info = FileInfo::new("main.py", LineInfo::new(4, 15));

        assert_eq!(
            render(&info, OutputFormat::Text)?,
            "FileInfo(filename=main.py, lineinfo=LineInfo(line=4, column=15))"
        );

        let json: Value = serde_json::from_str(&render(&info, OutputFormat::Json)?)?;
        assert_eq!(
            json,
            serde_json::json!({"filename": "main.py", "lineinfo": {"line": 4, "column": 15}})
        );
        Ok(())
    }
}
