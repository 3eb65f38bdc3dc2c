use crate::error::BaseError;
use crate::models::FileInfo;
use crate::parsers::LocationConverter;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Source text paired with the name reported in [`FileInfo`] values
#[derive(Debug, Clone)]
pub struct SourceFile {
    filename: String,
    converter: LocationConverter,
}

impl SourceFile {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            converter: LocationConverter::new(text.into()),
        }
    }

    /// Reads a file from disk, naming it by its path as given
    pub fn read(path: &Path) -> Result<Self, BaseError> {
        let text = fs::read_to_string(path).map_err(|source| BaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Loaded source file");
        Ok(Self::new(path.display().to_string(), text))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &str {
        self.converter.source()
    }

    pub fn converter(&self) -> &LocationConverter {
        &self.converter
    }

    /// Resolves a byte offset to a position in this file
    pub fn file_info(&self, offset: usize) -> Result<FileInfo, BaseError> {
        let lineinfo = self.converter.line_info(offset)?;
        debug!(
            filename = %self.filename,
            offset,
            line = lineinfo.line(),
            column = lineinfo.column(),
            "Resolved offset"
        );
        Ok(FileInfo::new(self.filename.clone(), lineinfo))
    }
}
