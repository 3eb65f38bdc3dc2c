use crate::error::BaseError;
use crate::models::LineInfo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A [`LineInfo`] position inside a named file
///
/// Like `LineInfo`, a constructed value never changes:
///
/// ```compile_fail
/// use korml_base::models::{FileInfo, LineInfo};
///
/// let mut info = FileInfo::new("main.py", LineInfo::new(4, 15));
/// info.filename = "other.py".to_string();
/// ```
///
/// ```compile_fail
/// use korml_base::models::{FileInfo, LineInfo};
///
/// let mut info = FileInfo::new("main.py", LineInfo::new(4, 15));
/// info.lineinfo = LineInfo::new(99, 99);
/// ```
///
/// Nor is it comparable with a `(filename, lineinfo)` tuple:
///
/// ```compile_fail
/// use korml_base::models::{FileInfo, LineInfo};
///
/// let info = FileInfo::new("main.py", LineInfo::new(4, 15));
/// assert!(info != ("main.py", LineInfo::new(4, 15)));
/// ```
///
/// Moving to another position produces a new value instead:
///
/// ```
/// use korml_base::models::{FileInfo, LineInfo};
///
/// let start = FileInfo::new("main.py", LineInfo::new(4, 15));
/// let next = start.with_lineinfo(LineInfo::new(5, 1));
/// assert_eq!(start.lineinfo(), &LineInfo::new(4, 15));
/// assert_eq!(next.filename(), "main.py");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileInfo {
    filename: String,
    lineinfo: LineInfo,
}

impl FileInfo {
    pub fn new(filename: impl Into<String>, lineinfo: LineInfo) -> Self {
        Self {
            filename: filename.into(),
            lineinfo,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn lineinfo(&self) -> &LineInfo {
        &self.lineinfo
    }

    /// Same file, different position
    pub fn with_lineinfo(&self, lineinfo: LineInfo) -> Self {
        Self::new(self.filename.clone(), lineinfo)
    }

    /// Exports `{"filename": <filename>, "lineinfo": <lineinfo.json()>}`
    ///
    /// The position is nested as its own mapping, not flattened.
    pub fn json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("filename".to_string(), Value::from(self.filename.as_str()));
        map.insert("lineinfo".to_string(), Value::Object(self.lineinfo.json()));
        map
    }

    /// Imports a value produced by [`FileInfo::json`]
    pub fn from_json(value: &Value) -> Result<Self, BaseError> {
        super::expect_object(value, "a map with filename and lineinfo")?;
        if let Some(lineinfo) = value.get("lineinfo") {
            super::expect_object(lineinfo, "a map with line and column")?;
        }
        Ok(Self::deserialize(value)?)
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileInfo(filename={}, lineinfo={})",
            self.filename, self.lineinfo
        )
    }
}
