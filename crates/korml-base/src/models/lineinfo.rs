use crate::error::BaseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Position of a construct inside a file
///
/// Fields are private and there are no setters, so a constructed value never
/// changes:
///
/// ```compile_fail
/// use korml_base::models::LineInfo;
///
/// let mut info = LineInfo::new(10, 20);
/// info.line = 99;
/// ```
///
/// ```compile_fail
/// use korml_base::models::LineInfo;
///
/// let mut info = LineInfo::new(10, 20);
/// info.column = 42;
/// ```
///
/// Equality is only defined between two `LineInfo` values. A tuple with the
/// same numbers is a different type and cannot be compared:
///
/// ```compile_fail
/// use korml_base::models::LineInfo;
///
/// assert!(LineInfo::new(1, 1) != (1, 1));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct LineInfo {
    line: usize,
    column: usize,
}

impl LineInfo {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Exports `{"line": <line>, "column": <column>}`
    pub fn json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("line".to_string(), Value::from(self.line));
        map.insert("column".to_string(), Value::from(self.column));
        map
    }

    /// Imports a value produced by [`LineInfo::json`]
    pub fn from_json(value: &Value) -> Result<Self, BaseError> {
        super::expect_object(value, "a map with line and column")?;
        Ok(Self::deserialize(value)?)
    }
}

impl From<(usize, usize)> for LineInfo {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

impl fmt::Display for LineInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineInfo(line={}, column={})", self.line, self.column)
    }
}
