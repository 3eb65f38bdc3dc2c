pub mod fileinfo;
pub mod lineinfo;

pub use fileinfo::*;
pub use lineinfo::*;

use crate::error::BaseError;
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

/// Only the mapping form is accepted on import; serde alone would also take arrays
pub(crate) fn expect_object(value: &Value, expected: &'static str) -> Result<(), BaseError> {
    let unexpected = match value {
        Value::Object(_) => return Ok(()),
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
    };
    Err(BaseError::Json(serde_json::Error::invalid_type(
        unexpected, &expected,
    )))
}
