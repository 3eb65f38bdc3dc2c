//! Source position annotations for korml.
//!
//! [`LineInfo`] and [`FileInfo`] record where a construct was found. Both are
//! immutable values with a canonical string form and a JSON mapping export.

pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;

pub use error::BaseError;
pub use logging::{init, init_default, init_from_args};
pub use models::{FileInfo, LineInfo};
pub use parsers::{LocationConverter, SourceFile};
