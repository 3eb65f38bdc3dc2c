pub mod location;
pub mod source;

pub use location::LocationConverter;
pub use source::SourceFile;
