pub mod commands;

/// How `locate` prints each resolved position
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `FileInfo(filename=..., lineinfo=LineInfo(...))`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
