use crate::error::BaseError;
use crate::models::LineInfo;

/// Converter from byte offsets to [`LineInfo`] positions
///
/// Lines and columns are 1-based. Columns count bytes from the start of the line.
#[derive(Debug, Clone)]
pub struct LocationConverter {
    source: String,
    line_starts: Vec<usize>,
}

impl LocationConverter {
    /// Creates a new LocationConverter from source text
    pub fn new(source: String) -> Self {
        let line_starts = Self::calculate_line_starts(&source);
        Self {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolves a byte offset to its position
    ///
    /// An offset equal to the source length is the position just past the last byte.
    pub fn line_info(&self, offset: usize) -> Result<LineInfo, BaseError> {
        if offset > self.source.len() {
            return Err(BaseError::OffsetOutOfBounds {
                offset,
                len: self.source.len(),
            });
        }

        // Binary search for the line containing offset
        let (line, line_start) = match self.line_starts.binary_search(&offset) {
            // Offset is the first byte of line idx+1
            Ok(idx) => (idx + 1, self.line_starts[idx]),
            // line_starts[0] == 0, so idx >= 1 here
            Err(idx) => (idx, self.line_starts[idx - 1]),
        };

        Ok(LineInfo::new(line, offset - line_start + 1))
    }

    fn calculate_line_starts(source: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(pos, _)| pos + 1),
        );
        line_starts
    }
}
