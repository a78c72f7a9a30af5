//! Shared types for include-directive scanning.
//!
//! These are the normalized results of scanning a header directory: one
//! [`HeaderFile`] per parsed header, plus the raw listing of the directory
//! as it was seen on disk.

/// A parsed header file: its name and every include target extracted from
/// it, in source order.
///
/// Targets are kept verbatim from the include statement. No path
/// resolution, no deduplication: the same target listed twice yields two
/// entries, and a target that does not exist on disk is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    /// File name as it appeared in the directory listing.
    pub name: String,
    /// Include targets, one per matching line, in order of appearance.
    pub includes: Vec<String>,
}

impl HeaderFile {
    /// Creates a new header file record.
    pub fn new(name: impl Into<String>, includes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            includes,
        }
    }

    /// Returns true if this header references at least one other file.
    pub fn has_includes(&self) -> bool {
        !self.includes.is_empty()
    }

    /// Number of include targets, counting duplicates.
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }
}

/// The result of scanning a directory for header files.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Raw directory listing, every entry name, headers or not.
    pub listing: Vec<String>,
    /// Parsed header files, in listing order.
    pub headers: Vec<HeaderFile>,
}

impl ScanOutcome {
    /// Number of header files that were opened and parsed.
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Total number of include relations across all headers, counting
    /// duplicates.
    pub fn include_count(&self) -> usize {
        self.headers.iter().map(HeaderFile::include_count).sum()
    }
}
