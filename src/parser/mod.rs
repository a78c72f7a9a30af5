//! Parser module for srcviz.
//!
//! Scans a directory of header files and extracts include relations by
//! prefix matching, the raw material for the dependency graph.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use srcviz::parser::{scan_directory, HEADER_SUFFIX, INCLUDE_PREFIX};
//!
//! let outcome = scan_directory(Path::new("src"), HEADER_SUFFIX, INCLUDE_PREFIX).unwrap();
//! println!("{:?}", outcome.listing);
//! for header in &outcome.headers {
//!     println!("{}: {} includes", header.name, header.include_count());
//! }
//! ```

pub mod include;
pub mod types;

// Re-export commonly used items for convenience
pub use include::{
    parse_line, parse_source, scan_directory, LineMatch, ScanError, ScanResult, HEADER_SUFFIX,
    INCLUDE_PREFIX,
};

pub use types::{HeaderFile, ScanOutcome};
