//! Parser for include directives in header files.
//!
//! Detection is a pure prefix match on each line: a line that starts with
//! the directive prefix contributes the substring between the first pair of
//! double quotes after the prefix. Everything else is ignored. A matched
//! line with no closing quote is malformed and aborts the scan.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::types::{HeaderFile, ScanOutcome};

/// Default include-directive prefix, opening quote included.
pub const INCLUDE_PREFIX: &str = "#include \"";

/// Default file name suffix that marks a header file.
pub const HEADER_SUFFIX: &str = ".h";

/// Errors that can occur while scanning a header directory.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to list the directory.
    #[error("failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to read a matching file from disk.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// An include line matched the prefix but has no closing quote.
    #[error("malformed include in {file} line {line}: missing closing quote")]
    MalformedInclude {
        /// File the line came from.
        file: String,
        /// 1-based line number.
        line: usize,
    },
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Outcome of matching a single line against the directive prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// The line does not start with the directive prefix.
    NotADirective,
    /// The prefix matched and a quoted target was extracted.
    Include(String),
    /// The prefix matched but the closing quote is missing.
    Malformed,
}

/// Matches one line of text against an include-directive prefix.
///
/// The target is the substring between the first pair of double quotes
/// following the matched prefix. A prefix that carries the opening quote
/// itself (the default) delimits the target with the next quote alone.
///
/// Never panics; a missing delimiter is reported as [`LineMatch::Malformed`].
///
/// # Example
///
/// ```rust
/// use srcviz::parser::{parse_line, LineMatch, INCLUDE_PREFIX};
///
/// let m = parse_line("#include \"Scene.h\"", INCLUDE_PREFIX);
/// assert_eq!(m, LineMatch::Include("Scene.h".to_string()));
///
/// assert_eq!(parse_line("#include <vector>", INCLUDE_PREFIX), LineMatch::NotADirective);
/// assert_eq!(parse_line("#include \"Scene.h", INCLUDE_PREFIX), LineMatch::Malformed);
/// ```
pub fn parse_line(line: &str, prefix: &str) -> LineMatch {
    let Some(rest) = line.strip_prefix(prefix) else {
        return LineMatch::NotADirective;
    };

    // When the prefix already ends with the opening quote, the target starts
    // immediately. Otherwise the first quote after the prefix opens it.
    let after_open = if prefix.ends_with('"') {
        rest
    } else {
        match rest.split_once('"') {
            Some((_, after)) => after,
            None => return LineMatch::Malformed,
        }
    };

    match after_open.split_once('"') {
        Some((target, _)) => LineMatch::Include(target.to_string()),
        None => LineMatch::Malformed,
    }
}

/// Parses the content of one header file, extracting its include targets.
///
/// Lines that do not match the prefix are skipped. A malformed matching
/// line is an error carrying the file name and 1-based line number.
///
/// # Example
///
/// ```rust
/// use srcviz::parser::{parse_source, INCLUDE_PREFIX};
///
/// let content = "#pragma once\n#include \"Scene.h\"\n#include \"Ui.h\"\n";
/// let header = parse_source("Renderer.h", content, INCLUDE_PREFIX).unwrap();
/// assert_eq!(header.includes, vec!["Scene.h", "Ui.h"]);
/// ```
pub fn parse_source(name: &str, content: &str, prefix: &str) -> ScanResult<HeaderFile> {
    let mut includes = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        match parse_line(line, prefix) {
            LineMatch::Include(target) => includes.push(target),
            LineMatch::NotADirective => {}
            LineMatch::Malformed => {
                return Err(ScanError::MalformedInclude {
                    file: name.to_string(),
                    line: idx + 1,
                })
            }
        }
    }

    Ok(HeaderFile::new(name, includes))
}

/// Scans a directory for header files and parses each one.
///
/// The listing is flat (no recursion) and sorted by file name so runs are
/// deterministic. Every entry name lands in the returned listing; only
/// names ending in `suffix` are opened and parsed. Each file handle is
/// scoped to its own read.
///
/// # Arguments
///
/// * `dir` - Directory to scan
/// * `suffix` - File name suffix that marks a header file
/// * `prefix` - Include-directive prefix to match at the start of a line
///
/// # Errors
///
/// Fails if the directory does not exist, a matching file cannot be read,
/// or a matching file contains a malformed include line.
pub fn scan_directory(dir: &Path, suffix: &str, prefix: &str) -> ScanResult<ScanOutcome> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut listing = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        listing.push(entry.file_name().to_string_lossy().into_owned());
    }

    let mut headers = Vec::new();
    for name in &listing {
        if !name.ends_with(suffix) {
            continue;
        }
        let content = fs::read_to_string(dir.join(name))?;
        headers.push(parse_source(name, &content, prefix)?);
    }

    Ok(ScanOutcome { listing, headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_parse_line_include() {
        let m = parse_line("#include \"ConstraintGraph.h\"", INCLUDE_PREFIX);
        assert_eq!(m, LineMatch::Include("ConstraintGraph.h".to_string()));
    }

    #[test]
    fn test_parse_line_trailing_text_ignored() {
        // Everything after the closing quote is irrelevant.
        let m = parse_line("#include \"Event.h\" // events", INCLUDE_PREFIX);
        assert_eq!(m, LineMatch::Include("Event.h".to_string()));
    }

    #[test]
    fn test_parse_line_not_a_directive() {
        assert_eq!(
            parse_line("#include <vector>", INCLUDE_PREFIX),
            LineMatch::NotADirective
        );
        assert_eq!(
            parse_line("class Scene;", INCLUDE_PREFIX),
            LineMatch::NotADirective
        );
        assert_eq!(parse_line("", INCLUDE_PREFIX), LineMatch::NotADirective);
    }

    #[test]
    fn test_parse_line_indented_is_not_a_directive() {
        // Matching is a prefix check, so leading whitespace disqualifies.
        assert_eq!(
            parse_line("  #include \"Scene.h\"", INCLUDE_PREFIX),
            LineMatch::NotADirective
        );
    }

    #[test]
    fn test_parse_line_malformed() {
        assert_eq!(
            parse_line("#include \"Scene.h", INCLUDE_PREFIX),
            LineMatch::Malformed
        );
    }

    #[test]
    fn test_parse_line_empty_target() {
        // Two adjacent quotes extract an empty target, same as the split rule.
        assert_eq!(
            parse_line("#include \"\"", INCLUDE_PREFIX),
            LineMatch::Include(String::new())
        );
    }

    #[test]
    fn test_parse_line_prefix_without_quote() {
        // A prefix without the opening quote still finds the first quote pair.
        let m = parse_line("#include \"Mode.h\"", "#include ");
        assert_eq!(m, LineMatch::Include("Mode.h".to_string()));

        assert_eq!(parse_line("#include x", "#include "), LineMatch::Malformed);
    }

    #[test]
    fn test_parse_source_extracts_in_order() {
        let content = "\
#pragma once
#include \"Scene.h\"
int x;
#include \"Ui.h\"
#include \"Scene.h\"
";
        let header = parse_source("Renderer.h", content, INCLUDE_PREFIX).unwrap();
        assert_eq!(header.name, "Renderer.h");
        // Duplicates preserved per occurrence.
        assert_eq!(header.includes, vec!["Scene.h", "Ui.h", "Scene.h"]);
    }

    #[test]
    fn test_parse_source_no_includes() {
        let header = parse_source("System.h", "#pragma once\n", INCLUDE_PREFIX).unwrap();
        assert!(!header.has_includes());
    }

    #[test]
    fn test_parse_source_malformed_reports_location() {
        let content = "#include \"Scene.h\"\n#include \"broken\n";
        let err = parse_source("Ui.h", content, INCLUDE_PREFIX).unwrap_err();
        match err {
            ScanError::MalformedInclude { file, line } => {
                assert_eq!(file, "Ui.h");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_scan_directory_missing() {
        let err = scan_directory(Path::new("/nonexistent/headers"), HEADER_SUFFIX, INCLUDE_PREFIX)
            .unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_directory_flat_listing_and_filtering() {
        let dir = tempfile::tempdir().unwrap();

        let mut a = File::create(dir.path().join("a.h")).unwrap();
        writeln!(a, "#include \"b.h\"").unwrap();
        writeln!(a, "#include \"missing.h\"").unwrap();

        let mut b = File::create(dir.path().join("b.h")).unwrap();
        writeln!(b, "#pragma once").unwrap();

        // A non-header file whose content matches the prefix pattern: it
        // must not be opened at all.
        let mut cpp = File::create(dir.path().join("main.cpp")).unwrap();
        writeln!(cpp, "#include \"a.h\"").unwrap();

        let outcome = scan_directory(dir.path(), HEADER_SUFFIX, INCLUDE_PREFIX).unwrap();

        assert_eq!(outcome.listing, vec!["a.h", "b.h", "main.cpp"]);
        assert_eq!(outcome.header_count(), 2);
        assert_eq!(outcome.include_count(), 2);

        let a = &outcome.headers[0];
        assert_eq!(a.name, "a.h");
        assert_eq!(a.includes, vec!["b.h", "missing.h"]);
    }

    #[test]
    fn test_scan_directory_empty() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = scan_directory(dir.path(), HEADER_SUFFIX, INCLUDE_PREFIX).unwrap();
        assert!(outcome.listing.is_empty());
        assert_eq!(outcome.header_count(), 0);
    }

    #[test]
    fn test_scan_directory_malformed_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = File::create(dir.path().join("bad.h")).unwrap();
        writeln!(bad, "#include \"no-closing-quote").unwrap();

        let err = scan_directory(dir.path(), HEADER_SUFFIX, INCLUDE_PREFIX).unwrap_err();
        assert!(matches!(err, ScanError::MalformedInclude { .. }));
    }
}
