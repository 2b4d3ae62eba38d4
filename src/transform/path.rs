//! Path transforms: slash handling, dot-segment resolution, and directory
//! index removal.

use crate::error::NormalizeError;
use crate::record::UrlRecord;

/// Default bound on retained path segments during dot-segment resolution.
pub const DEFAULT_SEGMENT_LIMIT: usize = 1000;

/// Growable retained-segment stack with an explicit capacity bound.
///
/// Exceeding the bound is surfaced as an error rather than truncating the
/// path.
struct SegmentStack<'a> {
    segments: Vec<&'a str>,
    limit: usize,
}

impl<'a> SegmentStack<'a> {
    fn new(limit: usize) -> Self {
        Self {
            segments: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, segment: &'a str) -> Result<(), NormalizeError> {
        if self.segments.len() >= self.limit {
            return Err(NormalizeError::SegmentLimitExceeded { limit: self.limit });
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Popping past the stack base is a no-op: leading `..` in an absolute
    /// path is absorbed, not an error.
    fn pop(&mut self) {
        self.segments.pop();
    }
}

/// Give an empty path its canonical root form `/`.
pub fn add_trailing_slash(rec: &mut UrlRecord) {
    if rec.path.is_empty() {
        rec.path.push('/');
    }
}

/// Collapse every run of consecutive slashes to a single `/`.
///
/// Must run before [`resolve_dot_segments`] so that `//` cannot be
/// misread as a segment boundary there.
pub fn collapse_double_slashes(rec: &mut UrlRecord) {
    if !rec.path.contains("//") {
        return;
    }

    let mut collapsed = String::with_capacity(rec.path.len());
    let mut prev_slash = false;
    for ch in rec.path.chars() {
        if ch == '/' && prev_slash {
            continue;
        }
        prev_slash = ch == '/';
        collapsed.push(ch);
    }
    rec.path = collapsed;
}

/// Resolve `.` and `..` path segments in a single left-to-right pass.
///
/// `.` segments are discarded, `..` pops the last retained segment, and
/// empty segments are skipped. Trailing-slash presence of the input is
/// preserved; when no segments survive, the result is the root path `/`.
///
/// `limit` bounds the retained-segment stack; exceeding it returns
/// [`NormalizeError::SegmentLimitExceeded`] and leaves the path untouched.
///
/// # Examples
///
/// ```
/// use urlnorm::{resolve_dot_segments, UrlRecord, DEFAULT_SEGMENT_LIMIT};
///
/// let mut record = UrlRecord::new("http", "apphacker.com");
/// record.path = "/moo/../doo/./baz/".to_string();
/// resolve_dot_segments(&mut record, DEFAULT_SEGMENT_LIMIT).unwrap();
/// assert_eq!(record.path, "/doo/baz/");
/// ```
pub fn resolve_dot_segments(rec: &mut UrlRecord, limit: usize) -> Result<(), NormalizeError> {
    if rec.path.is_empty() {
        return Ok(());
    }

    let had_trailing = rec.path.ends_with('/');
    let mut stack = SegmentStack::new(limit);
    for segment in rec.path.split('/') {
        match segment {
            "" | "." => {}
            ".." => stack.pop(),
            _ => stack.push(segment)?,
        }
    }

    let mut resolved = String::with_capacity(rec.path.len());
    resolved.push('/');
    for (i, segment) in stack.segments.iter().enumerate() {
        if i > 0 {
            resolved.push('/');
        }
        resolved.push_str(segment);
    }
    if had_trailing && !stack.segments.is_empty() {
        resolved.push('/');
    }

    rec.path = resolved;
    Ok(())
}

/// Remove a directory index that points to the same place as its
/// directory, e.g. `/a/index.html` with index `index.html` becomes `/a/`.
///
/// Plain suffix match with no segment-boundary check: callers must supply
/// an index name that cannot falsely match inside another segment name.
///
/// # Examples
///
/// ```
/// use urlnorm::{remove_directory_index, UrlRecord};
///
/// let mut record = UrlRecord::new("http", "gogl.net");
/// record.path = "/a/b/index.html".to_string();
/// remove_directory_index(&mut record, "index.html");
/// assert_eq!(record.path, "/a/b/");
/// ```
pub fn remove_directory_index(rec: &mut UrlRecord, index: &str) {
    if rec.path.ends_with(index) {
        rec.path.truncate(rec.path.len() - index.len());
    }
}
