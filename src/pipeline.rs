//! The normalization pipeline driver.

use crate::error::NormalizeError;
use crate::record::UrlRecord;
use crate::transform::encoding::canonicalize_encoding;
use crate::transform::host::{lower_case_host, lower_case_scheme, remove_default_port};
use crate::transform::path::{
    add_trailing_slash, collapse_double_slashes, resolve_dot_segments, DEFAULT_SEGMENT_LIMIT,
};

/// Configured application of the syntactic transforms in their canonical
/// order:
///
/// 1. add trailing slash to an empty path
/// 2. remove the scheme's default port
/// 3. lower-case the scheme
/// 4. lower-case the host
/// 5. collapse double slashes
/// 6. resolve dot segments
/// 7. canonicalize percent-encoding (unless disabled)
///
/// Double-slash collapse runs before dot-segment resolution so `//` cannot
/// be misread there. Every stage is idempotent, so running a pipeline over
/// its own output changes nothing.
///
/// The semantic transforms (`www.` toggling, query filtering and sorting,
/// directory-index removal, fragment removal) are policy decisions and are
/// not part of the pipeline; apply them separately as needed.
#[derive(Debug, Clone)]
pub struct Pipeline {
    segment_limit: usize,
    canonicalize: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            segment_limit: DEFAULT_SEGMENT_LIMIT,
            canonicalize: true,
        }
    }
}

impl Pipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the dot-segment resolver's retained-segment bound.
    pub fn segment_limit(mut self, limit: usize) -> Self {
        self.segment_limit = limit;
        self
    }

    /// Enable or disable the percent-encoding canonicalization stage.
    pub fn encoding(mut self, enabled: bool) -> Self {
        self.canonicalize = enabled;
        self
    }

    /// Run the pipeline over `rec`.
    ///
    /// A stage error aborts the remaining stages and is returned to the
    /// caller with `rec` left in its partially normalized state; callers
    /// must not assume all-or-nothing atomicity.
    pub fn run(&self, rec: &mut UrlRecord) -> Result<(), NormalizeError> {
        add_trailing_slash(rec);
        remove_default_port(rec);
        lower_case_scheme(rec);
        lower_case_host(rec);
        collapse_double_slashes(rec);
        resolve_dot_segments(rec, self.segment_limit)?;
        if self.canonicalize {
            canonicalize_encoding(rec);
        }
        Ok(())
    }
}

/// Run the default pipeline over `rec`.
///
/// # Examples
///
/// ```
/// use urlnorm::{normalize, UrlRecord};
///
/// let mut record = UrlRecord::parse("HtTp://spHela.com:80/foo?baz=moo").unwrap();
/// normalize(&mut record).unwrap();
/// assert_eq!(record.to_url_string(), "http://sphela.com/foo?baz=moo");
/// ```
pub fn normalize(rec: &mut UrlRecord) -> Result<(), NormalizeError> {
    Pipeline::new().run(rec)
}
