//! urlnorm - Syntactic URL normalization with policy-driven extras
//!
//! This crate rewrites a parsed URL into a canonical equivalent that, per
//! RFC 3986, addresses the same resource: case-folded scheme and host,
//! default port removed, dot segments resolved, percent-encoding
//! canonicalized. On top of the syntactic pipeline it offers semantic
//! transforms (`www.` toggling, query sorting and filtering,
//! directory-index stripping, fragment removal) that change representation
//! by policy rather than by pure syntax.
//!
//! # Features
//!
//! - **In-place**: every transform mutates one [`UrlRecord`] through an
//!   exclusive reference; nothing is reallocated or retained.
//! - **Idempotent**: applying any transform, or the whole pipeline, to its
//!   own output changes nothing.
//! - **Composable**: each transform is independently callable; the
//!   [`Pipeline`] is just the canonical order.
//! - **Bounded**: dot-segment resolution is the only operation with a
//!   resource ceiling, and hitting it is an error, never silent truncation.
//!
//! # Quick Start
//!
//! ```
//! use urlnorm::{normalize, remove_fragment, sort_query, UrlRecord};
//!
//! // The full syntactic pipeline
//! let mut record = UrlRecord::parse("HtTp://spHela.com:80/foo?baz=moo")?;
//! normalize(&mut record)?;
//! assert_eq!(record.to_url_string(), "http://sphela.com/foo?baz=moo");
//!
//! // Individual transforms compose freely
//! let mut record = UrlRecord::parse("http://gogl.net/a?zar=bar&atari=this#moo")?;
//! sort_query(&mut record);
//! remove_fragment(&mut record);
//! assert_eq!(record.to_url_string(), "http://gogl.net/a?atari=this&zar=bar");
//! # Ok::<(), urlnorm::NormalizeError>(())
//! ```
//!
//! # Scope
//!
//! The engine consumes an already-parsed [`UrlRecord`] and mutates it in
//! place; [`UrlRecord::parse`] and [`UrlRecord::to_url_string`] are thin
//! conveniences over the [`url`] crate for the common case. Resolving
//! relative references, DNS lookups, and IDN folding are out of scope.
//!
//! # Error Handling
//!
//! Transforms do not fail on ordinary input: empty paths, empty queries,
//! absent fragments, and IP-literal hosts are valid steady states. The two
//! error cases are [`NormalizeError::SegmentLimitExceeded`] from the
//! dot-segment resolver and [`NormalizeError::UrlParseError`] from the
//! parse boundary.

// Re-export the data model and errors
pub use error::NormalizeError;
pub use record::{QueryPair, UrlRecord};

// Re-export the pipeline driver
pub use pipeline::{normalize, Pipeline};

// Re-export the individual transforms
pub use transform::{
    add_trailing_slash, canonicalize_component, canonicalize_encoding, collapse_double_slashes,
    default_port, keep_query_params, lower_case_host, lower_case_scheme, normalize_www,
    remove_default_port, remove_default_query_values, remove_directory_index, remove_fragment,
    replace_host, replace_scheme, resolve_dot_segments, sort_query, DEFAULT_PORTS,
    DEFAULT_SEGMENT_LIMIT,
};

// Module declarations
pub mod error;
pub mod pipeline;
pub mod record;
pub mod transform;
