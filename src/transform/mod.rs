//! The individually callable normalization transforms.
//!
//! Every transform is a pure function of `(&mut UrlRecord, parameters)`
//! and holds no state across invocations; each is safe to apply to input
//! that is already in canonical form. Apply them standalone, or composed
//! in the canonical order through [`crate::Pipeline`].

pub mod encoding;
pub mod host;
pub mod path;
pub mod query;

// Re-export the transform surface
pub use encoding::{canonicalize_component, canonicalize_encoding};
pub use host::{
    default_port, lower_case_host, lower_case_scheme, normalize_www, remove_default_port,
    remove_fragment, replace_host, replace_scheme, DEFAULT_PORTS,
};
pub use path::{
    add_trailing_slash, collapse_double_slashes, remove_directory_index, resolve_dot_segments,
    DEFAULT_SEGMENT_LIMIT,
};
pub use query::{keep_query_params, remove_default_query_values, sort_query};
