//! Query transforms over the ordered key/value pair list.

use std::collections::HashMap;

use crate::record::UrlRecord;

/// Stable-sort the query pairs by key; pairs with equal keys keep their
/// original relative order.
///
/// Query variable order should not matter to a server, but some
/// implementations are order-sensitive and a fixed order makes normalized
/// URLs directly comparable, so this is its own transform.
///
/// # Examples
///
/// ```
/// use urlnorm::{sort_query, QueryPair, UrlRecord};
///
/// let mut record = UrlRecord::new("http", "gogl.net");
/// record.query = vec![
///     QueryPair::with_value("zar", "bar"),
///     QueryPair::with_value("atari", "this"),
/// ];
/// sort_query(&mut record);
/// assert_eq!(record.query_string(), "atari=this&zar=bar");
/// ```
pub fn sort_query(rec: &mut UrlRecord) {
    rec.query.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Remove query pairs carrying their default value.
///
/// A pair is dropped iff its key is bound in `defaults` and its value
/// equals the bound default byte-for-byte. Bare keys (no `=`) are never
/// dropped; a `key=` pair is dropped only when the bound default is itself
/// the empty string.
pub fn remove_default_query_values(rec: &mut UrlRecord, defaults: &HashMap<String, String>) {
    rec.query
        .retain(|pair| match (&pair.value, defaults.get(&pair.key)) {
            (Some(value), Some(default)) => value != default,
            _ => true,
        });
}

/// Retain only query pairs whose key appears in `allowed`.
///
/// Survivors keep their relative order; they are not reordered to match
/// the allow-list.
pub fn keep_query_params(rec: &mut UrlRecord, allowed: &[&str]) {
    rec.query
        .retain(|pair| allowed.contains(&pair.key.as_str()));
}
