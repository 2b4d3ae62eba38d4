//! Host, scheme, port, and fragment transforms.

use crate::record::UrlRecord;

/// Registered default ports, by scheme.
///
/// A data-driven table rather than a hard-coded `:80`: the elision
/// transform consults it case-insensitively, so it also works before the
/// scheme has been lower-cased.
pub const DEFAULT_PORTS: &[(&str, u16)] = &[("http", 80), ("https", 443), ("ftp", 21)];

/// Look up the registered default port for a scheme, ignoring ASCII case.
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|(_, port)| *port)
}

/// Lower-case the scheme in place, byte-wise ASCII only.
pub fn lower_case_scheme(rec: &mut UrlRecord) {
    rec.scheme.make_ascii_lowercase();
}

/// Lower-case the host in place, byte-wise ASCII only. Non-ASCII bytes
/// pass through unchanged (no IDN folding).
pub fn lower_case_host(rec: &mut UrlRecord) {
    rec.host.make_ascii_lowercase();
}

/// Remove an explicit port equal to the scheme's registered default.
///
/// Clears the `port` field when it matches, and strips a textual
/// `:{default}` suffix from the host when the parsing side left the
/// authority combined.
///
/// An unbracketed IPv6 literal whose last group happens to equal the
/// default port is indistinguishable from a host-plus-port; when the host
/// has IPv6 shape and fewer than 8 colons in total, the suffix is assumed
/// to be an address group and left alone. The compressed `::` form is not
/// specially handled.
///
/// # Examples
///
/// ```
/// use urlnorm::{remove_default_port, UrlRecord};
///
/// let mut record = UrlRecord::new("http", "sphela.com:80");
/// remove_default_port(&mut record);
/// assert_eq!(record.host, "sphela.com");
/// ```
pub fn remove_default_port(rec: &mut UrlRecord) {
    let Some(default) = default_port(&rec.scheme) else {
        return;
    };

    if rec.port == Some(default) {
        rec.port = None;
    }

    let suffix = format!(":{default}");
    if rec.host.len() > suffix.len() && rec.host.ends_with(&suffix) {
        if has_ipv6_shape(&rec.host) && rec.host.matches(':').count() < 8 {
            return;
        }
        rec.host.truncate(rec.host.len() - suffix.len());
    }
}

/// Add or remove the `www.` host prefix.
///
/// Use when `www.` and the bare host point at the same resource. IPv4 and
/// IPv6 literals are left alone regardless of `show`.
///
/// # Examples
///
/// ```
/// use urlnorm::{normalize_www, UrlRecord};
///
/// let mut record = UrlRecord::new("http", "gogl.net");
/// normalize_www(&mut record, true);
/// assert_eq!(record.host, "www.gogl.net");
///
/// normalize_www(&mut record, false);
/// assert_eq!(record.host, "gogl.net");
/// ```
pub fn normalize_www(rec: &mut UrlRecord, show: bool) {
    if has_ipv6_shape(&rec.host) || has_ipv4_shape(&rec.host) {
        return;
    }

    let has_www = rec.host.len() > 4 && rec.host.starts_with("www.");
    if show && !has_www {
        rec.host.insert_str(0, "www.");
    } else if !show && has_www {
        rec.host.replace_range(..4, "");
    }
}

/// Overwrite the scheme. Use to collapse scheme aliases onto a canonical
/// one.
pub fn replace_scheme(rec: &mut UrlRecord, scheme: &str) {
    rec.scheme.clear();
    rec.scheme.push_str(scheme);
}

/// Overwrite the host. Use to replace IP addresses or alias domains with
/// the canonical domain they point to.
pub fn replace_host(rec: &mut UrlRecord, host: &str) {
    rec.host.clear();
    rec.host.push_str(host);
}

/// Clear the fragment unconditionally.
pub fn remove_fragment(rec: &mut UrlRecord) {
    rec.fragment = None;
}

/// `true` when the host looks like an IPv6 literal: colon-separated groups
/// of hex digits. A shape check only, not address validation.
pub(crate) fn has_ipv6_shape(host: &str) -> bool {
    host.contains(':') && host.bytes().all(|b| b.is_ascii_hexdigit() || b == b':')
}

/// `true` when the host looks like an IPv4 literal: dot-separated groups
/// of digits. A shape check only, not address validation.
pub(crate) fn has_ipv4_shape(host: &str) -> bool {
    host.contains('.') && host.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
