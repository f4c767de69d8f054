//! Identifier conversion for generated bindings.

/// Converts an underscore-delimited option name into camelCase.
///
/// The first underscore-delimited segment is lowercased verbatim; every
/// following segment has its first character uppercased and the remainder
/// lowercased. Empty segments from consecutive, leading, or trailing
/// underscores contribute nothing.
///
/// # Examples
/// ```rust
/// use fdb_optgen::options::camel_case;
///
/// assert_eq!(camel_case("TLS_CERT_PATH"), "tlsCertPath");
/// assert_eq!(camel_case("callback"), "callback");
/// ```
pub fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for (i, segment) in name.split('_').enumerate() {
        if i == 0 {
            result.push_str(&segment.to_lowercase());
        } else if let Some(first) = segment.chars().next() {
            result.extend(first.to_uppercase());
            result.push_str(&segment[first.len_utf8()..].to_lowercase());
        }
    }
    result
}
