//! Comparison helpers.
//!
//! Methods and origins are compared with [`equals_exact`]; header names are compared
//! with [`equals_ignore_case`]. Keep the two apart.

/// Case-sensitive, full-string comparison used for methods and origins.
#[inline]
pub fn equals_exact(a: &str, b: &str) -> bool {
    a == b
}

/// Case-insensitive comparison used for header names.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

pub(crate) fn contains_exact<S: AsRef<str>>(values: &[S], candidate: &str) -> bool {
    values
        .iter()
        .any(|value| equals_exact(value.as_ref(), candidate))
}

pub(crate) fn contains_ignore_case<S: AsRef<str>>(values: &[S], candidate: &str) -> bool {
    values
        .iter()
        .any(|value| equals_ignore_case(value.as_ref(), candidate))
}

/// Elements of `values` that match no entry of `remove`, ignoring case.
pub(crate) fn subtract_ignore_case<'a, S, R>(values: &'a [S], remove: &[R]) -> Vec<&'a str>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    values
        .iter()
        .map(AsRef::as_ref)
        .filter(|value| !contains_ignore_case(remove, value))
        .collect()
}

/// RFC 2616 §2.2 token: non-empty, no separators, no control characters.
pub fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|ch| {
            !ch.is_control()
                && !matches!(
                    ch,
                    '(' | ')'
                        | '<'
                        | '>'
                        | '@'
                        | ','
                        | ';'
                        | ':'
                        | '\\'
                        | '"'
                        | '/'
                        | '['
                        | ']'
                        | '?'
                        | '='
                        | '{'
                        | '}'
                        | ' '
                        | '\t'
                )
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
