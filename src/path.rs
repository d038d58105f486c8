//! Path segment algebra.

use crate::pct_enc::{self, DecodeError};

/// Splits a path into decoded segments, dropping empty ones.
///
/// # Errors
///
/// Returns `Err` if a segment contains an invalid percent-encoded octet.
///
/// # Examples
///
/// ```
/// use basic_url::path::segments;
///
/// assert_eq!(segments("/a//b/c%20d/")?, ["a", "b", "c d"]);
/// assert!(segments("/").unwrap().is_empty());
/// # Ok::<_, basic_url::pct_enc::DecodeError>(())
/// ```
pub fn segments(path: &str) -> Result<Vec<String>, DecodeError> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| pct_enc::decode(s).map(Into::into))
        .collect()
}

/// Checks whether a path is absolute, i.e., starts with `/`.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Joins new segments onto a base, in place.
///
/// The base is replaced when `replace_when_absolute` is set and `path` is
/// absolute; otherwise the new segments are appended.
pub(crate) fn join_into(
    base: &mut Vec<String>,
    path: &str,
    new: Vec<String>,
    replace_when_absolute: bool,
) {
    if replace_when_absolute && is_absolute(path) {
        *base = new;
    } else {
        base.extend(new);
    }
}

/// Composes segments into a path string, mapping each segment with `f`.
///
/// Returns `None` if there are no segments.
pub(crate) fn compose(segments: &[String], mut f: impl FnMut(&str, &mut String)) -> Option<String> {
    let (first, rest) = segments.split_first()?;
    let mut buf = String::new();
    f(first, &mut buf);
    for s in rest {
        buf.push('/');
        f(s, &mut buf);
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(v: &[&str]) -> Vec<String> {
        v.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn split() {
        assert_eq!(segments("a//b").unwrap(), ["a", "b"]);
        assert_eq!(segments("").unwrap(), Vec::<String>::new());
        assert_eq!(segments("a%2fb/c+d").unwrap(), ["a/b", "c d"]);
        assert!(segments("a/%zz").is_err());
    }

    #[test]
    fn join() {
        let mut base = segs(&["x", "y"]);
        join_into(&mut base, "/p/q/", segs(&["p", "q"]), true);
        assert_eq!(base, ["p", "q"]);

        let mut base = segs(&["x", "y"]);
        join_into(&mut base, "/p/q", segs(&["p", "q"]), false);
        assert_eq!(base, ["x", "y", "p", "q"]);

        let mut base = segs(&["x", "y"]);
        join_into(&mut base, "p/q/", segs(&["p", "q"]), true);
        assert_eq!(base, ["x", "y", "p", "q"]);
    }

    #[test]
    fn compose_segments() {
        let plain = |s: &str, buf: &mut String| buf.push_str(s);
        assert_eq!(compose(&segs(&["a", "b"]), plain).as_deref(), Some("a/b"));
        assert_eq!(compose(&[], plain), None);
        assert_eq!(
            compose(&segs(&["a b", "c/d"]), pct_enc::encode_to).as_deref(),
            Some("a+b/c%2Fd")
        );
    }
}
