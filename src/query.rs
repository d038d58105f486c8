//! Query string encoding with `key[]` array notation.

use crate::{
    component::{ParamValue, Params},
    error::InvalidUrlKind,
    pct_enc,
};
use indexmap::map::Entry;

const ARRAY_SUFFIX: &str = "[]";

/// Decodes a query string into parameters.
///
/// Every `&`-separated pair must contain exactly one `=`. A key ending in `[]`
/// collects its values, in order, into an array parameter; any other key is a
/// scalar parameter whose last occurrence wins. An empty query has no parameters.
///
/// # Errors
///
/// Returns [`InvalidUrlKind::MalformedPair`] for a pair without exactly one `=`,
/// [`InvalidUrlKind::MixedParam`] for an array pair whose key already holds a
/// scalar, and [`InvalidUrlKind::Decode`] for an invalid percent-encoded octet.
///
/// # Examples
///
/// ```
/// use basic_url::{query, ParamValue};
///
/// let params = query::decode("a=1&b[]=2&b[]=3").unwrap();
/// assert_eq!(params["a"], ParamValue::from("1"));
/// assert_eq!(params["b"], ParamValue::from(["2", "3"]));
/// ```
pub fn decode(query: &str) -> Result<Params, InvalidUrlKind> {
    let mut params = Params::new();
    if query.is_empty() {
        return Ok(params);
    }

    for (i, pair) in query.split('&').enumerate() {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) if !v.contains('=') => (k, v),
            _ => {
                return Err(InvalidUrlKind::MalformedPair {
                    pair: pair.to_owned(),
                    position: i + 1,
                })
            }
        };
        let value = pct_enc::decode(value).map_err(InvalidUrlKind::Decode)?;

        match key.strip_suffix(ARRAY_SUFFIX) {
            Some(key) => {
                let key = pct_enc::decode(key).map_err(InvalidUrlKind::Decode)?;
                match params.entry(key.into_owned()) {
                    Entry::Occupied(mut e) => match e.get_mut() {
                        ParamValue::Array(v) => v.push(value.into_owned()),
                        ParamValue::Single(_) => {
                            return Err(InvalidUrlKind::MixedParam(e.key().clone()))
                        }
                    },
                    Entry::Vacant(e) => {
                        e.insert(ParamValue::Array(vec![value.into_owned()]));
                    }
                }
            }
            None => {
                let key = pct_enc::decode(key).map_err(InvalidUrlKind::Decode)?;
                params.insert(key.into_owned(), ParamValue::Single(value.into_owned()));
            }
        }
    }
    Ok(params)
}

/// Encodes parameters into a query string, without the leading `?`.
///
/// Keys are written in insertion order. An array parameter is written as one
/// `key[]=value` pair per element, in order.
#[must_use]
pub fn encode(params: &Params) -> String {
    let mut buf = String::new();
    encode_to(params, &mut buf);
    buf
}

/// Encodes parameters into a query string, appending the result to a buffer.
pub fn encode_to(params: &Params, buf: &mut String) {
    let mut first = true;
    let mut push_pair = |key: &str, suffix: &str, value: &str, buf: &mut String| {
        if !first {
            buf.push('&');
        }
        first = false;
        pct_enc::encode_to(key, buf);
        buf.push_str(suffix);
        buf.push('=');
        pct_enc::encode_to(value, buf);
    };

    for (key, value) in params {
        match value {
            ParamValue::Single(v) => push_pair(key, "", v, buf),
            ParamValue::Array(vs) => {
                for v in vs {
                    push_pair(key, ARRAY_SUFFIX, v, buf);
                }
            }
        }
    }
}
