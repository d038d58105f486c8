//! Percent-encoding of single components.
//!
//! Components are encoded and decoded with the rules of
//! [`application/x-www-form-urlencoded`]: a space is written as `+`,
//! and every byte outside [`FORM_UNRESERVED`] is written as `%XX`.
//!
//! [`application/x-www-form-urlencoded`]: https://url.spec.whatwg.org/#application/x-www-form-urlencoded
//!
//! # Examples
//!
//! ```
//! use basic_url::pct_enc::{decode, encode};
//!
//! assert_eq!(encode("a b&c=d!"), "a+b%26c%3Dd%21");
//! assert_eq!(decode("a+b%26c%3dd%21")?, "a b&c=d!");
//! # Ok::<_, basic_url::pct_enc::DecodeError>(())
//! ```

pub mod table;

pub use table::Table;

use std::{borrow::Cow, str};
use table::FORM_UNRESERVED;

/// Detailed cause of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// The decoded bytes are not valid UTF-8.
    ///
    /// The error index points to the first byte of the invalid sequence
    /// in the decoded output.
    InvalidUtf8,
}

/// An error occurred when decoding a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub(crate) index: usize,
    pub(crate) kind: DecodeErrorKind,
}

impl DecodeError {
    /// Returns the index where the error occurred.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl std::error::Error for DecodeError {}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, returning `None` on a non-hexadecimal digit.
fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    let (hi, lo) = (OCTET_TABLE_HI[hi as usize], OCTET_TABLE_LO[lo as usize]);
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes a component.
///
/// The whole value is encoded: a `%` already present in the input
/// is itself encoded as `%25`.
#[must_use]
pub fn encode(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    encode_to(s, &mut buf);
    buf
}

/// Percent-encodes a component, appending the result to a buffer.
pub fn encode_to(s: &str, buf: &mut String) {
    let mut start = 0;
    for (i, x) in s.bytes().enumerate() {
        if FORM_UNRESERVED.contains(x) {
            continue;
        }
        // Unreserved bytes are ASCII, so a nonempty run always ends on a char boundary.
        if start < i {
            buf.push_str(&s[start..i]);
        }
        if x == b' ' {
            buf.push('+');
        } else {
            buf.push_str(encode_byte(x));
        }
        start = i + 1;
    }
    if start < s.len() {
        buf.push_str(&s[start..]);
    }
}

/// Decodes a percent-encoded component.
///
/// A `+` decodes to a space. Returns the input unchanged (borrowed)
/// if it contains neither `%` nor `+`.
///
/// # Errors
///
/// Returns `Err` if the string contains an invalid percent-encoded octet
/// or if the decoded bytes are not valid UTF-8.
pub fn decode(s: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = s.as_bytes();
    let i = match bytes.iter().position(|&x| x == b'%' || x == b'+') {
        Some(i) => i,
        None => return Ok(Cow::Borrowed(s)),
    };

    let mut buf = Vec::with_capacity(bytes.len());
    buf.extend_from_slice(&bytes[..i]);

    let mut i = i;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let octet = match (bytes.get(i + 1), bytes.get(i + 2)) {
                    (Some(&hi), Some(&lo)) => decode_octet(hi, lo),
                    _ => None,
                };
                let octet = octet.ok_or(DecodeError {
                    index: i,
                    kind: DecodeErrorKind::InvalidOctet,
                })?;
                buf.push(octet);
                i += 3;
            }
            b'+' => {
                buf.push(b' ');
                i += 1;
            }
            x => {
                buf.push(x);
                i += 1;
            }
        }
    }

    String::from_utf8(buf).map(Cow::Owned).map_err(|e| DecodeError {
        index: e.utf8_error().valid_up_to(),
        kind: DecodeErrorKind::InvalidUtf8,
    })
}

/// Decodes an optional component; `None` passes through.
///
/// # Errors
///
/// Returns `Err` under the same conditions as [`decode`].
pub fn decode_opt(s: Option<&str>) -> Result<Option<String>, DecodeError> {
    s.map(|s| decode(s).map(Cow::into_owned)).transpose()
}
