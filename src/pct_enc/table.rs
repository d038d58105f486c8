//! Byte pattern tables.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// A table specifying a set of ASCII bytes.
///
/// Tables are built at compile time and are used both to decide which bytes
/// the codec leaves unencoded and which characters a component may not contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that contains the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot add non-ASCII byte");
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that contains all the bytes contained
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that contains all the bytes contained
    /// by `self` but not by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given byte is contained in the table.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Returns the first character of `s` that is contained in the table.
    #[must_use]
    pub fn find_in(self, s: &str) -> Option<char> {
        s.bytes().find(|&x| self.contains(x)).map(char::from)
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// Bytes left unencoded in an `application/x-www-form-urlencoded` component.
///
/// `form-unreserved = ALPHA / DIGIT / "*" / "-" / "." / "_"`
pub const FORM_UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"*-._"));

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        assert!(FORM_UNRESERVED.contains(b'a'));
        assert!(FORM_UNRESERVED.contains(b'*'));
        assert!(!FORM_UNRESERVED.contains(b'~'));
        assert!(!FORM_UNRESERVED.contains(b' '));
        assert!(!FORM_UNRESERVED.contains(0xe6));
        assert!(GEN_DELIMS.contains(b'['));
        assert!(!GEN_DELIMS.contains(b'&'));
    }

    #[test]
    fn set_algebra() {
        assert!(DIGIT.is_subset(FORM_UNRESERVED));
        assert!(!FORM_UNRESERVED.is_subset(ALPHA));
        assert_eq!(FORM_UNRESERVED.sub(DIGIT).find_in("09af"), Some('a'));
        assert_eq!(GEN_DELIMS.find_in("user@host"), Some('@'));
        assert_eq!(GEN_DELIMS.find_in("plain"), None);
    }
}
