use crate::{
    component::{Component, ValueType},
    error::*,
    pct_enc::{DecodeError, DecodeErrorKind},
};
use std::fmt;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            DecodeErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            DecodeErrorKind::InvalidUtf8 => "invalid UTF-8 in decoded bytes at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for Component {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValueType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentType(e) => fmt::Display::fmt(e, f),
            Self::InvalidComponent(e) => fmt::Display::fmt(e, f),
            Self::InvalidUrl(e) => fmt::Display::fmt(e, f),
            Self::Internal(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for ComponentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be of type {}, got {}",
            self.component, self.expected, self.found
        )
    }
}

impl fmt::Display for InvalidComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.component;
        match self.kind {
            InvalidComponentKind::DisallowedChar(ch) => {
                write!(f, "{c} contains disallowed character {ch:?}")
            }
            InvalidComponentKind::Null => write!(f, "null {c} not allowed"),
            InvalidComponentKind::PortOutOfRange(x) => {
                write!(f, "{c} {x} is out of range 1..=65535")
            }
            InvalidComponentKind::Decode(e) => write!(f, "{c} failed to decode: {e}"),
            InvalidComponentKind::ExclusivePath => {
                f.write_str("path and path_segments are exclusive")
            }
            InvalidComponentKind::Fixed => write!(f, "{c} can only be set at construction"),
        }
    }
}

impl fmt::Display for InvalidUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InvalidUrlKind::Missing(c) => return write!(f, "missing {c}"),
            _ => f.write_str("failed to parse URL")?,
        }
        if let Some(input) = &self.input {
            write!(f, " {input:?}")?;
        }
        match &self.kind {
            InvalidUrlKind::Split(e) => write!(f, ": {e}"),
            InvalidUrlKind::UnexpectedChar { ch, index } => {
                write!(f, ": unexpected character {ch:?} at index {index}")
            }
            InvalidUrlKind::MalformedPair { pair, position } => write!(
                f,
                ": parameter {pair:?} at position {position} is not a key-value pair"
            ),
            InvalidUrlKind::MixedParam(key) => {
                write!(f, ": array parameter {key:?} conflicts with a scalar")
            }
            InvalidUrlKind::Decode(e) => write!(f, ": {e}"),
            InvalidUrlKind::Missing(_) => Ok(()),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component {:?}", self.name)
    }
}
