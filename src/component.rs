//! URL components and dynamically typed component values.

use crate::error::{Error, InternalError};
use indexmap::IndexMap;
use std::str::FromStr;

/// Query parameters, keyed by decoded name.
///
/// Equality ignores key order, while serialization follows insertion order.
pub type Params = IndexMap<String, ParamValue>;

/// The value of a query parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// A scalar parameter, written as `key=value`.
    Single(String),
    /// An array parameter, written as one `key[]=value` pair per element.
    Array(Vec<String>),
}

impl ParamValue {
    /// Returns the scalar value, or `None` for an array parameter.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Array(_) => None,
        }
    }

    /// Returns the array values, or `None` for a scalar parameter.
    #[must_use]
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Array(v) => Some(v),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl<S: Into<String>> From<Vec<S>> for ParamValue {
    fn from(v: Vec<S>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ParamValue {
    fn from(v: [S; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

/// A named component of a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The scheme used when no protocol is given. Fixed at construction.
    DefaultProtocol,
    /// The scheme, e.g. `http`.
    Protocol,
    /// The host, possibly a bracketed IPv6 literal.
    Host,
    /// The port.
    Port,
    /// The path, as a slash-separated string.
    Path,
    /// The path, as a list of decoded segments.
    PathSegments,
    /// The query parameters.
    Params,
    /// The fragment.
    Fragment,
    /// The user name.
    User,
    /// The password.
    Password,
}

impl Component {
    /// Every component, in the order they are resolved at construction.
    pub const ALL: [Component; 10] = [
        Component::DefaultProtocol,
        Component::Protocol,
        Component::Host,
        Component::Port,
        Component::Path,
        Component::PathSegments,
        Component::Params,
        Component::Fragment,
        Component::User,
        Component::Password,
    ];

    /// Returns the name of the component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultProtocol => "default_protocol",
            Self::Protocol => "protocol",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::PathSegments => "path_segments",
            Self::Params => "params",
            Self::Fragment => "fragment",
            Self::User => "user",
            Self::Password => "password",
        }
    }

    /// Returns the only value type accepted by the component.
    #[must_use]
    pub const fn value_type(self) -> ValueType {
        match self {
            Self::Port => ValueType::Integer,
            Self::PathSegments => ValueType::List,
            Self::Params => ValueType::Map,
            _ => ValueType::String,
        }
    }
}

impl FromStr for Component {
    type Err = Error;

    /// Looks up a component by name.
    ///
    /// An unknown name is an [`InternalError`]: component names are a closed set.
    fn from_str(s: &str) -> Result<Self, Error> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::Internal(InternalError {
                    name: s.to_owned(),
                })
            })
    }
}

/// The type of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The null value.
    Null,
    /// A string.
    String,
    /// An integer.
    Integer,
    /// A floating-point number.
    Float,
    /// A boolean.
    Boolean,
    /// An ordered list of strings.
    List,
    /// A map of query parameters.
    Map,
}

impl ValueType {
    /// Returns the name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

/// A dynamically typed component value, as accepted by [`Url::set`].
///
/// [`Url::set`]: crate::Url::set
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Clears the component.
    Null,
    /// A string.
    String(String),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An ordered list of strings.
    List(Vec<String>),
    /// A map of query parameters.
    Map(Params),
}

impl Value {
    /// Returns the type of the value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::String(_) => ValueType::String,
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
            Self::Boolean(_) => ValueType::Boolean,
            Self::List(_) => ValueType::List,
            Self::Map(_) => ValueType::Map,
        }
    }

    /// Checks whether the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Self::Integer(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Self::Integer(x.into())
    }
}

impl From<u16> for Value {
    fn from(x: u16) -> Self {
        Self::Integer(x.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Self::Boolean(x)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_owned).collect())
    }
}

impl From<Params> for Value {
    fn from(p: Params) -> Self {
        Self::Map(p)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
