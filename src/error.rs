//! Error types.

use crate::{component::ValueType, pct_enc::DecodeError, Component};

/// An error occurred when constructing, mutating, parsing or serializing a [`Url`].
///
/// Each variant corresponds to one class of failure, so that callers can
/// match on the class without inspecting messages.
///
/// [`Url`]: crate::Url
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A component received a value of the wrong type.
    ComponentType(ComponentTypeError),
    /// A component received a value of the right type that is not allowed.
    InvalidComponent(InvalidComponentError),
    /// A string could not be parsed as a URL, or a URL could not be serialized.
    InvalidUrl(InvalidUrlError),
    /// An unknown component was referenced.
    Internal(InternalError),
}

/// The class of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// See [`Error::ComponentType`].
    ComponentType,
    /// See [`Error::InvalidComponent`].
    InvalidComponent,
    /// See [`Error::InvalidUrl`].
    InvalidUrl,
    /// See [`Error::Internal`].
    Internal,
}

impl Error {
    /// Returns the class of the error.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::ComponentType(_) => ErrorClass::ComponentType,
            Self::InvalidComponent(_) => ErrorClass::InvalidComponent,
            Self::InvalidUrl(_) => ErrorClass::InvalidUrl,
            Self::Internal(_) => ErrorClass::Internal,
        }
    }

    pub(crate) fn invalid_component(component: Component, kind: InvalidComponentKind) -> Self {
        Self::InvalidComponent(InvalidComponentError { component, kind })
    }

    pub(crate) fn invalid_url(input: Option<&str>, kind: InvalidUrlKind) -> Self {
        Self::InvalidUrl(InvalidUrlError {
            input: input.map(str::to_owned),
            kind,
        })
    }
}

/// A component received a value of the wrong type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentTypeError {
    pub(crate) component: Component,
    pub(crate) expected: ValueType,
    pub(crate) found: ValueType,
}

impl ComponentTypeError {
    /// Returns the component that rejected the value.
    #[must_use]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Returns the type accepted by the component.
    #[must_use]
    pub fn expected(&self) -> ValueType {
        self.expected
    }

    /// Returns the type of the rejected value.
    #[must_use]
    pub fn found(&self) -> ValueType {
        self.found
    }
}

/// Detailed cause of an [`InvalidComponentError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidComponentKind {
    /// The value contains a character the component does not allow.
    DisallowedChar(char),
    /// The component does not accept a null value.
    Null,
    /// The port is outside `1..=65535`.
    PortOutOfRange(i64),
    /// The value contains an invalid percent-encoded octet.
    Decode(DecodeError),
    /// Both `path` and `path_segments` were given at construction.
    ExclusivePath,
    /// The component can only be set at construction.
    Fixed,
}

/// A component received a value of the right type that is not allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidComponentError {
    pub(crate) component: Component,
    pub(crate) kind: InvalidComponentKind,
}

impl InvalidComponentError {
    /// Returns the component that rejected the value.
    #[must_use]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> InvalidComponentKind {
        self.kind
    }
}

/// Detailed cause of an [`InvalidUrlError`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUrlKind {
    /// The input could not be split into URL components.
    Split(::url::ParseError),
    /// The input contains a character that is not allowed in a URL.
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Its byte index in the lowercased input.
        index: usize,
    },
    /// A query pair does not contain exactly one `=`.
    MalformedPair {
        /// The offending pair.
        pair: String,
        /// The 1-based position of the pair in the query.
        position: usize,
    },
    /// An array parameter reuses the key of a scalar parameter.
    MixedParam(String),
    /// A component contains an invalid percent-encoded octet.
    Decode(DecodeError),
    /// A component required for serialization is absent.
    Missing(Component),
}

/// A string could not be parsed as a URL, or a URL could not be serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidUrlError {
    pub(crate) input: Option<String>,
    pub(crate) kind: InvalidUrlKind,
}

impl InvalidUrlError {
    /// Returns the input that failed to parse.
    ///
    /// This is the input after lowercasing. It is `None` for serialization
    /// errors.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> &InvalidUrlKind {
        &self.kind
    }
}

/// An unknown component was referenced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternalError {
    pub(crate) name: String,
}

impl InternalError {
    /// Returns the unknown component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidComponent(e) => e.source(),
            Self::InvalidUrl(e) => e.source(),
            _ => None,
        }
    }
}

impl std::error::Error for ComponentTypeError {}

impl std::error::Error for InvalidComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InvalidComponentKind::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for InvalidUrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InvalidUrlKind::Split(e) => Some(e),
            InvalidUrlKind::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for InternalError {}

impl From<ComponentTypeError> for Error {
    fn from(e: ComponentTypeError) -> Self {
        Self::ComponentType(e)
    }
}

impl From<InvalidComponentError> for Error {
    fn from(e: InvalidComponentError) -> Self {
        Self::InvalidComponent(e)
    }
}

impl From<InvalidUrlError> for Error {
    fn from(e: InvalidUrlError) -> Self {
        Self::InvalidUrl(e)
    }
}
