//! Per-component validation.

use crate::{
    component::{Component, Value},
    error::{ComponentTypeError, Error, InvalidComponentKind},
    pct_enc::{table::GEN_DELIMS, Table},
};

/// `@ : / ? & #`
const SCHEME_DELIMS: Table = GEN_DELIMS.sub(Table::new(b"[]")).or(Table::new(b"&"));

/// `@ / ? & #`, for a bracketed IP literal where `:` is allowed.
const IP_LITERAL_DELIMS: Table = SCHEME_DELIMS.sub(Table::new(b":"));

/// `? #`
const PATH_DELIMS: Table = Table::new(b"?#");

/// Checks a value against the type and character rules of a component.
///
/// Null is accepted by every component except [`Component::Params`].
///
/// # Errors
///
/// Returns [`Error::ComponentType`] if the value has the wrong type, and
/// [`Error::InvalidComponent`] if it is null for `Params`, is a port out of
/// range, or contains a disallowed character.
pub fn validate(component: Component, value: &Value) -> Result<(), Error> {
    if value.is_null() {
        return match component {
            Component::Params => Err(Error::invalid_component(
                component,
                InvalidComponentKind::Null,
            )),
            _ => Ok(()),
        };
    }

    let expected = component.value_type();
    let found = value.value_type();
    if expected != found {
        return Err(Error::ComponentType(ComponentTypeError {
            component,
            expected,
            found,
        }));
    }

    match value {
        Value::String(s) => check_chars(component, s),
        Value::List(segments) => segments
            .iter()
            .try_for_each(|s| check_chars(component, s)),
        Value::Integer(x) if u16::try_from(*x).map_or(true, |x| x == 0) => Err(
            Error::invalid_component(component, InvalidComponentKind::PortOutOfRange(*x)),
        ),
        _ => Ok(()),
    }
}

fn disallowed(component: Component, s: &str) -> Option<Table> {
    match component {
        Component::DefaultProtocol | Component::Protocol => Some(SCHEME_DELIMS),
        Component::Host if is_ip_literal(s) => Some(IP_LITERAL_DELIMS),
        Component::Host => Some(SCHEME_DELIMS),
        Component::Path | Component::PathSegments => Some(PATH_DELIMS),
        Component::Port
        | Component::Params
        | Component::Fragment
        | Component::User
        | Component::Password => None,
    }
}

fn check_chars(component: Component, s: &str) -> Result<(), Error> {
    match disallowed(component, s).and_then(|t| t.find_in(s)) {
        Some(ch) => Err(Error::invalid_component(
            component,
            InvalidComponentKind::DisallowedChar(ch),
        )),
        None => Ok(()),
    }
}

fn is_ip_literal(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('[') && s.ends_with(']')
}
