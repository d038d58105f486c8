use crate::{
    component::{Component, Params, Value},
    error::{Error, InvalidComponentKind, InvalidUrlKind},
    path, pct_enc,
    port::{default_port, default_port_opt},
    query,
    validate::validate,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Construction options for a [`Url`].
///
/// Every field is optional. Unset fields are resolved once, by [`Url::new`],
/// in this order:
///
/// 1. `protocol` defaults to `default_protocol`;
/// 2. `port` defaults to the [default port](crate::default_port) of the
///    resolved protocol;
/// 3. `params` defaults to an empty map;
/// 4. everything else defaults to absent.
///
/// `path` and `path_segments` are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// The scheme used when `protocol` is unset.
    pub default_protocol: Option<String>,
    /// The scheme.
    pub protocol: Option<String>,
    /// The host.
    pub host: Option<String>,
    /// The port.
    pub port: Option<u16>,
    /// The path, as a percent-encoded slash-separated string.
    pub path: Option<String>,
    /// The path, as decoded segments.
    pub path_segments: Option<Vec<String>>,
    /// The query parameters.
    pub params: Option<Params>,
    /// The fragment.
    pub fragment: Option<String>,
    /// The user name.
    pub user: Option<String>,
    /// The password.
    pub password: Option<String>,
}

impl Components {
    /// Overlays `other` onto `self`: every field set in `other` wins.
    ///
    /// `path` and `path_segments` are taken together, from `other` if it
    /// sets either of them.
    #[must_use]
    pub fn merge(self, other: Components) -> Components {
        let (path, path_segments) = if other.path.is_some() || other.path_segments.is_some() {
            (other.path, other.path_segments)
        } else {
            (self.path, self.path_segments)
        };
        Components {
            default_protocol: other.default_protocol.or(self.default_protocol),
            protocol: other.protocol.or(self.protocol),
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            path,
            path_segments,
            params: other.params.or(self.params),
            fragment: other.fragment.or(self.fragment),
            user: other.user.or(self.user),
            password: other.password.or(self.password),
        }
    }
}

/// A mutable URL with validated components.
///
/// Components are stored decoded. Every mutation is validated first and
/// leaves the URL untouched on failure; [`to_canonical_string`] encodes
/// every component again.
///
/// # Examples
///
/// ```
/// use basic_url::{Components, Url};
///
/// let mut url = Url::new(Components {
///     default_protocol: Some("https".into()),
///     host: Some("example.com".into()),
///     ..Components::default()
/// })?;
/// assert_eq!(url.port(), Some(443));
///
/// url.set_path(Some("/search"))?;
/// url.params_mut().insert("q".into(), "rust url".into());
/// assert_eq!(url.to_canonical_string()?, "https://example.com/search?q=rust+url");
///
/// let joined = url.join("results/2")?;
/// assert_eq!(joined.path().as_deref(), Some("search/results/2"));
/// # Ok::<_, basic_url::Error>(())
/// ```
///
/// [`to_canonical_string`]: Self::to_canonical_string
#[derive(Clone, Debug, Default)]
pub struct Url {
    default_protocol: Option<String>,
    protocol: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    /// Whether the port was set by the caller rather than seeded from the protocol.
    port_explicit: bool,
    path_segments: Vec<String>,
    params: Params,
    fragment: Option<String>,
    user: Option<String>,
    password: Option<String>,
}

fn into_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn decode_path(component: Component, path: &str) -> Result<Vec<String>, Error> {
    path::segments(path)
        .map_err(|e| Error::invalid_component(component, InvalidComponentKind::Decode(e)))
}

impl Url {
    /// Creates a URL from construction options.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any component fails validation, or if both
    /// `path` and `path_segments` are given.
    pub fn new(c: Components) -> Result<Url, Error> {
        if c.path.is_some() && c.path_segments.is_some() {
            return Err(Error::invalid_component(
                Component::Path,
                InvalidComponentKind::ExclusivePath,
            ));
        }
        validate(
            Component::DefaultProtocol,
            &c.default_protocol.as_deref().into(),
        )?;

        let mut url = Url {
            default_protocol: c.default_protocol,
            ..Url::default()
        };

        let protocol = c.protocol.or_else(|| url.default_protocol.clone());
        url.set(Component::Protocol, protocol)?;
        url.set(Component::Host, c.host)?;
        if let Some(port) = c.port {
            url.set_port(Some(port))?;
        }
        match (c.path, c.path_segments) {
            (Some(path), _) => url.set(Component::Path, path)?,
            (_, Some(segments)) => url.set(Component::PathSegments, segments)?,
            (None, None) => {}
        }
        if let Some(params) = c.params {
            url.set_params(params)?;
        }
        url.set(Component::Fragment, c.fragment)?;
        url.set(Component::User, c.user)?;
        url.set(Component::Password, c.password)?;
        Ok(url)
    }

    /// Sets a component from a dynamically typed value.
    ///
    /// A null value clears the component. Setting the protocol also resets
    /// the port to the protocol's default, unless the port has been set explicitly.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value fails [validation](crate::validate()), if the
    /// path does not decode, or if the component is [`Component::DefaultProtocol`],
    /// which can only be given at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use basic_url::{Component, ErrorClass, Url};
    ///
    /// let mut url = Url::default();
    /// url.set(Component::Port, 8080u16)?;
    /// assert_eq!(url.port(), Some(8080));
    ///
    /// let e = url.set(Component::Port, "eighty").unwrap_err();
    /// assert_eq!(e.class(), ErrorClass::ComponentType);
    /// assert_eq!(url.port(), Some(8080));
    /// # Ok::<_, basic_url::Error>(())
    /// ```
    pub fn set(&mut self, component: Component, value: impl Into<Value>) -> Result<(), Error> {
        let value = value.into();
        self.set_value(component, value).map_err(|e| {
            tracing::debug!(%component, error = %e, "rejected component value");
            e
        })
    }

    fn set_value(&mut self, component: Component, value: Value) -> Result<(), Error> {
        validate(component, &value)?;

        match component {
            Component::DefaultProtocol => {
                return Err(Error::invalid_component(
                    component,
                    InvalidComponentKind::Fixed,
                ))
            }
            Component::Protocol => {
                self.protocol = into_string(value);
                if !self.port_explicit {
                    self.port = default_port_opt(self.protocol.as_deref());
                }
            }
            Component::Host => self.host = into_string(value),
            Component::Port => {
                self.port = match value {
                    Value::Integer(x) => u16::try_from(x).ok(),
                    _ => None,
                };
                self.port_explicit = true;
            }
            Component::Path => {
                self.path_segments = match into_string(value) {
                    Some(s) => decode_path(component, &s)?,
                    None => Vec::new(),
                };
            }
            Component::PathSegments => {
                self.path_segments = match value {
                    Value::List(mut v) => {
                        v.retain(|s| !s.is_empty());
                        v
                    }
                    _ => Vec::new(),
                };
            }
            Component::Params => {
                if let Value::Map(params) = value {
                    self.params = params;
                }
            }
            Component::Fragment => self.fragment = into_string(value),
            Component::User => self.user = into_string(value),
            Component::Password => self.password = into_string(value),
        }
        Ok(())
    }

    /// Sets the protocol.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the protocol contains any of `@ : / ? & #`.
    pub fn set_protocol(&mut self, protocol: Option<&str>) -> Result<(), Error> {
        self.set(Component::Protocol, protocol)
    }

    /// Sets the host.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host contains any of `@ : / ? & #`. A host enclosed
    /// in square brackets may contain `:`.
    pub fn set_host(&mut self, host: Option<&str>) -> Result<(), Error> {
        self.set(Component::Host, host)
    }

    /// Sets the port.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port is zero.
    pub fn set_port(&mut self, port: Option<u16>) -> Result<(), Error> {
        self.set(Component::Port, port)
    }

    /// Sets the path from a percent-encoded slash-separated string.
    ///
    /// Empty segments are dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path contains `?` or `#`, or does not decode.
    pub fn set_path(&mut self, path: Option<&str>) -> Result<(), Error> {
        self.set(Component::Path, path)
    }

    /// Sets the path from decoded segments.
    ///
    /// Empty segments are dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a segment contains `?` or `#`.
    pub fn set_path_segments<I>(&mut self, segments: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        self.set(Component::PathSegments, segments)
    }

    /// Replaces the query parameters.
    ///
    /// # Errors
    ///
    /// Never fails for a map value; the result type matches the other setters.
    pub fn set_params(&mut self, params: Params) -> Result<(), Error> {
        self.set(Component::Params, params)
    }

    /// Sets the fragment.
    ///
    /// # Errors
    ///
    /// Never fails for a string value; the result type matches the other setters.
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> Result<(), Error> {
        self.set(Component::Fragment, fragment)
    }

    /// Sets the user name.
    ///
    /// # Errors
    ///
    /// Never fails for a string value; the result type matches the other setters.
    pub fn set_user(&mut self, user: Option<&str>) -> Result<(), Error> {
        self.set(Component::User, user)
    }

    /// Sets the password.
    ///
    /// # Errors
    ///
    /// Never fails for a string value; the result type matches the other setters.
    pub fn set_password(&mut self, password: Option<&str>) -> Result<(), Error> {
        self.set(Component::Password, password)
    }

    /// Returns the protocol given at construction, if any.
    #[must_use]
    pub fn default_protocol(&self) -> Option<&str> {
        self.default_protocol.as_deref()
    }

    /// Returns the protocol.
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the decoded path segments joined by `/`, or `None` if there are none.
    ///
    /// The path carries no leading slash.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        path::compose(&self.path_segments, |s, buf| buf.push_str(s))
    }

    /// Returns the percent-encoded path segments joined by `/`, or `None` if there are none.
    #[must_use]
    pub fn path_encoded(&self) -> Option<String> {
        path::compose(&self.path_segments, pct_enc::encode_to)
    }

    /// Returns the decoded path segments.
    #[must_use]
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Returns the query parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns a mutable reference to the query parameters.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Returns the encoded query string without the leading `?`,
    /// or `None` if there are no parameters.
    #[must_use]
    pub fn query_string(&self) -> Option<String> {
        (!self.params.is_empty()).then(|| query::encode(&self.params))
    }

    /// Returns the fragment.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the user name.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns a copy of this URL with `path` joined onto its path.
    ///
    /// Equivalent to [`join_with`](Self::join_with) with `replace_when_absolute` set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `path` contains `?` or `#`, or does not decode.
    pub fn join(&self, path: &str) -> Result<Url, Error> {
        self.join_with(path, true)
    }

    /// Returns a copy of this URL with `path` joined onto its path.
    ///
    /// If `replace_when_absolute` is set and `path` starts with `/`, the
    /// copy's path is `path`. Otherwise the segments of `path` are appended.
    /// Trailing slashes have no effect. `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `path` contains `?` or `#`, or does not decode.
    pub fn join_with(&self, path: &str, replace_when_absolute: bool) -> Result<Url, Error> {
        let mut url = self.clone();
        url.join_mut_with(path, replace_when_absolute)?;
        Ok(url)
    }

    /// Joins `path` onto this URL's path in place, returning the new [path](Self::path).
    ///
    /// Equivalent to [`join_mut_with`](Self::join_mut_with) with `replace_when_absolute` set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `path` contains `?` or `#`, or does not decode.
    pub fn join_mut(&mut self, path: &str) -> Result<Option<String>, Error> {
        self.join_mut_with(path, true)
    }

    /// Joins `path` onto this URL's path in place, returning the new [path](Self::path).
    ///
    /// See [`join_with`](Self::join_with) for the joining rules.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `path` contains `?` or `#`, or does not decode.
    pub fn join_mut_with(
        &mut self,
        path: &str,
        replace_when_absolute: bool,
    ) -> Result<Option<String>, Error> {
        validate(Component::Path, &path.into())?;
        let segments = decode_path(Component::Path, path)?;
        path::join_into(&mut self.path_segments, path, segments, replace_when_absolute);
        Ok(self.path())
    }

    /// Serializes the URL.
    ///
    /// The result has the form `protocol://[user[:password]@]host[:port][/path][?query][#fragment]`.
    /// User, password, path segments, query keys and values, and the fragment are
    /// percent-encoded; the port is omitted if it is the protocol's default.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the protocol or the host is absent.
    pub fn to_canonical_string(&self) -> Result<String, Error> {
        let missing = |c| Error::invalid_url(None, InvalidUrlKind::Missing(c));
        let protocol = self
            .protocol
            .as_deref()
            .ok_or_else(|| missing(Component::Protocol))?;
        let host = self.host.as_deref().ok_or_else(|| missing(Component::Host))?;

        let mut buf = String::with_capacity(protocol.len() + host.len() + 3);
        buf.push_str(protocol);
        buf.push_str("://");

        if self.user.is_some() || self.password.is_some() {
            if let Some(user) = &self.user {
                pct_enc::encode_to(user, &mut buf);
            }
            if let Some(password) = &self.password {
                buf.push(':');
                pct_enc::encode_to(password, &mut buf);
            }
            buf.push('@');
        }

        buf.push_str(host);
        if let Some(port) = self.port.filter(|&p| Some(p) != default_port(protocol)) {
            buf.push(':');
            buf.push_str(&port.to_string());
        }

        if let Some(path) = self.path_encoded() {
            buf.push('/');
            buf.push_str(&path);
        }
        if !self.params.is_empty() {
            buf.push('?');
            query::encode_to(&self.params, &mut buf);
        }
        if let Some(fragment) = &self.fragment {
            buf.push('#');
            pct_enc::encode_to(fragment, &mut buf);
        }
        Ok(buf)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.default_protocol == other.default_protocol
            && self.protocol == other.protocol
            && self.host == other.host
            && self.port == other.port
            && self.path_segments == other.path_segments
            && self.params == other.params
            && self.fragment == other.fragment
            && self.user == other.user
            && self.password == other.password
    }
}

impl Eq for Url {}

#[cfg(feature = "serde")]
impl Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self
            .to_canonical_string()
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(&s).map_err(de::Error::custom)
    }
}
