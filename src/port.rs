//! Well-known default ports.

/// Schemes with a well-known default port.
static DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("telnet", 23),
    ("http", 80),
    ("ws", 80),
    ("ldap", 389),
    ("https", 443),
    ("wss", 443),
    ("ldaps", 636),
];

/// Returns the default port of a scheme, compared case-insensitively.
///
/// # Examples
///
/// ```
/// use basic_url::default_port;
///
/// assert_eq!(default_port("https"), Some(443));
/// assert_eq!(default_port("FTP"), Some(21));
/// assert_eq!(default_port("gopher"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}

pub(crate) fn default_port_opt(scheme: Option<&str>) -> Option<u16> {
    scheme.and_then(default_port)
}
