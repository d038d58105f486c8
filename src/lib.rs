#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! A mutable URL value with validated, individually addressable components.
//!
//! A [`Url`] stores its components decoded: protocol, host, port, path
//! segments, query parameters, fragment, user and password. Components can be
//! read and replaced one at a time, every replacement is [validated] before it
//! is applied, and the whole URL is written back with
//! [`Url::to_canonical_string`].
//!
//! Query strings use the `key[]=value` array convention, and components are
//! percent-encoded with the [`application/x-www-form-urlencoded`] rules.
//! Default ports of well-known schemes are filled in when a protocol is set,
//! and omitted again on serialization.
//!
//! [validated]: validate()
//! [`application/x-www-form-urlencoded`]: https://url.spec.whatwg.org/#application/x-www-form-urlencoded
//!
//! # Examples
//!
//! ```
//! use basic_url::{Component, ParamValue, Url};
//!
//! let mut url = Url::parse("http://example.com:8080/docs/index.html?tags[]=a&tags[]=b")?;
//! assert_eq!(url.port(), Some(8080));
//! assert_eq!(url.params()["tags"], ParamValue::from(["a", "b"]));
//!
//! url.set(Component::Port, 80u16)?;
//! url.set_fragment(Some("top"))?;
//! assert_eq!(
//!     url.to_canonical_string()?,
//!     "http://example.com/docs/index.html?tags[]=a&tags[]=b#top"
//! );
//! # Ok::<_, basic_url::Error>(())
//! ```
//!
//! # Feature flags
//!
//! All features are disabled by default.
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Url`] as its
//!   canonical string, and for [`ParamValue`].
//!
//! # Logging
//!
//! Rejected mutations and parse failures are reported as `debug` events
//! through [`tracing`]; successful parses as `trace` events. The crate
//! never installs a subscriber.
//!
//! [`tracing`]: https://docs.rs/tracing

pub mod path;
pub mod pct_enc;
pub mod query;

mod component;
mod error;
mod fmt;
mod parser;
mod port;
mod url;
mod validate;

pub use component::{Component, ParamValue, Params, Value, ValueType};
pub use error::{
    ComponentTypeError, Error, ErrorClass, InternalError, InvalidComponentError,
    InvalidComponentKind, InvalidUrlError, InvalidUrlKind,
};
pub use port::default_port;
pub use crate::url::{Components, Url};
pub use validate::validate;
