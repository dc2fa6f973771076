//! Parser and serializer for `magnet:` URIs.
//!
//! Magnet URIs reference content by hash and metadata instead of by network
//! location. This crate splits a raw magnet URI into typed parameters,
//! reassembles parameters into a canonical string, and compares URIs
//! independently of parameter order.
//!
//! # Overview
//!
//! A magnet URI is a schema prefix followed by `&`-separated parameters:
//!
//! ```text
//! magnet:?<prefix>[.<index>]=<value>[&...]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use magnet_uri::{MagnetUri, ParameterPrefix};
//!
//! let uri = MagnetUri::parse(
//!     "magnet:?xt=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C&dn=I+Have+A+Dream.mp3"
//! ).unwrap();
//!
//! let topic = uri.exact_topics().next().unwrap();
//! assert_eq!(topic.value(), "urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C");
//! assert_eq!(topic.prefix(), ParameterPrefix::ExactTopic);
//!
//! // Values are never decoded
//! assert_eq!(uri.display_names().next().unwrap().value(), "I+Have+A+Dream.mp3");
//!
//! // Order does not matter for equality
//! let same = MagnetUri::parse(
//!     "magnet:?dn=I+Have+A+Dream.mp3&xt=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C"
//! ).unwrap();
//! assert_eq!(uri, same);
//! ```
//!
//! # Parameters
//!
//! | Prefix | Meaning |
//! |--------|---------|
//! | `xt` | Exact topic: URN of the content, usually a hash |
//! | `dn` | Display name |
//! | `kt` | Keyword topic: search keywords |
//! | `mt` | Manifest topic: URI of a list of related content |
//!
//! Any other prefix is rejected. Several parameters of one kind are told
//! apart with an index: `xt.1=...&xt.2=...`.
//!
//! # Serialization
//!
//! [`MagnetUri::to_uri_string`] writes parameters grouped by prefix in the
//! order of the table above. A group with one parameter is written without
//! an index; larger groups are numbered from 1 by position.
//!
//! ```rust
//! use magnet_uri::MagnetUri;
//!
//! let uri = MagnetUri::parse("magnet:?dn=x&xt.4=B&xt.7=C").unwrap();
//! assert_eq!(uri.to_uri_string().unwrap(), "magnet:?xt.1=B&xt.2=C&dn=x");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MagnetUri`] and [`Parameter`]
//!   through their string forms.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod parameter;
pub mod prelude;
mod prefix;
mod uri;

pub use constants::{INDEX_SEPARATOR, PARAMETER_SEPARATOR, SCHEMA_PREFIX, VALUE_SEPARATOR};
pub use error::{ParameterError, ParseError, ParseErrorKind, SerializeError};
pub use parameter::Parameter;
pub use prefix::ParameterPrefix;
pub use uri::MagnetUri;
