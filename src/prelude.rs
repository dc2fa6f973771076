//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use magnet_uri::prelude::*;
//!
//! let uri = MagnetUri::parse("magnet:?xt=urn:sha1:ABC").unwrap();
//! assert_eq!(uri.exact_topics().count(), 1);
//! ```

pub use crate::{
    // Core types
    MagnetUri, Parameter, ParameterPrefix,
    // Errors
    ParameterError, ParseError, ParseErrorKind, SerializeError,
    // Constants
    INDEX_SEPARATOR, PARAMETER_SEPARATOR, SCHEMA_PREFIX, VALUE_SEPARATOR,
};
