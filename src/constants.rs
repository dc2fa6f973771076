//! Constants of the magnet URI wire format.

/// The schema prefix every magnet URI starts with.
pub const SCHEMA_PREFIX: &str = "magnet:?";

/// Separator between parameters.
pub const PARAMETER_SEPARATOR: char = '&';

/// Separator between a parameter key and its value.
pub const VALUE_SEPARATOR: char = '=';

/// Separator between a parameter prefix and its index (`xt.1`).
pub const INDEX_SEPARATOR: char = '.';
