//! A single `key[.index]=value` parameter.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::constants::{INDEX_SEPARATOR, VALUE_SEPARATOR};
use crate::error::ParameterError;
use crate::prefix::ParameterPrefix;

/// One parameter of a magnet URI.
///
/// The value is kept exactly as it appeared in the URI: it is neither
/// percent-decoded nor validated.
///
/// # Examples
///
/// ```
/// use magnet_uri::{Parameter, ParameterPrefix};
///
/// let param = Parameter::parse("xt.2=urn:sha1:ABC").unwrap();
/// assert_eq!(param.prefix(), ParameterPrefix::ExactTopic);
/// assert_eq!(param.index(), Some(2));
/// assert_eq!(param.value(), "urn:sha1:ABC");
/// assert_eq!(param.to_string(), "xt.2=urn:sha1:ABC");
///
/// let param = Parameter::new(ParameterPrefix::DisplayName, "song.mp3");
/// assert_eq!(param.to_string(), "dn=song.mp3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    prefix: ParameterPrefix,
    index: Option<NonZeroU32>,
    value: String,
}

impl Parameter {
    /// Creates an unindexed parameter.
    #[must_use]
    pub fn new(prefix: ParameterPrefix, value: impl Into<String>) -> Self {
        Self {
            prefix,
            index: None,
            value: value.into(),
        }
    }

    /// Creates a parameter with an explicit index.
    ///
    /// An index of `0` means "no explicit index" and yields an unindexed
    /// parameter.
    #[must_use]
    pub fn with_index(prefix: ParameterPrefix, index: u32, value: impl Into<String>) -> Self {
        Self {
            prefix,
            index: NonZeroU32::new(index),
            value: value.into(),
        }
    }

    /// Parses a single parameter fragment (without the `&` separators).
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if:
    /// - The fragment has no `=`
    /// - The key has a `.` followed by anything but a positive integer
    /// - The prefix token is not `xt`, `dn`, `kt` or `mt`
    pub fn parse(input: &str) -> Result<Self, ParameterError> {
        let (key, value) =
            input
                .split_once(VALUE_SEPARATOR)
                .ok_or_else(|| ParameterError::WithoutPrefix {
                    parameter: input.to_string(),
                })?;

        let (token, index) = match key.split_once(INDEX_SEPARATOR) {
            Some((token, index)) => {
                let index =
                    index
                        .parse::<NonZeroU32>()
                        .map_err(|_| ParameterError::InvalidIndex {
                            prefix: token.to_string(),
                            index: index.to_string(),
                        })?;
                (token, Some(index))
            }
            None => (key, None),
        };

        let prefix = token.parse::<ParameterPrefix>()?;

        Ok(Self {
            prefix,
            index,
            value: value.to_string(),
        })
    }

    /// Returns the parameter prefix.
    #[must_use]
    pub const fn prefix(&self) -> ParameterPrefix {
        self.prefix
    }

    /// Returns the explicit index, if the parameter has one.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.index.map(NonZeroU32::get)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns a copy of this parameter with its index replaced.
    pub(crate) fn reindexed(&self, index: Option<NonZeroU32>) -> Self {
        Self {
            prefix: self.prefix,
            index,
            value: self.value.clone(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}.{index}={}", self.prefix, self.value),
            None => write!(f, "{}={}", self.prefix, self.value),
        }
    }
}

impl FromStr for Parameter {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Parameter {
    type Error = ParameterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Parameter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Parameter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unindexed() {
        let param = Parameter::parse("xt=urn:sha1:ABC").unwrap();
        assert_eq!(param.prefix(), ParameterPrefix::ExactTopic);
        assert_eq!(param.index(), None);
        assert_eq!(param.value(), "urn:sha1:ABC");
    }

    #[test]
    fn parse_indexed() {
        let param = Parameter::parse("kt.12=foo").unwrap();
        assert_eq!(param.prefix(), ParameterPrefix::KeywordTopic);
        assert_eq!(param.index(), Some(12));
        assert_eq!(param.value(), "foo");
    }

    #[test]
    fn value_splits_on_first_equals_only() {
        let param = Parameter::parse("mt=http://host/?a=b&c").unwrap();
        assert_eq!(param.value(), "http://host/?a=b&c");
    }

    #[test]
    fn empty_value_is_kept() {
        let param = Parameter::parse("dn=").unwrap();
        assert_eq!(param.value(), "");
        assert_eq!(param.to_string(), "dn=");
    }

    #[test]
    fn value_is_not_decoded() {
        let param = Parameter::parse("dn=Great+Speeches%20.mp3").unwrap();
        assert_eq!(param.value(), "Great+Speeches%20.mp3");
    }

    #[test]
    fn parse_without_equals_fails() {
        let result = Parameter::parse("parameterwithoutprefix");
        assert_eq!(
            result,
            Err(ParameterError::WithoutPrefix {
                parameter: "parameterwithoutprefix".to_string()
            })
        );
    }

    #[test]
    fn parse_empty_fragment_fails() {
        assert!(matches!(
            Parameter::parse(""),
            Err(ParameterError::WithoutPrefix { .. })
        ));
    }

    #[test]
    fn parse_non_numeric_index_fails() {
        let result = Parameter::parse("xt.one=A");
        assert_eq!(
            result,
            Err(ParameterError::InvalidIndex {
                prefix: "xt".to_string(),
                index: "one".to_string()
            })
        );
    }

    #[test]
    fn parse_zero_index_fails() {
        assert!(matches!(
            Parameter::parse("xt.0=A"),
            Err(ParameterError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn parse_negative_and_empty_index_fail() {
        assert!(matches!(
            Parameter::parse("xt.-1=A"),
            Err(ParameterError::InvalidIndex { .. })
        ));
        assert!(matches!(
            Parameter::parse("xt.=A"),
            Err(ParameterError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn parse_unknown_prefix_fails() {
        assert_eq!(
            Parameter::parse("unknown=value"),
            Err(ParameterError::UnknownPrefix {
                prefix: "unknown".to_string()
            })
        );
        // Only the part before the first dot is the token
        assert_eq!(
            Parameter::parse("x.pe=1.2.3.4:5"),
            Err(ParameterError::InvalidIndex {
                prefix: "x".to_string(),
                index: "pe".to_string()
            })
        );
    }

    #[test]
    fn unknown_prefix_with_valid_index_fails() {
        assert_eq!(
            Parameter::parse("tr.1=udp://tracker"),
            Err(ParameterError::UnknownPrefix {
                prefix: "tr".to_string()
            })
        );
    }

    #[test]
    fn with_index_zero_is_unindexed() {
        let param = Parameter::with_index(ParameterPrefix::ExactTopic, 0, "A");
        assert_eq!(param.index(), None);
        assert_eq!(param, Parameter::new(ParameterPrefix::ExactTopic, "A"));
    }

    #[test]
    fn display_renders_index() {
        let param = Parameter::with_index(ParameterPrefix::ManifestTopic, 3, "list.rss");
        assert_eq!(param.to_string(), "mt.3=list.rss");
    }

    #[test]
    fn display_parse_roundtrip() {
        let input = "dn.7=My+File.iso";
        assert_eq!(Parameter::parse(input).unwrap().to_string(), input);
    }
}
