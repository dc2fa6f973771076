//! Main magnet URI type.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::constants::{PARAMETER_SEPARATOR, SCHEMA_PREFIX};
use crate::error::{ParseError, ParseErrorKind, SerializeError};
use crate::parameter::Parameter;
use crate::prefix::ParameterPrefix;

/// A parsed magnet URI.
///
/// Holds its parameters in the order they were parsed or supplied.
/// Equality ignores that order: two URIs are equal when they hold the same
/// parameters the same number of times.
///
/// # Structure
///
/// ```text
/// magnet:?<prefix>[.<index>]=<value>[&<prefix>[.<index>]=<value>...]
/// ```
///
/// # Examples
///
/// ```
/// use magnet_uri::MagnetUri;
///
/// let uri = MagnetUri::parse(
///     "magnet:?xt.1=urn:sha1:YNCKHTQCWBTRNJIV4WNAE52SJUQCZO5C&xt.2=urn:sha1:TXGCZQTH26NL6OUQAJJPFALHG2LTGBC7"
/// ).unwrap();
/// assert_eq!(uri.exact_topics().count(), 2);
///
/// let uri = MagnetUri::parse("magnet:?dn=song.mp3&xt=urn:sha1:ABC").unwrap();
/// assert_eq!(uri.to_uri_string().unwrap(), "magnet:?xt=urn:sha1:ABC&dn=song.mp3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MagnetUri {
    parameters: Vec<Parameter>,
}

impl MagnetUri {
    /// Creates a magnet URI from its parameters.
    #[must_use]
    pub const fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// Parses a magnet URI from a string.
    ///
    /// Parsing is all or nothing: the first invalid parameter fails the
    /// whole URI. Values are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input does not start with `magnet:?`
    /// - Any parameter has no `=`, a non-positive index or an unknown prefix
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Returns all parameters in their stored order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if the URI has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the parameters with the given prefix, in stored order.
    pub fn parameters_with_prefix(
        &self,
        prefix: ParameterPrefix,
    ) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.prefix() == prefix)
    }

    /// Returns the exact topic (`xt`) parameters.
    pub fn exact_topics(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters_with_prefix(ParameterPrefix::ExactTopic)
    }

    /// Returns the display name (`dn`) parameters.
    pub fn display_names(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters_with_prefix(ParameterPrefix::DisplayName)
    }

    /// Returns the keyword topic (`kt`) parameters.
    pub fn keyword_topics(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters_with_prefix(ParameterPrefix::KeywordTopic)
    }

    /// Returns the manifest topic (`mt`) parameters.
    pub fn manifest_topics(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters_with_prefix(ParameterPrefix::ManifestTopic)
    }

    /// Returns the URI as the serializer sees it.
    ///
    /// Parameters are grouped by prefix in `xt`, `dn`, `kt`, `mt` order.
    /// A group with one member loses its index; larger groups are numbered
    /// from 1 by position, whatever indices they were stored with.
    ///
    /// # Examples
    ///
    /// ```
    /// use magnet_uri::MagnetUri;
    ///
    /// let uri = MagnetUri::parse("magnet:?dn=a&xt.5=B&xt.9=C&kt.2=d").unwrap();
    /// let canonical = uri.canonicalize();
    /// let rendered: Vec<String> = canonical.parameters().iter().map(ToString::to_string).collect();
    /// assert_eq!(rendered, ["xt.1=B", "xt.2=C", "dn=a", "kt=d"]);
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let mut parameters = Vec::with_capacity(self.parameters.len());

        for prefix in ParameterPrefix::ALL {
            let group: Vec<&Parameter> = self.parameters_with_prefix(prefix).collect();
            if let [single] = group.as_slice() {
                parameters.push(single.reindexed(None));
            } else {
                parameters.extend(
                    group
                        .iter()
                        .zip(1..)
                        .map(|(param, position)| param.reindexed(NonZeroU32::new(position))),
                );
            }
        }

        Self { parameters }
    }

    /// Reassembles the URI into its canonical string form.
    ///
    /// See [`MagnetUri::canonicalize`] for how parameters are ordered and
    /// numbered. Values are written verbatim.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::NoParameters` if the URI has no parameters.
    pub fn to_uri_string(&self) -> Result<String, SerializeError> {
        if self.is_empty() {
            return Err(SerializeError::NoParameters);
        }

        let rendered: Vec<String> = self
            .canonicalize()
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect();

        let separator = PARAMETER_SEPARATOR.to_string();
        Ok(format!("{SCHEMA_PREFIX}{}", rendered.join(separator.as_str())))
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let rest =
            input
                .strip_prefix(SCHEMA_PREFIX)
                .ok_or(ParseErrorKind::MissingSchemaPrefix {
                    expected: SCHEMA_PREFIX,
                })?;

        let parameters = rest
            .split(PARAMETER_SEPARATOR)
            .enumerate()
            .map(|(position, fragment)| {
                Parameter::parse(fragment)
                    .map_err(|error| ParseErrorKind::InvalidParameter { position, error })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parameters })
    }

    fn parameter_counts(&self) -> HashMap<&Parameter, usize> {
        let mut counts = HashMap::with_capacity(self.parameters.len());
        for param in &self.parameters {
            *counts.entry(param).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for MagnetUri {
    fn eq(&self, other: &Self) -> bool {
        self.parameters.len() == other.parameters.len()
            && self.parameter_counts() == other.parameter_counts()
    }
}

impl Eq for MagnetUri {}

impl FromStr for MagnetUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MagnetUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&MagnetUri> for String {
    type Error = SerializeError;

    fn try_from(uri: &MagnetUri) -> Result<Self, Self::Error> {
        uri.to_uri_string()
    }
}

impl From<Vec<Parameter>> for MagnetUri {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self::new(parameters)
    }
}

impl FromIterator<Parameter> for MagnetUri {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MagnetUri {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MagnetUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.to_uri_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MagnetUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
