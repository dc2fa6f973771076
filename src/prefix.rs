//! Parameter prefix tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

/// The kind of a magnet URI parameter.
///
/// Only the four tokens of the magnet draft are recognized; any other key is
/// rejected when parsing.
///
/// # Examples
///
/// ```
/// use magnet_uri::ParameterPrefix;
///
/// let prefix: ParameterPrefix = "xt".parse().unwrap();
/// assert_eq!(prefix, ParameterPrefix::ExactTopic);
/// assert_eq!(prefix.as_str(), "xt");
/// assert!("tr".parse::<ParameterPrefix>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterPrefix {
    /// `xt`: URN identifying the exact content, usually a hash
    ExactTopic,
    /// `dn`: human readable file name
    DisplayName,
    /// `kt`: free text search keywords
    KeywordTopic,
    /// `mt`: URI of a manifest listing related content
    ManifestTopic,
}

impl ParameterPrefix {
    /// All prefixes, in the order groups are written by the serializer.
    pub const ALL: [Self; 4] = [
        Self::ExactTopic,
        Self::DisplayName,
        Self::KeywordTopic,
        Self::ManifestTopic,
    ];

    /// Returns the wire token of this prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactTopic => "xt",
            Self::DisplayName => "dn",
            Self::KeywordTopic => "kt",
            Self::ManifestTopic => "mt",
        }
    }
}

impl fmt::Display for ParameterPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterPrefix {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xt" => Ok(Self::ExactTopic),
            "dn" => Ok(Self::DisplayName),
            "kt" => Ok(Self::KeywordTopic),
            "mt" => Ok(Self::ManifestTopic),
            _ => Err(ParameterError::UnknownPrefix {
                prefix: s.to_string(),
            }),
        }
    }
}

impl AsRef<str> for ParameterPrefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
