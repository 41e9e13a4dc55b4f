use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModeError;

/// Enum defining the available structured-data output modes.
///
/// Each mode selects a fixed bundle of feature flags controlling which
/// optional fields the output generator emits; see
/// [`Mode::configuration`](crate::config) for the resolved bundle.
///
/// The wire tags are kebab-case strings and are part of the public
/// contract: they appear in generator configuration files and round-trip
/// through serde unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Maximal inline annotation (type, schema version, identifier,
    /// conformance) for search-engine compliance. This is the default.
    StrictSeo,

    /// Two parallel output blocks: one for search engines, one for
    /// language-model consumers.
    SplitChannels,

    /// Conformance declared out-of-band through a `rel="profile"` link
    /// relation instead of inline metadata.
    StandardsHeader,
}

impl Mode {
    /// All recognized modes, in declaration order.
    pub const ALL: [Mode; 3] = [Mode::StrictSeo, Mode::SplitChannels, Mode::StandardsHeader];

    /// Returns the wire tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::StrictSeo => "strict-seo",
            Mode::SplitChannels => "split-channels",
            Mode::StandardsHeader => "standards-header",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::StrictSeo
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    /// Parses a wire tag into a `Mode`.
    ///
    /// This is the validation boundary: any string outside the recognized
    /// set fails with [`ModeError::InvalidMode`] naming the bad value.
    /// There is no fallback to a default mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict-seo" => Ok(Mode::StrictSeo),
            "split-channels" => Ok(Mode::SplitChannels),
            "standards-header" => Ok(Mode::StandardsHeader),
            other => Err(ModeError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = ModeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
