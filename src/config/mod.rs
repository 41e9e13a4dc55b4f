//! Mode→configuration resolution.
//!
//! The mapping from [`Mode`] to its feature-flag bundle is a static table:
//! one `const` [`ModeConfiguration`] per mode, looked up through
//! [`Mode::configuration`]. Accessors on [`ModeConfig`] read through that
//! table, so the bundled record and the individual accessors cannot drift
//! apart. Changing the table is a breaking change for every generator
//! consuming this crate.

use serde::Serialize;

use crate::errors::Result;
use crate::modes::Mode;

/// The resolved feature-flag bundle for an output mode.
///
/// Each flag gates one optional field or behavior of the structured-data
/// generator. The record is resolved once per mode at compile time; flags
/// the table leaves unset are `false`, applied here rather than at each
/// accessor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ModeConfiguration {
    /// Include an extra `additionalType` annotation in the output.
    pub use_additional_type: bool,
    /// Include a `schemaVersion` marker.
    pub use_schema_version: bool,
    /// Include vendor/extension properties via `additionalProperty`.
    pub use_additional_property: bool,
    /// Include a unique `identifier` field.
    pub use_identifier: bool,
    /// Include an inline `conformsTo` profile reference.
    pub use_conforms_to: bool,
    /// Emit the profile metadata block.
    pub include_profile_metadata: bool,
    /// Emit LLM-oriented data as a separate block rather than inline.
    pub separate_llm_block: bool,
    /// Emit a `rel="profile"` link relation instead of inline metadata.
    pub include_rel_profile: bool,
}

/// Base IRI for the conformance profiles advertised through `rel="profile"`.
pub const PROFILE_BASE_IRI: &str = "https://w3id.org/structured-data-modes/profile/";

const STRICT_SEO: ModeConfiguration = ModeConfiguration {
    use_additional_type: true,
    use_schema_version: true,
    use_additional_property: true,
    use_identifier: true,
    use_conforms_to: true,
    include_profile_metadata: true,
    separate_llm_block: false,
    include_rel_profile: false,
};

// Extension properties and conformance move into the LLM block, so the
// inline channel does not carry them.
const SPLIT_CHANNELS: ModeConfiguration = ModeConfiguration {
    use_additional_type: true,
    use_schema_version: true,
    use_additional_property: false,
    use_identifier: true,
    use_conforms_to: false,
    include_profile_metadata: true,
    separate_llm_block: true,
    include_rel_profile: false,
};

// Conformance is declared out-of-band; only the identifier survives inline
// so documents stay addressable.
const STANDARDS_HEADER: ModeConfiguration = ModeConfiguration {
    use_additional_type: false,
    use_schema_version: false,
    use_additional_property: false,
    use_identifier: true,
    use_conforms_to: false,
    include_profile_metadata: false,
    separate_llm_block: false,
    include_rel_profile: true,
};

impl Mode {
    /// Returns the static configuration record for this mode.
    ///
    /// Pure lookup; repeated calls always return the same record.
    pub fn configuration(&self) -> &'static ModeConfiguration {
        match self {
            Mode::StrictSeo => &STRICT_SEO,
            Mode::SplitChannels => &SPLIT_CHANNELS,
            Mode::StandardsHeader => &STANDARDS_HEADER,
        }
    }

    /// Returns the conformance profile IRI advertised by this mode, if it
    /// declares one through `rel="profile"`.
    pub fn rel_profile_value(&self) -> Option<&'static str> {
        if !self.configuration().include_rel_profile {
            return None;
        }
        match self {
            // Concatenation of PROFILE_BASE_IRI and the wire tag; const
            // string concat is not available, so the full IRI is spelled out.
            Mode::StandardsHeader => {
                Some("https://w3id.org/structured-data-modes/profile/standards-header")
            }
            _ => None,
        }
    }
}

/// Resolver tying one [`Mode`] to its configuration for the duration of a
/// single output-generation request.
///
/// Immutable after construction: the mode never changes, every accessor is
/// a deterministic pure function of it, and the value is safe to share
/// across threads without synchronization.
///
/// # Examples
/// ```rust
/// use schema_modes::{Mode, ModeConfig};
///
/// let config = ModeConfig::new(Mode::StrictSeo);
/// assert!(config.uses_identifier());
/// assert!(config.link_header_value().is_none());
///
/// let config = ModeConfig::from_tag("standards-header")?;
/// assert_eq!(
///     config.link_header_value().as_deref(),
///     Some("<https://w3id.org/structured-data-modes/profile/standards-header>; rel=\"profile\""),
/// );
/// # Ok::<(), schema_modes::ModeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeConfig {
    mode: Mode,
}

impl ModeConfig {
    /// Create a resolver for the given mode.
    ///
    /// Infallible: a [`Mode`] value is always a recognized mode, so the
    /// validation spec'd for string input has already happened at the parse
    /// boundary. Use [`ModeConfig::from_tag`] when starting from an untyped
    /// tag, or [`ModeConfig::default`] for the default `strict-seo` mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Create a resolver from a wire tag.
    ///
    /// # Errors
    /// Returns [`ModeError::InvalidMode`](crate::ModeError::InvalidMode) if
    /// `tag` is not a recognized mode tag. The failure is immediate; no
    /// accessor can be reached with an unvalidated mode.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let mode: Mode = tag.parse()?;
        tracing::debug!(%mode, "resolved output mode");
        Ok(Self::new(mode))
    }

    /// The mode this resolver was constructed with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the full configuration record for the current mode.
    pub fn config(&self) -> &'static ModeConfiguration {
        self.mode.configuration()
    }

    /// Whether the output includes an extra `additionalType` annotation.
    pub fn uses_additional_type(&self) -> bool {
        self.config().use_additional_type
    }

    /// Whether the output includes a `schemaVersion` marker.
    pub fn uses_schema_version(&self) -> bool {
        self.config().use_schema_version
    }

    /// Whether the output includes vendor/extension properties.
    pub fn uses_additional_property(&self) -> bool {
        self.config().use_additional_property
    }

    /// Whether the output includes a unique `identifier` field.
    pub fn uses_identifier(&self) -> bool {
        self.config().use_identifier
    }

    /// Whether the output emits the profile metadata block.
    pub fn includes_profile_metadata(&self) -> bool {
        self.config().include_profile_metadata
    }

    /// Whether LLM-oriented data goes into a separate block.
    pub fn separates_llm_block(&self) -> bool {
        self.config().separate_llm_block
    }

    /// Whether the output advertises a `rel="profile"` link relation.
    pub fn includes_rel_profile(&self) -> bool {
        self.config().include_rel_profile
    }

    /// Returns the conformance profile IRI for the current mode, or `None`
    /// when the mode does not declare one.
    pub fn rel_profile_value(&self) -> Option<&'static str> {
        self.mode.rel_profile_value()
    }

    /// Returns the HTTP `Link` header value advertising the conformance
    /// profile, formatted per RFC 8288, or `None` when the mode does not
    /// declare one.
    pub fn link_header_value(&self) -> Option<String> {
        self.rel_profile_value()
            .map(|iri| format!("<{iri}>; rel=\"profile\""))
    }
}
