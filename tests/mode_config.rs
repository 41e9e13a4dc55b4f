use schema_modes::{Mode, ModeConfig, ModeError};

#[test]
fn test_default_matches_explicit_default_mode() {
    let implicit = ModeConfig::default();
    let explicit = ModeConfig::new(Mode::StrictSeo);

    assert_eq!(implicit.mode(), explicit.mode());
    assert_eq!(implicit.config(), explicit.config());
    assert_eq!(implicit, ModeConfig::from_tag("strict-seo").unwrap());
}

#[test]
fn test_from_tag_rejects_unknown_modes() {
    for tag in ["bogus-mode", "strict_seo", "STRICT-SEO", "", "standards-header "] {
        let err = ModeConfig::from_tag(tag).unwrap_err();
        assert_eq!(
            err,
            ModeError::InvalidMode {
                mode: tag.to_string()
            },
            "tag {tag:?} should be rejected"
        );
    }
}

#[test]
fn test_resolution_is_deterministic() {
    for mode in Mode::ALL {
        let a = ModeConfig::new(mode);
        let b = ModeConfig::from_tag(mode.as_str()).unwrap();
        assert_eq!(a.config(), b.config());
        assert_eq!(a.rel_profile_value(), b.rel_profile_value());
        assert_eq!(a.link_header_value(), b.link_header_value());

        // Repeated reads of the same instance never change.
        assert_eq!(a.config(), a.config());
        assert_eq!(a.uses_identifier(), a.uses_identifier());
    }
}

#[test]
fn test_strict_seo_is_fully_inline() {
    let config = ModeConfig::from_tag("strict-seo").unwrap();
    assert!(config.uses_additional_type());
    assert!(config.uses_schema_version());
    assert!(config.uses_identifier());
    assert!(!config.separates_llm_block());
    assert!(config.rel_profile_value().is_none());
    assert!(config.link_header_value().is_none());
}

#[test]
fn test_split_channels_separates_llm_block() {
    let config = ModeConfig::from_tag("split-channels").unwrap();
    assert!(config.separates_llm_block());
    assert!(config.includes_profile_metadata());
    assert!(config.link_header_value().is_none());
}

#[test]
fn test_standards_header_advertises_profile_link() {
    let config = ModeConfig::from_tag("standards-header").unwrap();
    assert!(config.includes_rel_profile());
    assert!(!config.includes_profile_metadata());

    let iri = config.rel_profile_value().expect("profile IRI");
    let header = config.link_header_value().expect("Link header");
    assert_eq!(header, format!("<{iri}>; rel=\"profile\""));
    assert!(header.ends_with("; rel=\"profile\""));
}

#[test]
fn test_mode_survives_config_round_trip() {
    let json = serde_json::to_string(&Mode::SplitChannels).unwrap();
    let mode: Mode = serde_json::from_str(&json).unwrap();
    assert_eq!(ModeConfig::new(mode), ModeConfig::new(Mode::SplitChannels));
}

#[test]
fn test_configuration_serializes_for_diagnostics() {
    let value = serde_json::to_value(ModeConfig::new(Mode::StandardsHeader).config()).unwrap();
    assert_eq!(value["include_rel_profile"], true);
    assert_eq!(value["use_schema_version"], false);
}
