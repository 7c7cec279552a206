//! Property tests for asset id normalization.

use proptest::prelude::*;

use hearth::AssetId;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = AssetId::normalize(&s);
    }

    /// PROPERTY: Normalizing a normalized id is a no-op.
    #[test]
    fn property_normalize_is_idempotent(s in "[A-Za-z0-9./\\\\_-]{0,64}") {
        if let Some(id) = AssetId::normalize(&s) {
            let again = AssetId::normalize(id.as_str());
            prop_assert_eq!(again, Some(id));
        }
    }

    /// PROPERTY: Normalized ids are lowercase with no empty or traversal segments.
    #[test]
    fn property_normalized_shape(s in "[A-Za-z0-9./\\\\_-]{0,64}") {
        if let Some(id) = AssetId::normalize(&s) {
            prop_assert_eq!(id.as_str().to_lowercase(), id.as_str());
            for seg in id.segments() {
                prop_assert!(!seg.is_empty());
                prop_assert!(seg != "." && seg != "..");
                prop_assert!(!seg.contains('\\'));
            }
        }
    }

    /// PROPERTY: Separator style, doubled separators, `./` prefixes and case
    /// never change identity.
    #[test]
    fn property_separator_and_case_insensitive(parts in segments()) {
        let canonical = AssetId::normalize(&parts.join("/")).unwrap();

        let backslashed = parts.join("\\");
        let doubled = format!("./{}", parts.join("//"));
        let shouted = parts.join("/").to_uppercase();

        prop_assert_eq!(AssetId::normalize(&backslashed).unwrap(), canonical.clone());
        prop_assert_eq!(AssetId::normalize(&doubled).unwrap(), canonical.clone());
        prop_assert_eq!(AssetId::normalize(&shouted).unwrap(), canonical);
    }

    /// PROPERTY: Traversal segments can never escape into a parent.
    #[test]
    fn property_traversal_segments_are_dropped(parts in segments()) {
        let sneaky = format!("../../{}/..", parts.join("/../"));
        if let Some(id) = AssetId::normalize(&sneaky) {
            prop_assert!(id.segments().all(|seg| seg != ".."));
        }
    }
}
