//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a version with neither an epoch nor a git marker
    pub fn plain_version() -> impl Strategy<Value = String> {
        "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}(-r[0-9])?"
    }

    /// Generate a version as bitbake may report it
    pub fn bitbake_version() -> impl Strategy<Value = String> {
        prop_oneof![
            plain_version(),
            (0u32..10, plain_version()).prop_map(|(epoch, v)| format!("{epoch}:{v}")),
            "[0-9]{4}\\.[0-9]{2}".prop_map(|v| format!("{v}+gitAUTOINC+0123abcd")),
        ]
    }

    /// Generate a SoC token (e.g. "mx6q")
    pub fn soc_token() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("mx28".to_string()),
            Just("mx5".to_string()),
            Just("mx6".to_string()),
            Just("mx6q".to_string()),
            Just("mx6dl".to_string()),
            Just("vf60".to_string()),
        ]
    }

    /// Generate a rectangular table: header plus rows of the same arity
    pub fn table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
        (1usize..5).prop_flat_map(|columns| {
            (
                prop::collection::vec("[A-Za-z ]{1,12}", columns),
                prop::collection::vec(prop::collection::vec("[a-z0-9.:+-]{0,16}", columns), 0..8),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_plain_version_generator(version in plain_version()) {
            prop_assert!(!version.is_empty());
            prop_assert!(!version.contains(':'));
            prop_assert!(!version.contains("gitAUTOINC"));
        }

        #[test]
        fn test_bitbake_version_generator(version in bitbake_version()) {
            prop_assert!(!version.is_empty());
        }

        #[test]
        fn test_table_generator((header, rows) in table()) {
            prop_assert!(!header.is_empty());
            for row in rows {
                prop_assert_eq!(row.len(), header.len());
            }
        }
    }
}
