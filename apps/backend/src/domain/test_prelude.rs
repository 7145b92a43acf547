//! Shared proptest configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Default case count when `PROPTEST_CASES` is not set.
pub const DEFAULT_CASES: u32 = 64;

/// `ProptestConfig::default()` already honours `PROPTEST_CASES`; only its
/// fallback of 256 cases is lowered here.
pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig {
        failure_persistence: None,
        ..ProptestConfig::default()
    };
    if std::env::var_os("PROPTEST_CASES").is_some() {
        base
    } else {
        ProptestConfig {
            cases: DEFAULT_CASES,
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_the_default_case_count() {
        let config = proptest_config();
        if std::env::var_os("PROPTEST_CASES").is_none() {
            assert_eq!(config.cases, DEFAULT_CASES);
        }
        assert!(config.failure_persistence.is_none());
    }
}
