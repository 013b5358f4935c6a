//! Embedded rule tables
//!
//! The English tables ship inside the binary and are compiled once per
//! process on first access.

use super::tables::RuleTables;
use crate::error::{CoreError, CoreResult};
use std::sync::{Arc, OnceLock};

static EMBEDDED_ENGLISH: OnceLock<Result<Arc<RuleTables>, String>> = OnceLock::new();

/// Source of the embedded English rule tables
pub const ENGLISH_RULES_TOML: &str = include_str!("../../configs/rules/english.toml");

/// Shared English rule tables
pub fn english_rules() -> CoreResult<Arc<RuleTables>> {
    EMBEDDED_ENGLISH
        .get_or_init(|| {
            RuleTables::from_toml_str(ENGLISH_RULES_TOML)
                .map(Arc::new)
                .map_err(|e| format!("Failed to load embedded English rules: {e}"))
        })
        .clone()
        .map_err(CoreError::Configuration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_rules_load() {
        let rules = english_rules().expect("embedded rules should compile");
        assert_eq!(rules.code(), "en");
    }

    #[test]
    fn test_english_rules_shared() {
        let first = english_rules().unwrap();
        let second = english_rules().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
