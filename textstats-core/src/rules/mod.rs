//! Syllable rule tables
//!
//! Ordered pattern lists, the problem-word exception table and the
//! statistical tie-break table. Tables are defined in TOML, compiled into
//! [`RuleTables`] once and shared read-only between analyses.

pub mod config;
pub mod loader;
pub mod tables;

pub use config::RulesConfig;
pub use loader::{english_rules, ENGLISH_RULES_TOML};
pub use tables::RuleTables;
