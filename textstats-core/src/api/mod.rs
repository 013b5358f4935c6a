//! Public analysis API
//!
//! [`TextAnalyzer`] wires the rule tables, estimators, dictionary and
//! common-word list together and runs one pass per [`Input`], producing a
//! [`Report`].

mod analyzer;
mod config;
mod input;
mod output;

pub use analyzer::TextAnalyzer;
pub use config::{defaults, Config, ConfigBuilder};
pub use input::Input;
pub use output::{Report, ReportMetadata};
