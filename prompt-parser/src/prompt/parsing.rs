//! Prompt text → segment tree
//!
//! The parser is a single left-to-right character scan with one character of
//! lookahead, recursive only for nested weighted spans. It never fails:
//! anything that does not scan as a well-formed unit is accumulated into the
//! surrounding literal text, so arbitrary user input always parses.

pub(crate) mod balance;
pub mod parser;
pub mod units;

pub use parser::parse;
pub use units::{parse_inline_wildcard, parse_preset_text, ParsedUnit, UnitParseError};
