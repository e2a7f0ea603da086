//! Keyword Match Scoring — deterministic overlap score between a tailored CV and a JD.
//!
//! Pipeline: `keywords::extract` → `ranking::rank` → `matching::score`.
//! Everything here is pure and synchronous; handlers call it inline.

pub mod keywords;
pub mod matching;
pub mod ranking;

pub use matching::{score, MatchResult};
