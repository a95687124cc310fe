//! Rule-checking layer over the scoring core
//!
//! The core trusts its caller completely and never fails. This crate adds
//! the hardening boundary for embedders that cannot extend that trust: each
//! delivery is validated before it reaches the core, so illegal input fails
//! fast with a descriptive error instead of silently corrupting a
//! scorecard. Whole-sequence replay helpers live here too.

pub mod checked;
pub mod replay;

pub use checked::{CheckedGame, RuleError};
pub use replay::{replay, replay_checked, ReplayError};
