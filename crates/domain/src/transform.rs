//! Rule language for rewriting A record targets by address range.
//!
//! A rule set is a `;`-separated list of rules, each `low~high~new_base~targets` where exactly
//! one of `new_base` or the comma-separated `targets` list is set. The first rule whose
//! inclusive range contains an address decides its rewrite.

mod rule;
mod rule_set;

pub use rule::{Rewrite, TransformRule};
pub use rule_set::TransformRuleSet;
