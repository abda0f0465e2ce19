//! Rule-based filtering.
//!
//! ```text
//! FilterSpec  = RuleGroup ∨ RuleGroup ∨ ...
//! RuleGroup   = Rule ∧ Rule ∧ ...
//! Rule        = action(condition(record[field], value))
//! ```

pub mod engine;
pub mod rule;

pub use engine::{FilterSpec, RuleGroup, apply_filter};
pub use rule::{Action, Condition, Rule, RuleError, RuleSpec, evaluate};
