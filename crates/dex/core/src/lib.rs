//! Deterministic creature-catalog logic.
//!
//! `dex-core` holds the pieces of the explorer that carry actual rules:
//! the rule-based filter engine, the stable sort, the fusion calculator and the
//! pipeline that composes them. Every operation is a pure transformation of an
//! immutable [`RecordStore`]; loading files and drawing tables belong to the
//! crates built on top of this one.
pub mod error;
pub mod filter;
pub mod fusion;
pub mod pipeline;
pub mod record;
pub mod sort;

pub use error::{DexError, ErrorSeverity};
pub use filter::{
    Action, Condition, FilterSpec, Rule, RuleError, RuleGroup, RuleSpec, apply_filter, evaluate,
};
pub use fusion::{FusionError, FusionRequest, Role, fuse, fuse_all};
pub use pipeline::{Explorer, render};
pub use record::{
    BaseStats, Field, FieldKind, Record, RecordKey, RecordStore, StatError, StoreError,
};
pub use sort::{SortSpec, SortState, compare_values, sort_records};
