//! Stable column sort and the header-click toggle.

use std::cmp::Ordering;

use crate::record::{Field, Record, parse_number};

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortSpec {
    pub field: Field,
    pub ascending: bool,
}

impl SortSpec {
    pub const fn ascending(field: Field) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    pub const fn descending(field: Field) -> Self {
        Self {
            field,
            ascending: false,
        }
    }

    /// Shorthand for [`sort_records`].
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        sort_records(records, self.field, self.ascending)
    }
}

/// Header-click state: clicking the active column flips the direction,
/// clicking another column switches to it ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<SortSpec>,
}

impl SortState {
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Start from an already chosen column, e.g. one read from configuration.
    pub const fn with(spec: SortSpec) -> Self {
        Self { active: Some(spec) }
    }

    pub const fn current(&self) -> Option<SortSpec> {
        self.active
    }

    pub fn click(&mut self, field: Field) -> SortSpec {
        let next = match self.active {
            Some(spec) if spec.field == field => SortSpec {
                field,
                ascending: !spec.ascending,
            },
            _ => SortSpec::ascending(field),
        };
        self.active = Some(next);
        next
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Compare two cell values.
///
/// Two numbers compare numerically, two texts compare as case-sensitive
/// strings. A number sorts before a text so that the order stays total on
/// columns with stray non-numeric cells.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Return `records` ordered by `field`.
///
/// The sort is stable in both directions: descending reverses the comparator,
/// not the output, so tied records keep their input order.
pub fn sort_records(records: &[Record], field: Field, ascending: bool) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_values(a.get(field), b.get(field));
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}
