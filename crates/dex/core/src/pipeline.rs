//! Pipeline coordinator: fusion, filter and sort composed into the rows a
//! front end displays.
//!
//! # Evaluation order
//!
//! ```text
//! base ──(fusion request?)──▶ fused working set ──▶ filter ──▶ sort ──▶ rows
//! ```
//!
//! Rules are matched against the values that end up on screen: with an active
//! fusion request a `BST > 500` rule looks at each row's fused BST, never at
//! the base BST it was derived from. Fusion is a 1:1 map that keeps catalog
//! order, so the filter still scans candidates in base order and its
//! first-seen group ordering is unaffected. Sorting runs last so the displayed
//! order matches the displayed values.
//!
//! Nothing here is fatal. A fusion request that cannot be honored is logged
//! and the render continues unfused.

use std::borrow::Cow;

use crate::error::DexError;
use crate::filter::{FilterSpec, apply_filter};
use crate::fusion::{FusionError, FusionRequest, fuse_all};
use crate::record::{Field, Record, RecordStore};
use crate::sort::{SortSpec, SortState};

/// Compute the displayed rows for one request.
pub fn render(
    store: &RecordStore,
    filter: &FilterSpec,
    fusion: &FusionRequest,
    sort: Option<SortSpec>,
) -> Vec<Record> {
    let working = match fused_working_set(store, fusion) {
        Ok(Some(fused)) => Cow::Owned(fused),
        Ok(None) => Cow::Borrowed(store.records()),
        Err(error) => {
            tracing::warn!(
                severity = error.severity().as_str(),
                code = error.error_code(),
                "Fusion not applied: {}",
                error
            );
            Cow::Borrowed(store.records())
        }
    };
    let fused = matches!(working, Cow::Owned(_));

    let kept = apply_filter(&working, filter);
    let rows = match sort {
        Some(spec) => spec.apply(&kept),
        None => kept,
    };

    tracing::debug!(
        base = store.len(),
        rows = rows.len(),
        fused,
        sort = ?sort,
        "Rendered rows"
    );
    rows
}

fn fused_working_set(
    store: &RecordStore,
    fusion: &FusionRequest,
) -> Result<Option<Vec<Record>>, FusionError> {
    match fusion.lookup(store)? {
        Some((donor, role)) => fuse_all(store.records(), donor, role).map(Some),
        None => Ok(None),
    }
}

/// A loaded catalog plus the header-click sort state of one session.
#[derive(Clone, Debug, Default)]
pub struct Explorer {
    store: RecordStore,
    sort: SortState,
}

impl Explorer {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            sort: SortState::new(),
        }
    }

    /// Start with a column already sorted (builder pattern).
    #[must_use]
    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.sort = SortState::with(spec);
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort.current()
    }

    /// Apply a header click and return the resulting sort.
    pub fn click_header(&mut self, field: Field) -> SortSpec {
        self.sort.click(field)
    }

    pub fn render(&self, filter: &FilterSpec, fusion: &FusionRequest) -> Vec<Record> {
        render(&self.store, filter, fusion, self.sort.current())
    }
}
