//! Fusion calculator.
//!
//! A fusion blends two records into a synthetic hybrid. One contributor
//! supplies the head (Attack, Defense, Speed, primary type), the other the
//! body (HP, Special Attack, Special Defense, secondary type). The user picks
//! a donor and the role it plays; every record of the working set is then
//! fused against that donor.
//!
//! Fusion never mutates its inputs and always produces a record with the same
//! field set as a base record, so fused collections can be filtered and
//! sorted exactly like the catalog.

pub mod stats;
pub mod types;

use crate::error::{DexError, ErrorSeverity};
use crate::record::{Field, Record, RecordKey, RecordStore, StatError};

/// Which half of the fusion the donor supplies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Head,
    Body,
}

impl TryFrom<String> for Role {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Errors surfaced while fusing records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FusionError {
    #[error("unknown donor {key}")]
    UnknownDonor { key: RecordKey },

    #[error(transparent)]
    InvalidStat(#[from] StatError),
}

impl DexError for FusionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownDonor { .. } => ErrorSeverity::Validation,
            Self::InvalidStat(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDonor { .. } => "unknown_donor",
            Self::InvalidStat(error) => error.error_code(),
        }
    }
}

/// The user's fusion selection. Missing either part means "no fusion".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FusionRequest {
    pub donor: Option<RecordKey>,
    pub role: Option<Role>,
}

impl FusionRequest {
    pub fn new(donor: impl Into<RecordKey>, role: Role) -> Self {
        Self {
            donor: Some(donor.into()),
            role: Some(role),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.donor.is_some() && self.role.is_some()
    }

    /// Look the donor up in the base catalog.
    ///
    /// Returns `Ok(None)` for an incomplete request and
    /// [`FusionError::UnknownDonor`] when the key is not in the store.
    pub fn lookup<'a>(
        &self,
        store: &'a RecordStore,
    ) -> Result<Option<(&'a Record, Role)>, FusionError> {
        let (Some(key), Some(role)) = (&self.donor, self.role) else {
            return Ok(None);
        };
        let donor = store
            .get(key)
            .ok_or_else(|| FusionError::UnknownDonor { key: key.clone() })?;
        Ok(Some((donor, role)))
    }
}

/// Fuse `target` with `donor`, the donor playing `role`.
///
/// Stats follow [`stats::blend`], types follow [`types::derive_types`]. The
/// result is numbered `"{head}.{body}"` and named `"{head}/{body}"`; it is a
/// first (final) stage only if both contributors are, and legendary if either
/// is. Balance columns the contributors carry are kept but left empty.
pub fn fuse(target: &Record, donor: &Record, role: Role) -> Result<Record, FusionError> {
    let (head, body) = match role {
        Role::Head => (donor, target),
        Role::Body => (target, donor),
    };

    let fused_stats = stats::blend(&head.base_stats()?, &body.base_stats()?);
    let (type1, type2) = types::derive_types(head, body);

    let mut fused = Record::new(
        format!("{}.{}", head.number(), body.number()),
        format!("{}/{}", head.name(), body.name()),
    )
    .with_stats(fused_stats)
    .with_types(type1, type2)
    .with_flags(
        head.flag(Field::FirstStage) && body.flag(Field::FirstStage),
        head.flag(Field::FinalStage) && body.flag(Field::FinalStage),
        head.flag(Field::Legendary) || body.flag(Field::Legendary),
    );

    for field in Field::BALANCES {
        if head.contains(field) || body.contains(field) {
            fused.insert(field, "");
        }
    }
    Ok(fused)
}

/// Fuse every record of `records` against one donor.
///
/// Produces a collection of the same size and order. The first failure aborts
/// the whole map so a collection is never half fused.
pub fn fuse_all(records: &[Record], donor: &Record, role: Role) -> Result<Vec<Record>, FusionError> {
    let fused = records
        .iter()
        .map(|target| fuse(target, donor, role))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        donor = donor.number(),
        %role,
        count = fused.len(),
        "Fused working set"
    );
    Ok(fused)
}
