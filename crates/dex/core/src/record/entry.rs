//! A single catalog row.

use std::collections::BTreeMap;
use std::fmt;

use super::{BaseStats, Field, StatError};

/// Literal text the catalog uses for a set flag.
pub const TRUE: &str = "True";
/// Literal text the catalog uses for a cleared flag.
pub const FALSE: &str = "False";

/// Unique identity of a record: its `Number` text.
///
/// Base records use the catalog number ("25"); fused records use the
/// composite "head.body" form ("25.1"), which never collides with a base key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One creature's full field set.
///
/// Values are kept as the catalog text; typed access goes through explicit,
/// fallible parses ([`Record::base_stats`], [`Record::numeric`]). Missing
/// fields read as the empty string, which is also how "no second type" is
/// stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    values: BTreeMap<Field, String>,
}

impl Record {
    /// Create a record holding only its identifiers.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default()
            .with(Field::Number, number)
            .with(Field::Name, name)
    }

    /// Set one field (builder pattern).
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Write the six stats and the three totals derived from them.
    #[must_use]
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.set_stats(stats);
        self
    }

    /// Set both types. Pass `""` for a creature without a second type.
    #[must_use]
    pub fn with_types(self, type1: impl Into<String>, type2: impl Into<String>) -> Self {
        self.with(Field::Type1, type1).with(Field::Type2, type2)
    }

    /// Set the three evolution/legendary flags.
    #[must_use]
    pub fn with_flags(self, first_stage: bool, final_stage: bool, legendary: bool) -> Self {
        Field::FLAGS
            .into_iter()
            .zip([first_stage, final_stage, legendary])
            .fold(self, |record, (field, value)| record.with(field, flag_text(value)))
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn set_stats(&mut self, stats: BaseStats) {
        for field in Field::BASE_STATS {
            if let Some(value) = stats.get(field) {
                self.insert(field, value.to_string());
            }
        }
        self.insert(Field::Bst, stats.bst().to_string());
        self.insert(Field::HeadStatTotal, stats.head_total().to_string());
        self.insert(Field::BodyStatTotal, stats.body_total().to_string());
    }

    /// Raw text of a field; `""` when the field is absent.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Present fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.number())
    }

    pub fn number(&self) -> &str {
        self.get(Field::Number)
    }

    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    pub fn type1(&self) -> &str {
        self.get(Field::Type1)
    }

    pub fn type2(&self) -> &str {
        self.get(Field::Type2)
    }

    /// True only for the literal flag text "True".
    pub fn flag(&self, field: Field) -> bool {
        self.get(field) == TRUE
    }

    /// Parse a field as a finite number.
    ///
    /// Returns `None` for empty text, non-numeric text, and `NaN`/infinite
    /// spellings, so callers can fail closed.
    pub fn numeric(&self, field: Field) -> Option<f64> {
        parse_number(self.get(field))
    }

    /// Parse the six base stats as non-negative integers.
    pub fn base_stats(&self) -> Result<BaseStats, StatError> {
        let mut stats = BaseStats::default();
        for field in Field::BASE_STATS {
            let text = self.get(field);
            let value = text.trim().parse::<u32>().map_err(|_| StatError {
                key: self.key(),
                field,
                value: text.to_string(),
            })?;
            stats.set(field, value);
        }
        Ok(stats)
    }

    /// Check that the stored totals agree with the stored stats.
    ///
    /// Returns `false` when any stat or total fails to parse.
    pub fn totals_consistent(&self) -> bool {
        let Ok(stats) = self.base_stats() else {
            return false;
        };
        [Field::Bst, Field::HeadStatTotal, Field::BodyStatTotal]
            .into_iter()
            .all(|field| self.get(field).trim().parse::<u64>().ok() == stats.numeric(field))
    }
}

/// Parse text as a finite `f64`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub(crate) const fn flag_text(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}
