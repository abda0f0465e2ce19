//! Typed view over the six base stats of a record.
//!
//! The catalog delivers every stat as text. [`BaseStats`] is the parsed form
//! used by the fusion calculator; the totals are always computed from it and
//! never read back from the record.

use super::{Field, RecordKey};
use crate::error::{DexError, ErrorSeverity};

/// The six base stats of a creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub const fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Value of one base stat. Returns `None` for fields that are not base stats.
    pub const fn get(&self, field: Field) -> Option<u32> {
        match field {
            Field::Hp => Some(self.hp),
            Field::Attack => Some(self.attack),
            Field::Defense => Some(self.defense),
            Field::SpecialAttack => Some(self.special_attack),
            Field::SpecialDefense => Some(self.special_defense),
            Field::Speed => Some(self.speed),
            _ => None,
        }
    }

    /// Overwrite one base stat. Fields that are not base stats are ignored.
    pub fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::Hp => self.hp = value,
            Field::Attack => self.attack = value,
            Field::Defense => self.defense = value,
            Field::SpecialAttack => self.special_attack = value,
            Field::SpecialDefense => self.special_defense = value,
            Field::Speed => self.speed = value,
            _ => {}
        }
    }

    // Totals are widened to u64: six u32 stats always fit.

    /// Attack + Defense + Speed
    pub const fn head_total(&self) -> u64 {
        self.attack as u64 + self.defense as u64 + self.speed as u64
    }

    /// HP + Special Attack + Special Defense
    pub const fn body_total(&self) -> u64 {
        self.hp as u64 + self.special_attack as u64 + self.special_defense as u64
    }

    /// Base stat total: sum of all six stats.
    pub const fn bst(&self) -> u64 {
        self.head_total() + self.body_total()
    }

    /// Value of a base stat or one of the three derived totals.
    pub const fn numeric(&self, field: Field) -> Option<u64> {
        match field {
            Field::Bst => Some(self.bst()),
            Field::HeadStatTotal => Some(self.head_total()),
            Field::BodyStatTotal => Some(self.body_total()),
            _ => match self.get(field) {
                Some(value) => Some(value as u64),
                None => None,
            },
        }
    }
}

/// A stat cell that does not hold a non-negative integer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("record {key}: {field} value {value:?} is not a non-negative integer")]
pub struct StatError {
    pub key: RecordKey,
    pub field: Field,
    pub value: String,
}

impl DexError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Data
    }

    fn error_code(&self) -> &'static str {
        "invalid_stat"
    }
}
