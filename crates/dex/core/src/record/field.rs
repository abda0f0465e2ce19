//! Catalog columns and their semantic kinds.

/// One column of the catalog.
///
/// Declaration order is the display order of the table, so `Ord` on `Field`
/// doubles as column order. Text names match the catalog header row and parse
/// case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
#[strum(ascii_case_insensitive)]
pub enum Field {
    #[strum(to_string = "Number")]
    Number,
    #[strum(to_string = "Name")]
    Name,
    #[strum(to_string = "HP")]
    Hp,
    #[strum(to_string = "Attack")]
    Attack,
    #[strum(to_string = "Defense")]
    Defense,
    #[strum(to_string = "Special Attack")]
    SpecialAttack,
    #[strum(to_string = "Special Defense")]
    SpecialDefense,
    #[strum(to_string = "Speed")]
    Speed,
    #[strum(to_string = "Type 1")]
    Type1,
    #[strum(to_string = "Type 2")]
    Type2,
    #[strum(to_string = "First Stage")]
    FirstStage,
    #[strum(to_string = "Final Stage")]
    FinalStage,
    #[strum(to_string = "Legendary")]
    Legendary,
    #[strum(to_string = "BST")]
    Bst,
    #[strum(to_string = "Head Stat Total")]
    HeadStatTotal,
    #[strum(to_string = "Body Stat Total")]
    BodyStatTotal,
    #[strum(to_string = "Stat Balance")]
    StatBalance,
    #[strum(to_string = "Head Stat Balance")]
    HeadStatBalance,
    #[strum(to_string = "Body Stat Balance")]
    BodyStatBalance,
}

/// Semantic type of a field, which decides the conditions a rule may use on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// Number, Name
    Identifier,
    /// Non-negative integer stats and totals
    Numeric,
    /// Types and the "True"/"False" flags
    Categorical,
}

impl Field {
    /// Stats contributed by the head half of a fusion.
    pub const HEAD_STATS: [Field; 3] = [Field::Attack, Field::Defense, Field::Speed];

    /// Stats contributed by the body half of a fusion.
    pub const BODY_STATS: [Field; 3] = [Field::Hp, Field::SpecialAttack, Field::SpecialDefense];

    /// The six base stats in column order.
    pub const BASE_STATS: [Field; 6] = [
        Field::Hp,
        Field::Attack,
        Field::Defense,
        Field::SpecialAttack,
        Field::SpecialDefense,
        Field::Speed,
    ];

    /// Flags stored as the literal strings "True"/"False".
    pub const FLAGS: [Field; 3] = [Field::FirstStage, Field::FinalStage, Field::Legendary];

    /// Precomputed balance ratios. Only base rows carry values; they cannot be
    /// derived from stats, so fused rows leave them empty.
    pub const BALANCES: [Field; 3] = [
        Field::StatBalance,
        Field::HeadStatBalance,
        Field::BodyStatBalance,
    ];

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Number | Field::Name => FieldKind::Identifier,
            Field::Hp
            | Field::Attack
            | Field::Defense
            | Field::SpecialAttack
            | Field::SpecialDefense
            | Field::Speed
            | Field::Bst
            | Field::HeadStatTotal
            | Field::BodyStatTotal
            | Field::StatBalance
            | Field::HeadStatBalance
            | Field::BodyStatBalance => FieldKind::Numeric,
            Field::Type1
            | Field::Type2
            | Field::FirstStage
            | Field::FinalStage
            | Field::Legendary => FieldKind::Categorical,
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self.kind(), FieldKind::Numeric)
    }

    pub const fn is_categorical(self) -> bool {
        matches!(self.kind(), FieldKind::Categorical)
    }
}

impl TryFrom<String> for Field {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}
