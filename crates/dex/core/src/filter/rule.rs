//! Single filter rules and the rule evaluator.
//!
//! A rule arrives from the front end as a [`RuleSpec`], where every part is
//! optional because the user may still be building it. Only a spec that
//! [resolves](RuleSpec::resolve) into a complete [`Rule`] takes part in
//! filtering; [`evaluate`] then decides whether one record satisfies it.

use crate::error::{DexError, ErrorSeverity};
use crate::record::{Field, FieldKind, Record, parse_number};

/// Whether a matching record is kept or dropped by the rule.
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
pub enum Action {
    Include,
    Exclude,
}

/// What a rule checks on its field.
///
/// `Any`, `None` and `Equals` are categorical conditions; `GreaterThan`,
/// `LessThan` and `EqualTo` are numeric conditions compared against the rule
/// value.
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
#[strum(ascii_case_insensitive)]
pub enum Condition {
    #[strum(to_string = "any")]
    Any,
    #[strum(to_string = "none")]
    None,
    #[strum(to_string = "equals", serialize = "is", serialize = "=")]
    Equals,
    #[strum(to_string = "greater_than", serialize = "greaterthan", serialize = ">")]
    GreaterThan,
    #[strum(to_string = "less_than", serialize = "lessthan", serialize = "<")]
    LessThan,
    #[strum(to_string = "equal_to", serialize = "equalto", serialize = "==")]
    EqualTo,
}

impl Condition {
    /// The field kind this condition can be applied to.
    pub const fn field_kind(self) -> FieldKind {
        match self {
            Condition::Any | Condition::None | Condition::Equals => FieldKind::Categorical,
            Condition::GreaterThan | Condition::LessThan | Condition::EqualTo => {
                FieldKind::Numeric
            }
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self.field_kind(), FieldKind::Numeric)
    }
}

impl TryFrom<String> for Action {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl TryFrom<String> for Condition {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Reasons a [`RuleSpec`] cannot take part in filtering.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule has no action")]
    MissingAction,

    #[error("rule has no field")]
    MissingField,

    #[error("rule has no condition")]
    MissingCondition,

    #[error("condition {condition} needs a value")]
    MissingValue { condition: Condition },

    #[error("condition {condition} cannot be applied to {kind} field {field}")]
    ConditionMismatch {
        field: Field,
        kind: FieldKind,
        condition: Condition,
    },
}

impl DexError for RuleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAction => "missing_action",
            Self::MissingField => "missing_field",
            Self::MissingCondition => "missing_condition",
            Self::MissingValue { .. } => "missing_value",
            Self::ConditionMismatch { .. } => "condition_mismatch",
        }
    }
}

/// A possibly incomplete rule as composed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleSpec {
    pub action: Option<Action>,
    pub field: Option<Field>,
    pub condition: Option<Condition>,
    pub value: Option<String>,
}

impl RuleSpec {
    pub fn new(action: Action, field: Field, condition: Condition) -> Self {
        Self {
            action: Some(action),
            field: Some(field),
            condition: Some(condition),
            value: None,
        }
    }

    pub fn include(field: Field, condition: Condition) -> Self {
        Self::new(Action::Include, field, condition)
    }

    pub fn exclude(field: Field, condition: Condition) -> Self {
        Self::new(Action::Exclude, field, condition)
    }

    /// Attach the comparison value (builder pattern).
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Resolve into a complete rule.
    ///
    /// Numeric conditions do not require a value here: a missing or
    /// unparseable value makes the rule fail closed at evaluation instead.
    pub fn resolve(&self) -> Result<Rule, RuleError> {
        let action = self.action.ok_or(RuleError::MissingAction)?;
        let field = self.field.ok_or(RuleError::MissingField)?;
        let condition = self.condition.ok_or(RuleError::MissingCondition)?;
        Rule::new(action, field, condition, self.value.clone())
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        Self {
            action: Some(rule.action),
            field: Some(rule.field),
            condition: Some(rule.condition),
            value: rule.value,
        }
    }
}

/// A complete rule whose condition fits its field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    action: Action,
    field: Field,
    condition: Condition,
    value: Option<String>,
}

impl Rule {
    pub fn new(
        action: Action,
        field: Field,
        condition: Condition,
        value: Option<String>,
    ) -> Result<Self, RuleError> {
        if field.kind() != condition.field_kind() {
            return Err(RuleError::ConditionMismatch {
                field,
                kind: field.kind(),
                condition,
            });
        }
        if condition == Condition::Equals && value.is_none() {
            return Err(RuleError::MissingValue { condition });
        }
        Ok(Self {
            action,
            field,
            condition,
            value,
        })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Decide whether `record` satisfies `rule`.
///
/// - `Any` always matches; `None` matches an empty value; `Equals` compares
///   text case-insensitively.
/// - Numeric conditions parse both the record value and the rule value. If
///   either does not parse, the rule returns `false` whatever its action.
/// - `Exclude` negates the condition result.
pub fn evaluate(record: &Record, rule: &Rule) -> bool {
    let text = record.get(rule.field).trim();
    let matched = if rule.condition.is_numeric() {
        let (Some(actual), Some(expected)) =
            (parse_number(text), rule.value().and_then(parse_number))
        else {
            return false;
        };
        match rule.condition {
            Condition::GreaterThan => actual > expected,
            Condition::LessThan => actual < expected,
            _ => actual == expected,
        }
    } else {
        match rule.condition {
            Condition::Any => true,
            Condition::None => text.is_empty(),
            _ => rule
                .value()
                .is_some_and(|expected| text.eq_ignore_ascii_case(expected.trim())),
        }
    };

    match rule.action {
        Action::Include => matched,
        Action::Exclude => !matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BaseStats;

    fn pidgey() -> Record {
        Record::new("16", "Pidgey")
            .with_stats(BaseStats::new(40, 45, 40, 35, 35, 56))
            .with_types("Normal", "Flying")
            .with_flags(true, false, false)
    }

    fn rule(spec: RuleSpec) -> Rule {
        spec.resolve().unwrap()
    }

    #[test]
    fn categorical_conditions() {
        let record = pidgey();
        assert!(evaluate(&record, &rule(RuleSpec::include(Field::Type1, Condition::Any))));
        assert!(!evaluate(&record, &rule(RuleSpec::include(Field::Type2, Condition::None))));
        assert!(evaluate(
            &record,
            &rule(RuleSpec::include(Field::Type2, Condition::Equals).value("FLYING"))
        ));
        assert!(!evaluate(
            &record,
            &rule(RuleSpec::include(Field::Type1, Condition::Equals).value("Flying"))
        ));
    }

    #[test]
    fn none_matches_empty_second_type_only() {
        let mono = Record::new("19", "Rattata").with_types("Normal", "");
        let none = rule(RuleSpec::include(Field::Type2, Condition::None));
        assert!(evaluate(&mono, &none));

        // The literal text "None" is an ordinary type name, not an empty slot.
        let literal = Record::new("0", "Odd").with_types("Normal", "None");
        assert!(!evaluate(&literal, &none));
    }

    #[test]
    fn flags_match_as_categorical_text() {
        let first_only = rule(RuleSpec::include(Field::FirstStage, Condition::Equals).value("true"));
        let hide_legendary =
            rule(RuleSpec::exclude(Field::Legendary, Condition::Equals).value("True"));
        assert!(evaluate(&pidgey(), &first_only));
        assert!(evaluate(&pidgey(), &hide_legendary));
    }

    #[test]
    fn numeric_conditions() {
        let record = pidgey();
        let speed_over = |value: &str| {
            rule(RuleSpec::include(Field::Speed, Condition::GreaterThan).value(value))
        };
        assert!(evaluate(&record, &speed_over("55")));
        assert!(!evaluate(&record, &speed_over("56")));
        assert!(evaluate(
            &record,
            &rule(RuleSpec::include(Field::Bst, Condition::EqualTo).value("251"))
        ));
        assert!(evaluate(
            &record,
            &rule(RuleSpec::include(Field::Hp, Condition::LessThan).value("40.5"))
        ));
    }

    #[test]
    fn exclude_negates_condition() {
        let record = pidgey();
        let flying = rule(RuleSpec::exclude(Field::Type2, Condition::Equals).value("Flying"));
        let fast = rule(RuleSpec::exclude(Field::Speed, Condition::GreaterThan).value("100"));
        assert!(!evaluate(&record, &flying));
        assert!(evaluate(&record, &fast));
    }

    #[test]
    fn unparseable_numbers_fail_closed_for_both_actions() {
        let record = pidgey().with(Field::Attack, "??");
        for spec in [
            RuleSpec::include(Field::Attack, Condition::GreaterThan).value("10"),
            RuleSpec::exclude(Field::Attack, Condition::GreaterThan).value("10"),
            RuleSpec::include(Field::Hp, Condition::LessThan).value("abc"),
            RuleSpec::exclude(Field::Hp, Condition::LessThan).value("NaN"),
            RuleSpec::exclude(Field::Hp, Condition::EqualTo),
        ] {
            assert!(!evaluate(&record, &rule(spec)));
        }
    }

    #[test]
    fn resolve_reports_missing_parts() {
        let mut spec = RuleSpec::default();
        assert_eq!(spec.resolve(), Err(RuleError::MissingAction));
        spec.action = Some(Action::Include);
        assert_eq!(spec.resolve(), Err(RuleError::MissingField));
        spec.field = Some(Field::Type1);
        assert_eq!(spec.resolve(), Err(RuleError::MissingCondition));
        spec.condition = Some(Condition::Equals);
        assert_eq!(
            spec.resolve(),
            Err(RuleError::MissingValue {
                condition: Condition::Equals
            })
        );
    }

    #[test]
    fn conditions_must_fit_the_field_kind() {
        let err = RuleSpec::include(Field::Type1, Condition::GreaterThan)
            .value("3")
            .resolve()
            .unwrap_err();
        assert_eq!(err.error_code(), "condition_mismatch");

        assert!(RuleSpec::include(Field::Name, Condition::Any).resolve().is_err());
        assert!(RuleSpec::include(Field::Hp, Condition::None).resolve().is_err());
    }

    #[test]
    fn condition_names_parse_loosely() {
        assert_eq!("GreaterThan".parse::<Condition>().unwrap(), Condition::GreaterThan);
        assert_eq!("greater_than".parse::<Condition>().unwrap(), Condition::GreaterThan);
        assert_eq!("<".parse::<Condition>().unwrap(), Condition::LessThan);
        assert_eq!("EXCLUDE".parse::<Action>().unwrap(), Action::Exclude);
        assert_eq!(Condition::EqualTo.to_string(), "equal_to");
    }

    #[test]
    fn numeric_conditions_are_the_numeric_kind() {
        for condition in [Condition::GreaterThan, Condition::LessThan, Condition::EqualTo] {
            assert!(condition.is_numeric());
        }
        for condition in [Condition::Any, Condition::None, Condition::Equals] {
            assert!(!condition.is_numeric());
        }
    }
}
