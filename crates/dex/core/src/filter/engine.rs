//! Rule groups, filter specs, and the filter engine.
//!
//! Rules inside a [`RuleGroup`] combine with AND; groups inside a
//! [`FilterSpec`] combine with OR. Incomplete rules are dropped before
//! evaluation, and a spec with no usable rule keeps every record.

use std::collections::HashSet;

use super::rule::{Condition, Rule, RuleSpec, evaluate};
use crate::error::DexError;
use crate::record::{Field, Record};

/// A conjunctive cluster of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleGroup {
    rules: Vec<RuleSpec>,
}

impl RuleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn rule(mut self, rule: impl Into<RuleSpec>) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: impl Into<RuleSpec>) {
        self.rules.push(rule.into());
    }

    /// Inclusive `[min, max]` range on a numeric field.
    ///
    /// Expressed as two exclude rules (`LessThan min`, `GreaterThan max`) so
    /// the bounds themselves are kept.
    pub fn stat_range(field: Field, min: impl ToString, max: impl ToString) -> Self {
        Self::new()
            .rule(RuleSpec::exclude(field, Condition::LessThan).value(min.to_string()))
            .rule(RuleSpec::exclude(field, Condition::GreaterThan).value(max.to_string()))
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Complete rules of the group; incomplete ones are logged and skipped.
    pub fn resolve(&self) -> Vec<Rule> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(index, spec)| match spec.resolve() {
                Ok(rule) => Some(rule),
                Err(error) => {
                    tracing::debug!(
                        rule = index,
                        code = error.error_code(),
                        "Ignoring rule: {}",
                        error
                    );
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<RuleSpec> for RuleGroup {
    fn from_iter<I: IntoIterator<Item = RuleSpec>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// A disjunctive collection of rule groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilterSpec {
    groups: Vec<RuleGroup>,
}

impl FilterSpec {
    /// A spec with no groups: keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group (builder pattern).
    #[must_use]
    pub fn group(mut self, group: RuleGroup) -> Self {
        self.push(group);
        self
    }

    pub fn push(&mut self, group: RuleGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    /// Resolved groups that still hold at least one complete rule.
    fn active_groups(&self) -> Vec<Vec<Rule>> {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(index, group)| {
                let rules = group.resolve();
                if rules.is_empty() {
                    tracing::debug!(group = index, "Skipping group without complete rules");
                    None
                } else {
                    Some(rules)
                }
            })
            .collect()
    }

    /// Shorthand for [`apply_filter`].
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        apply_filter(records, self)
    }
}

impl FromIterator<RuleGroup> for FilterSpec {
    fn from_iter<I: IntoIterator<Item = RuleGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// Keep the records that satisfy every rule of at least one group.
///
/// Groups are scanned in declaration order and each scan walks `records` in
/// order, so the output lists the first group's matches first, followed by
/// the unseen matches of the next group, and so on. A record appears at most
/// once (by key). With no active group the input is returned unchanged.
pub fn apply_filter(records: &[Record], spec: &FilterSpec) -> Vec<Record> {
    let groups = spec.active_groups();
    if groups.is_empty() {
        return records.to_vec();
    }

    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for rules in &groups {
        for record in records {
            if rules.iter().all(|rule| evaluate(record, rule)) && seen.insert(record.key()) {
                kept.push(record.clone());
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Action;
    use crate::record::BaseStats;

    fn dex() -> Vec<Record> {
        vec![
            Record::new("1", "Bulbasaur")
                .with_stats(BaseStats::new(45, 49, 49, 65, 65, 45))
                .with_types("Grass", "Poison"),
            Record::new("4", "Charmander")
                .with_stats(BaseStats::new(39, 52, 43, 60, 50, 65))
                .with_types("Fire", ""),
            Record::new("6", "Charizard")
                .with_stats(BaseStats::new(78, 84, 78, 109, 85, 100))
                .with_types("Fire", "Flying"),
            Record::new("16", "Pidgey")
                .with_stats(BaseStats::new(40, 45, 40, 35, 35, 56))
                .with_types("Normal", "Flying"),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::name).collect()
    }

    fn type_is(field: Field, name: &str) -> RuleSpec {
        RuleSpec::include(field, Condition::Equals).value(name)
    }

    #[test]
    fn empty_spec_is_identity() {
        let records = dex();
        assert_eq!(apply_filter(&records, &FilterSpec::new()), records);

        let only_empty_groups = FilterSpec::new().group(RuleGroup::new()).group(RuleGroup::new());
        assert_eq!(apply_filter(&records, &only_empty_groups), records);
    }

    #[test]
    fn rules_in_a_group_and_together() {
        let spec = FilterSpec::new().group(
            RuleGroup::new()
                .rule(type_is(Field::Type1, "fire"))
                .rule(type_is(Field::Type2, "flying")),
        );
        assert_eq!(names(&apply_filter(&dex(), &spec)), ["Charizard"]);
    }

    #[test]
    fn groups_or_together_without_duplicates() {
        let spec = FilterSpec::new()
            .group(RuleGroup::new().rule(type_is(Field::Type2, "Flying")))
            .group(RuleGroup::new().rule(type_is(Field::Type1, "Fire")));

        // Flying matches first (Charizard, Pidgey), then the unseen Fire match.
        assert_eq!(
            names(&apply_filter(&dex(), &spec)),
            ["Charizard", "Pidgey", "Charmander"]
        );
    }

    #[test]
    fn incomplete_rules_are_ignored_not_applied() {
        let half_built = RuleSpec {
            action: Some(Action::Exclude),
            field: None,
            condition: Some(Condition::Any),
            value: None,
        };
        let spec = FilterSpec::new().group(
            RuleGroup::new()
                .rule(half_built.clone())
                .rule(type_is(Field::Type1, "Fire")),
        );
        assert_eq!(
            names(&apply_filter(&dex(), &spec)),
            ["Charmander", "Charizard"]
        );

        // A group made only of incomplete rules does not count as a group.
        let spec = FilterSpec::new().group(RuleGroup::new().rule(half_built));
        assert_eq!(apply_filter(&dex(), &spec), dex());
    }

    #[test]
    fn stat_range_is_inclusive() {
        let spec = FilterSpec::new().group(RuleGroup::stat_range(Field::Speed, 45, 65));
        assert_eq!(
            names(&apply_filter(&dex(), &spec)),
            ["Bulbasaur", "Charmander", "Pidgey"]
        );
    }

    #[test]
    fn exclude_rules_drop_matches() {
        let spec = FilterSpec::new().group(
            RuleGroup::new().rule(RuleSpec::exclude(Field::Type2, Condition::None)),
        );
        assert_eq!(
            names(&spec.apply(&dex())),
            ["Bulbasaur", "Charizard", "Pidgey"]
        );
    }

    #[test]
    fn groups_collect_from_iterators() {
        let spec: FilterSpec = [
            [type_is(Field::Type1, "Normal")].into_iter().collect::<RuleGroup>(),
            RuleGroup::new(),
        ]
        .into_iter()
        .collect();
        assert_eq!(spec.groups().len(), 2);
        assert_eq!(names(&spec.apply(&dex())), ["Pidgey"]);
    }
}
