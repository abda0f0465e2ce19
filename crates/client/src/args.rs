//! Command line arguments.
//!
//! Rules are written compactly as `action:field:condition[:value]` and joined
//! with `;` into a group. Each `--group` is OR-ed with the others:
//!
//! ```text
//! dex list -g "include:Type 1:equals:Fire; include:Speed:>:80" -g "include:Legendary:is:True"
//! ```
//!
//! Parts may be left empty (`include:Type 2::`); such a rule stays incomplete
//! and is ignored while filtering, exactly like a half-built rule in a UI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dex_core::{Action, Condition, Field, FusionRequest, RecordKey, Role, RuleGroup, RuleSpec};

#[derive(Debug, Parser)]
#[command(name = "dex", version, about = "Filter, fuse and sort a creature catalog")]
pub struct Cli {
    /// Directory holding the catalog, `explorer.toml` and presets
    #[arg(long, env = "DEX_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the catalog through filter, fusion and sort
    List(ListArgs),

    /// Print every field of one record
    Show {
        /// Record number
        key: String,
    },

    /// List the catalog fields and their kinds
    Fields,

    /// List the saved filter presets
    Presets,
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Start from a saved filter preset
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Rule group `action:field:condition[:value]; ...` (repeat to OR groups)
    #[arg(short, long = "group", value_name = "RULES", value_parser = parse_group)]
    pub groups: Vec<RuleGroup>,

    /// Keep only records with FIELD inside MIN..=MAX (adds its own group)
    #[arg(long, value_name = "FIELD:MIN:MAX", value_parser = parse_range)]
    pub range: Vec<RuleGroup>,

    /// Fuse every row with this record number
    #[arg(long, value_name = "KEY")]
    pub fuse: Option<String>,

    /// Half of the fusion the donor supplies
    #[arg(long, requires = "fuse")]
    pub role: Option<Role>,

    /// Column to sort by (defaults to the configured sort)
    #[arg(short, long)]
    pub sort: Option<Field>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Fusion selection from `--fuse` and `--role`; `--fuse` alone defaults
    /// to the donor playing the head.
    pub fn fusion(&self) -> FusionRequest {
        FusionRequest {
            donor: self.fuse.as_deref().map(RecordKey::from),
            role: self.fuse.as_ref().map(|_| self.role.unwrap_or(Role::Head)),
        }
    }
}

/// Parse one `;`-separated rule group.
pub fn parse_group(text: &str) -> Result<RuleGroup, String> {
    text.split(';')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(parse_rule)
        .collect()
}

/// Parse `action:field:condition[:value]`. Empty parts stay unset.
pub fn parse_rule(text: &str) -> Result<RuleSpec, String> {
    let mut parts = text.splitn(4, ':').map(str::trim);

    Ok(RuleSpec {
        action: optional::<Action>(parts.next(), "action")?,
        field: optional::<Field>(parts.next(), "field")?,
        condition: optional::<Condition>(parts.next(), "condition")?,
        value: parts
            .next()
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    })
}

/// Parse `FIELD:MIN:MAX` into an inclusive range group.
pub fn parse_range(text: &str) -> Result<RuleGroup, String> {
    let parts: Vec<&str> = text.split(':').map(str::trim).collect();
    let [field, min, max] = parts.as_slice() else {
        return Err(format!("expected FIELD:MIN:MAX, got '{text}'"));
    };

    let field: Field = field
        .parse()
        .map_err(|_| format!("unknown field '{field}'"))?;
    if !field.is_numeric() {
        return Err(format!("{field} is not a numeric field"));
    }
    let min = parse_bound(min).ok_or_else(|| format!("invalid minimum '{min}'"))?;
    let max = parse_bound(max).ok_or_else(|| format!("invalid maximum '{max}'"))?;
    if min > max {
        return Err(format!("minimum {min} is above maximum {max}"));
    }

    Ok(RuleGroup::stat_range(field, min, max))
}

fn parse_bound(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn optional<T: std::str::FromStr>(part: Option<&str>, what: &str) -> Result<Option<T>, String> {
    match part {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| format!("unknown {what} '{text}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_rules() {
        let rule = parse_rule("include:Type 1:equals:Fire").unwrap();
        assert_eq!(
            rule,
            RuleSpec::include(Field::Type1, Condition::Equals).value("Fire")
        );

        let rule = parse_rule("exclude : bst : < : 400").unwrap();
        assert_eq!(
            rule,
            RuleSpec::exclude(Field::Bst, Condition::LessThan).value("400")
        );
    }

    #[test]
    fn empty_parts_stay_unset() {
        let rule = parse_rule("include:Type 2").unwrap();
        assert_eq!(rule.action, Some(Action::Include));
        assert_eq!(rule.field, Some(Field::Type2));
        assert_eq!(rule.condition, None);
        assert_eq!(rule.value, None);

        let rule = parse_rule("include:Type 2:none:").unwrap();
        assert_eq!(rule.condition, Some(Condition::None));
        assert_eq!(rule.value, None);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            parse_rule("keep:Speed:>:5").unwrap_err(),
            "unknown action 'keep'"
        );
        assert!(parse_rule("include:Stat Ratio:>:1").is_err());
        assert!(parse_rule("include:Speed:between:5").is_err());
    }

    #[test]
    fn groups_split_on_semicolons() {
        let group = parse_group("include:Type 1:is:Fire; include:Speed:>:80;").unwrap();
        assert_eq!(group.rules().len(), 2);
        assert_eq!(group.rules()[1].field, Some(Field::Speed));
    }

    #[test]
    fn ranges_become_exclusion_pairs() {
        let group = parse_range("BST:400:500").unwrap();
        assert_eq!(group, RuleGroup::stat_range(Field::Bst, 400.0, 500.0));

        assert!(parse_range("Name:1:2").is_err());
        assert!(parse_range("BST:500:400").is_err());
        assert!(parse_range("BST:400").is_err());
    }

    #[test]
    fn ranges_reject_non_finite_bounds() {
        assert_eq!(
            parse_range("BST:nan:500").unwrap_err(),
            "invalid minimum 'nan'"
        );
        assert!(parse_range("BST:0:inf").is_err());
        assert!(parse_range("BST:-infinity:500").is_err());
    }

    #[test]
    fn fuse_defaults_to_head() {
        let args = ListArgs {
            fuse: Some("25".to_string()),
            ..ListArgs::default()
        };
        assert_eq!(args.fusion(), FusionRequest::new("25", Role::Head));
        assert_eq!(ListArgs::default().fusion(), FusionRequest::default());
    }

    #[test]
    fn cli_parses_list_arguments() {
        let cli = Cli::try_parse_from([
            "dex",
            "--data-dir",
            "/tmp/dex",
            "list",
            "-g",
            "include:Type 1:is:Fire",
            "--fuse",
            "150",
            "--role",
            "body",
            "--sort",
            "speed",
            "--desc",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/dex"));
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.groups.len(), 1);
        assert_eq!(args.fusion(), FusionRequest::new("150", Role::Body));
        assert_eq!(args.sort, Some(Field::Speed));
        assert!(args.desc);
    }

    #[test]
    fn role_requires_a_donor() {
        assert!(Cli::try_parse_from(["dex", "list", "--role", "head"]).is_err());
    }
}
