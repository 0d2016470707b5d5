use nom::{
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, space0},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use std::fmt;

/// Group labels that carry no distinguishing information. A stat under one
/// of these groups is keyed by its own label alone.
pub const GENERIC_GROUPS: [&str; 9] = [
    "Standard",
    "Performance",
    "Expected",
    "Total",
    "Short",
    "Medium",
    "Long",
    "Playing Time",
    "Per 90 Minutes",
];

/// A raw column label as emitted by the stats source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Flat(String),
    Pair(String, String),
}

impl ColumnKey {
    pub fn flat(label: impl Into<String>) -> Self {
        ColumnKey::Flat(label.into())
    }

    pub fn pair(group: impl Into<String>, stat: impl Into<String>) -> Self {
        ColumnKey::Pair(group.into(), stat.into())
    }

    /// Parse a single header label. Tuple-form labels such as
    /// `('Standard', 'Gls')` become pairs, anything else is flat.
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        match tuple_label(trimmed) {
            Ok(("", (group, stat))) => ColumnKey::pair(group, stat),
            _ => ColumnKey::flat(trimmed),
        }
    }

    /// Build a key from the two header rows of a two-level export
    pub fn from_levels(group: &str, stat: &str) -> Self {
        let group = group.trim();
        let stat = stat.trim();
        if is_blank_label(group) {
            ColumnKey::flat(stat)
        } else {
            ColumnKey::pair(group, stat)
        }
    }

    /// Flat field key for this column
    pub fn normalize(&self) -> String {
        normalize(self)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Flat(label) => write!(f, "{}", label),
            ColumnKey::Pair(group, stat) => write!(f, "('{}', '{}')", group, stat),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(label: &str) -> Self {
        ColumnKey::flat(label)
    }
}

impl From<(&str, &str)> for ColumnKey {
    fn from((group, stat): (&str, &str)) -> Self {
        ColumnKey::pair(group, stat)
    }
}

/// Collapse a column key into a single flat field key.
///
/// Flat keys pass through unchanged. For a pair, a blank stat yields the
/// group, a generic group yields the stat alone, and anything else is
/// joined as `group_stat`.
pub fn normalize(key: &ColumnKey) -> String {
    match key {
        ColumnKey::Flat(label) => label.clone(),
        ColumnKey::Pair(group, stat) => {
            if is_blank_label(stat) {
                group.clone()
            } else if is_generic_group(group) {
                stat.clone()
            } else {
                format!("{}_{}", group, stat)
            }
        }
    }
}

pub fn is_generic_group(group: &str) -> bool {
    GENERIC_GROUPS.contains(&group)
}

/// Empty, null-like, or a placeholder pandas emits for an unnamed level
fn is_blank_label(label: &str) -> bool {
    let label = label.trim();
    label.is_empty()
        || label.eq_ignore_ascii_case("nan")
        || label == "None"
        || label.starts_with("Unnamed:")
}

/// Parse a quoted string value, single or double quotes
fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_until("'"), char('\'')),
        delimited(char('"'), take_until("\""), char('"')),
    ))
    .parse(input)
}

/// Parse a tuple label: ('Group', 'Stat')
fn tuple_label(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = char('(').parse(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, pair) = separated_pair(quoted, (space0, char(','), space0), quoted).parse(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, _) = char(')').parse(input)?;
    Ok((input, pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_key_is_unchanged() {
        assert_eq!(normalize(&ColumnKey::flat("player")), "player");
        assert_eq!(normalize(&ColumnKey::flat("")), "");
    }

    #[test]
    fn test_normalize_flat_is_idempotent() {
        for label in ["Gls", "Tackles_Tkl", "Per 90 Minutes", ""] {
            let once = normalize(&ColumnKey::flat(label));
            let twice = normalize(&ColumnKey::flat(once.as_str()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_generic_group_collapses() {
        assert_eq!(normalize(&("Standard", "Gls").into()), "Gls");
        assert_eq!(normalize(&("Per 90 Minutes", "xG").into()), "xG");
        assert_eq!(normalize(&("Tackles", "Tkl").into()), "Tackles_Tkl");
    }

    #[test]
    fn test_blank_stat_falls_back_to_group() {
        assert_eq!(normalize(&("Standard", "").into()), "Standard");
        assert_eq!(normalize(&("nation", "nan").into()), "nation");
        assert_eq!(normalize(&("born", "Unnamed: 7_level_1").into()), "born");
    }

    #[test]
    fn test_generic_collapsing_can_collide() {
        let short = normalize(&("Short", "Cmp").into());
        let long = normalize(&("Long", "Cmp").into());
        assert_eq!(short, long);
    }

    #[test]
    fn test_parse_tuple_label() {
        assert_eq!(
            ColumnKey::parse_label("('Standard', 'Gls')"),
            ColumnKey::pair("Standard", "Gls")
        );
        assert_eq!(
            ColumnKey::parse_label("(\"Take-Ons\", \"Succ%\")"),
            ColumnKey::pair("Take-Ons", "Succ%")
        );
        assert_eq!(ColumnKey::parse_label("('age', '')"), ColumnKey::pair("age", ""));
    }

    #[test]
    fn test_parse_plain_label() {
        assert_eq!(ColumnKey::parse_label(" player "), ColumnKey::flat("player"));
        assert_eq!(ColumnKey::parse_label("(unbalanced"), ColumnKey::flat("(unbalanced"));
    }

    #[test]
    fn test_from_levels() {
        assert_eq!(ColumnKey::from_levels("", "player"), ColumnKey::flat("player"));
        assert_eq!(
            ColumnKey::from_levels("Aerial Duels", "Won"),
            ColumnKey::pair("Aerial Duels", "Won")
        );
    }
}
