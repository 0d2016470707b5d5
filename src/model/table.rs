use super::column::ColumnKey;
use std::fmt;

/// A single cell value from a stats table
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl StatValue {
    /// Parse a raw cell: integer, then float, then text. Empty and NaN cells
    /// are missing. Thousands separators are stripped before numeric parsing.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("nan") {
            return StatValue::Missing;
        }

        let numeric = s.replace(',', "");
        if let Ok(i) = numeric.parse::<i64>() {
            return StatValue::Int(i);
        }
        if let Ok(f) = numeric.parse::<f64>() {
            if f.is_finite() {
                return StatValue::Float(f);
            }
        }
        StatValue::Text(s.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(i) => Some(*i as f64),
            StatValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StatValue::Missing)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(i) => write!(f, "{}", i),
            StatValue::Float(v) => write!(f, "{}", v),
            StatValue::Text(s) => write!(f, "{}", s),
            StatValue::Missing => Ok(()),
        }
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Int(v)
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Float(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}

/// Composite row index: (player, team, league, season)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowIndex {
    pub player: String,
    pub team: String,
    pub league: String,
    pub season: String,
}

impl RowIndex {
    pub fn new(player: &str, team: &str, league: &str, season: &str) -> Self {
        Self {
            player: player.to_string(),
            team: team.to_string(),
            league: league.to_string(),
            season: season.to_string(),
        }
    }
}

/// One row of a stats table, values aligned with the table's columns
#[derive(Debug, Clone)]
pub struct StatRow {
    pub index: RowIndex,
    pub values: Vec<StatValue>,
}

/// A category table as returned by a stats source
#[derive(Debug, Clone, Default)]
pub struct RawStatTable {
    pub columns: Vec<ColumnKey>,
    pub rows: Vec<StatRow>,
}

impl RawStatTable {
    pub fn new(columns: Vec<ColumnKey>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with missing values, long rows truncated.
    pub fn push_row(&mut self, index: RowIndex, mut values: Vec<StatValue>) {
        values.resize(self.columns.len(), StatValue::Missing);
        self.rows.push(StatRow { index, values });
    }

    /// Builder-style row append, handy for in-memory tables
    pub fn with_row(mut self, index: RowIndex, values: Vec<StatValue>) -> Self {
        self.push_row(index, values);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the columns of a row as (key, value) pairs
    pub fn cells<'a>(&'a self, row: &'a StatRow) -> impl Iterator<Item = (&'a ColumnKey, &'a StatValue)> {
        self.columns.iter().zip(row.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(StatValue::parse("25"), StatValue::Int(25));
        assert_eq!(StatValue::parse("1,234"), StatValue::Int(1234));
        assert_eq!(StatValue::parse("0.45"), StatValue::Float(0.45));
        assert_eq!(StatValue::parse("FW,MF"), StatValue::Text("FW,MF".to_string()));
        assert_eq!(StatValue::parse("fr FRA"), StatValue::Text("fr FRA".to_string()));
        assert_eq!(StatValue::parse(""), StatValue::Missing);
        assert_eq!(StatValue::parse("NaN"), StatValue::Missing);
    }

    #[test]
    fn test_display_missing_is_empty() {
        assert_eq!(StatValue::Missing.to_string(), "");
        assert_eq!(StatValue::Int(7).to_string(), "7");
    }

    #[test]
    fn test_push_row_pads_values() {
        let mut table = RawStatTable::new(vec![ColumnKey::flat("a"), ColumnKey::flat("b")]);
        table.push_row(RowIndex::new("P", "T", "L", "S"), vec![StatValue::Int(1)]);
        assert_eq!(table.rows[0].values, vec![StatValue::Int(1), StatValue::Missing]);
    }
}
