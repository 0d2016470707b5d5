use super::table::StatValue;
use std::collections::HashMap;

/// A flat field key after normalization and name mapping
pub type FieldName = String;

pub const PLAYER_NAME: &str = "player_name";
pub const LEAGUE: &str = "league";
pub const SEASON: &str = "season";
pub const TEAM: &str = "team";

/// Identity fields in the order they are written to a record
pub const IDENTITY_FIELDS: [&str; 4] = [PLAYER_NAME, LEAGUE, SEASON, TEAM];

/// One assembled player record. Fields keep their insertion order and a
/// key, once written, is never overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    fields: Vec<(FieldName, StatValue)>,
    positions: HashMap<FieldName, usize>,
}

impl PlayerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field unless the key is already present.
    /// Returns true if the value was written.
    pub fn insert_if_absent(&mut self, field: &str, value: StatValue) -> bool {
        if self.positions.contains_key(field) {
            return false;
        }
        self.positions.insert(field.to_string(), self.fields.len());
        self.fields.push((field.to_string(), value));
        true
    }

    pub fn get(&self, field: &str) -> Option<&StatValue> {
        self.positions.get(field).map(|&i| &self.fields[i].1)
    }

    /// Field value, or the caller's default when the field is absent
    pub fn get_or<'a>(&'a self, field: &str, default: &'a StatValue) -> &'a StatValue {
        self.get(field).unwrap_or(default)
    }

    /// Numeric field value, or the caller's default when absent or non-numeric
    pub fn get_f64_or(&self, field: &str, default: f64) -> f64 {
        self.get(field).and_then(StatValue::as_f64).unwrap_or(default)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(StatValue::as_f64)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.positions.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn player_name(&self) -> Option<&str> {
        self.get(PLAYER_NAME).and_then(StatValue::as_str)
    }
}
