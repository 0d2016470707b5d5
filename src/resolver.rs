//! Player row lookup by free-text name

use crate::model::{RawStatTable, StatRow};

/// Fold the accented letters common in player names to plain Latin
pub fn fold_accents(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'é' => 'e',
            'ñ' => 'n',
            'í' => 'i',
            'ó' => 'o',
            other => other,
        })
        .collect()
}

/// Name variants to try, most specific first:
/// as given, accent-folded, last token, first token.
pub fn name_variants(name: &str) -> Vec<String> {
    let name = name.trim();
    let mut variants = vec![name.to_string(), fold_accents(name)];

    if name.contains(' ') {
        let mut tokens = name.split_whitespace();
        let first = tokens.next().unwrap_or(name);
        let last = tokens.last().unwrap_or(first);
        variants.push(last.to_string());
        variants.push(first.to_string());
    } else {
        variants.push(name.to_string());
        variants.push(name.to_string());
    }

    variants
}

/// Find the rows whose player name contains one of the name variants.
///
/// Variants are tried in order and the first non-empty match set wins.
/// Returns `None` for an empty table, a blank name, or when nothing matches.
pub fn resolve<'a>(table: &'a RawStatTable, player_name: &str) -> Option<Vec<&'a StatRow>> {
    if table.is_empty() || player_name.trim().is_empty() {
        return None;
    }

    let mut tried: Vec<String> = Vec::with_capacity(4);
    for variant in name_variants(player_name) {
        let needle = variant.to_lowercase();
        if tried.contains(&needle) {
            continue;
        }

        let matches: Vec<&StatRow> = table
            .rows
            .iter()
            .filter(|row| row.index.player.to_lowercase().contains(&needle))
            .collect();

        if !matches.is_empty() {
            log::debug!(
                "Resolved '{}' via variant '{}' ({} rows)",
                player_name,
                variant,
                matches.len()
            );
            return Some(matches);
        }
        tried.push(needle);
    }

    None
}
