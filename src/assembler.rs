//! Record assembly: one flat record per player from every category table
//!
//! Categories are queried in a fixed order. The first category that matches
//! the player supplies the identity fields, and every category after that only
//! adds fields that are not already present. A category that fails to load or
//! has no matching row is skipped.

use crate::model::record::{LEAGUE, PLAYER_NAME, SEASON, TEAM};
use crate::model::{normalize, ExtractionRequest, PlayerRecord, RawStatTable, StatValue};
use crate::names::map_field;
use crate::resolver::resolve;
use crate::source::{Category, StatsSource};

/// Assemble a record for one request using the standard category order.
/// Returns `None` when no category matched the player.
pub fn assemble<S: StatsSource + ?Sized>(source: &S, request: &ExtractionRequest) -> Option<PlayerRecord> {
    let categories = Category::plan(request.include_keeper_stats);
    assemble_categories(source, request, &categories)
}

/// Assemble a record querying the given categories in order
pub fn assemble_categories<S: StatsSource + ?Sized>(
    source: &S,
    request: &ExtractionRequest,
    categories: &[Category],
) -> Option<PlayerRecord> {
    let leagues = vec![request.league.clone()];
    let seasons = vec![request.season.clone()];

    let mut record = PlayerRecord::new();
    let mut matched = 0usize;

    for &category in categories {
        log::debug!("Querying {} for '{}'", category, request.player_name);

        let table = match source.category_table(category, &leagues, &seasons) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Skipping {} for '{}': {}", category, request.player_name, e);
                continue;
            }
        };

        if merge_category(&mut record, &table, request, matched == 0) {
            matched += 1;
        } else {
            log::debug!("'{}' not found in {}", request.player_name, category);
        }
    }

    if matched == 0 {
        log::info!(
            "'{}' not found in any category ({} {})",
            request.player_name,
            request.league,
            request.season
        );
        return None;
    }

    log::info!(
        "Assembled '{}' from {} of {} categories ({} fields)",
        request.player_name,
        matched,
        categories.len(),
        record.len()
    );
    Some(record)
}

/// Merge the player's first matching row from one table into the record.
/// Returns false if the player has no row in the table.
fn merge_category(
    record: &mut PlayerRecord,
    table: &RawStatTable,
    request: &ExtractionRequest,
    first_match: bool,
) -> bool {
    let rows = match resolve(table, &request.player_name) {
        Some(rows) => rows,
        None => return false,
    };
    let row = rows[0];

    if first_match {
        record.insert_if_absent(PLAYER_NAME, StatValue::Text(request.player_name.clone()));
        record.insert_if_absent(LEAGUE, StatValue::Text(row.index.league.clone()));
        record.insert_if_absent(SEASON, StatValue::Text(row.index.season.clone()));
        record.insert_if_absent(TEAM, StatValue::Text(row.index.team.clone()));
    }

    for (column, value) in table.cells(row) {
        let field = normalize(column);
        record.insert_if_absent(map_field(&field), value.clone());
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnKey, RowIndex};
    use crate::source::MemorySource;

    fn mbappe_index() -> RowIndex {
        RowIndex::new("Kylian Mbappé", "Real Madrid", "ESP-La Liga", "2024-25")
    }

    fn request() -> ExtractionRequest {
        ExtractionRequest::new("Mbappé", "ESP-La Liga", "2024-25")
    }

    fn single_column(key: ColumnKey, value: i64) -> RawStatTable {
        RawStatTable::new(vec![key]).with_row(mbappe_index(), vec![StatValue::Int(value)])
    }

    #[test]
    fn test_first_write_wins_across_categories() {
        let source = MemorySource::new()
            .with_table(Category::Defense, single_column(ColumnKey::pair("Tackles", "Tkl"), 30))
            .with_table(Category::Standard, single_column(ColumnKey::flat("Tkl"), 5));

        let record = assemble(&source, &request()).unwrap();
        assert_eq!(record.get("tackles"), Some(&StatValue::Int(5)));
    }

    #[test]
    fn test_failed_category_is_skipped() {
        let source = MemorySource::new()
            .with_table(Category::Standard, single_column(ColumnKey::pair("Standard", "Gls"), 25))
            .with_failure(Category::Passing, "HTTP 429");

        let record = assemble(&source, &request()).unwrap();
        assert_eq!(record.get("goals"), Some(&StatValue::Int(25)));
    }

    #[test]
    fn test_identity_comes_from_first_match() {
        let shooting = RawStatTable::new(vec![ColumnKey::pair("Standard", "Sh")]).with_row(
            RowIndex::new("Kylian Mbappé", "Other Club", "ESP-La Liga", "2024-25"),
            vec![StatValue::Int(120)],
        );
        let source = MemorySource::new()
            .with_table(Category::Standard, single_column(ColumnKey::pair("Standard", "Gls"), 25))
            .with_table(Category::Shooting, shooting);

        let record = assemble(&source, &request()).unwrap();
        assert_eq!(record.get("team"), Some(&StatValue::Text("Real Madrid".to_string())));
        assert_eq!(record.player_name(), Some("Mbappé"));
    }

    #[test]
    fn test_identity_not_overwritten_by_stat_column() {
        let table = RawStatTable::new(vec![ColumnKey::flat("team"), ColumnKey::flat("Gls")])
            .with_row(mbappe_index(), vec![StatValue::from("Somewhere Else"), StatValue::Int(2)]);
        let source = MemorySource::new().with_table(Category::Standard, table);

        let record = assemble(&source, &request()).unwrap();
        assert_eq!(record.get("team"), Some(&StatValue::Text("Real Madrid".to_string())));
    }

    #[test]
    fn test_keeper_categories_only_when_requested() {
        let source = MemorySource::new()
            .with_table(Category::Standard, single_column(ColumnKey::pair("Standard", "Gls"), 0))
            .with_table(Category::Keeper, single_column(ColumnKey::pair("Performance", "Saves"), 80));

        let outfield = assemble(&source, &request()).unwrap();
        assert!(!outfield.contains("saves"));

        let keeper = assemble(&source, &request().with_keeper_stats()).unwrap();
        assert_eq!(keeper.get("saves"), Some(&StatValue::Int(80)));
    }

    #[test]
    fn test_not_found_anywhere() {
        let source = MemorySource::new()
            .with_table(Category::Standard, single_column(ColumnKey::pair("Standard", "Gls"), 25))
            .with_failure(Category::Shooting, "timeout");

        let missing = ExtractionRequest::new("Lamine Yamal", "ESP-La Liga", "2024-25");
        assert!(assemble(&source, &missing).is_none());
    }

    #[test]
    fn test_other_league_rows_are_ignored() {
        let table = RawStatTable::new(vec![ColumnKey::pair("Standard", "Gls")]).with_row(
            RowIndex::new("Kylian Mbappé", "Paris S-G", "FRA-Ligue 1", "2023-24"),
            vec![StatValue::Int(27)],
        );
        let source = MemorySource::new().with_table(Category::Standard, table);
        assert!(assemble(&source, &request()).is_none());
    }
}
