//! Category tables read from flat CSV exports, one file per category

use super::{filter_rows, Category, StatsSource};
use crate::error::{Result, StatsError};
use crate::model::{ColumnKey, RawStatTable, RowIndex, StatValue};
use csv::StringRecord;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads `<dir>/<category>.csv` for each category
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
    header_rows: usize,
}

impl CsvDirSource {
    /// Source over a directory of two-header-row exports
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            header_rows: 2,
        }
    }

    /// Number of header rows in each file (1 or 2)
    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.csv", category.as_str()))
    }

    /// Read a whole category file without filtering
    pub fn read_table(&self, category: Category) -> Result<RawStatTable> {
        let path = self.table_path(category);
        if !path.exists() {
            return Err(StatsError::CategoryFetch {
                category: category.to_string(),
                message: format!("{} not found", path.display()),
            });
        }

        let file = std::fs::File::open(&path)?;
        parse_table(file, self.header_rows).map_err(|e| match e {
            StatsError::MalformedTable(msg) => {
                StatsError::MalformedTable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl StatsSource for CsvDirSource {
    fn category_table(
        &self,
        category: Category,
        leagues: &[String],
        seasons: &[String],
    ) -> Result<RawStatTable> {
        let table = self.read_table(category)?;
        let total = table.len();
        let table = filter_rows(table, leagues, seasons);
        log::debug!(
            "{}: kept {} of {} rows for leagues {:?} seasons {:?}",
            category,
            table.len(),
            total,
            leagues,
            seasons
        );
        Ok(table)
    }
}

/// Positions of the four index columns
struct IndexColumns {
    player: usize,
    team: usize,
    league: usize,
    season: usize,
}

impl IndexColumns {
    fn locate(columns: &[ColumnKey]) -> Result<Self> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c.normalize().trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| StatsError::MalformedTable(format!("missing '{}' column", name)))
        };

        Ok(Self {
            player: find("player")?,
            team: find("team")?,
            league: find("league")?,
            season: find("season")?,
        })
    }

    fn contains(&self, idx: usize) -> bool {
        idx == self.player || idx == self.team || idx == self.league || idx == self.season
    }

    fn row_index(&self, record: &StringRecord) -> RowIndex {
        let cell = |i: usize| record.get(i).unwrap_or("").trim();
        RowIndex::new(cell(self.player), cell(self.team), cell(self.league), cell(self.season))
    }
}

/// Parse a category table from CSV.
///
/// With two header rows, row one holds group labels and row two stat labels.
/// With one header row, labels may be tuple-form (`('Standard', 'Gls')`) or plain.
/// The `player`, `team`, `league` and `season` columns form the row index.
pub fn parse_table<R: Read>(reader: R, header_rows: usize) -> Result<RawStatTable> {
    if header_rows != 1 && header_rows != 2 {
        return Err(StatsError::MalformedTable(format!(
            "unsupported header row count: {}",
            header_rows
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let mut headers: Vec<StringRecord> = Vec::with_capacity(header_rows);
    for _ in 0..header_rows {
        match records.next() {
            Some(record) => headers.push(record?),
            None => {
                return Err(StatsError::MalformedTable(format!(
                    "expected {} header rows",
                    header_rows
                )))
            }
        }
    }

    let width = headers.iter().map(|h| h.len()).max().unwrap_or(0);
    let all_columns: Vec<ColumnKey> = (0..width)
        .map(|i| {
            let first = headers[0].get(i).unwrap_or("");
            if header_rows == 2 {
                ColumnKey::from_levels(first, headers[1].get(i).unwrap_or(""))
            } else {
                ColumnKey::parse_label(first)
            }
        })
        .collect();

    let index = IndexColumns::locate(&all_columns)?;
    let stat_positions: Vec<usize> = (0..width).filter(|&i| !index.contains(i)).collect();

    let mut table = RawStatTable::new(
        stat_positions
            .iter()
            .map(|&i| all_columns[i].clone())
            .collect(),
    );

    for (line, result) in records.enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping unreadable row {}: {}", line + header_rows + 1, e);
                continue;
            }
        };

        let row_index = index.row_index(&record);
        if row_index.player.is_empty() {
            continue;
        }

        let values = stat_positions
            .iter()
            .map(|&i| StatValue::parse(record.get(i).unwrap_or("")))
            .collect();
        table.push_row(row_index, values);
    }

    Ok(table)
}
