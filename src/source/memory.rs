//! In-memory stats source

use super::{filter_rows, Category, StatsSource};
use crate::error::{Result, StatsError};
use crate::model::RawStatTable;
use std::collections::HashMap;

/// Category tables held in memory. A category can also be primed to fail,
/// which is how a broken upstream fetch is reproduced.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<Category, std::result::Result<RawStatTable, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, category: Category, table: RawStatTable) -> Self {
        self.tables.insert(category, Ok(table));
        self
    }

    pub fn with_failure(mut self, category: Category, message: &str) -> Self {
        self.tables.insert(category, Err(message.to_string()));
        self
    }

    pub fn insert_table(&mut self, category: Category, table: RawStatTable) {
        self.tables.insert(category, Ok(table));
    }
}

impl StatsSource for MemorySource {
    /// Categories with nothing loaded come back as empty tables
    fn category_table(
        &self,
        category: Category,
        leagues: &[String],
        seasons: &[String],
    ) -> Result<RawStatTable> {
        match self.tables.get(&category) {
            Some(Ok(table)) => Ok(filter_rows(table.clone(), leagues, seasons)),
            Some(Err(message)) => Err(StatsError::CategoryFetch {
                category: category.to_string(),
                message: message.clone(),
            }),
            None => Ok(RawStatTable::default()),
        }
    }
}
