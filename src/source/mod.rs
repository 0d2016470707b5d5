//! Stats sources: where category tables come from

pub mod csv_dir;
pub mod memory;

pub use csv_dir::CsvDirSource;
pub use memory::MemorySource;

use crate::error::{Result, StatsError};
use crate::model::RawStatTable;
use std::fmt;
use std::str::FromStr;

/// A statistical domain queried independently from the stats source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    Shooting,
    Passing,
    PassingTypes,
    GoalShotCreation,
    Defense,
    Possession,
    PlayingTime,
    Misc,
    Keeper,
    KeeperAdv,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Standard,
        Category::Shooting,
        Category::Passing,
        Category::PassingTypes,
        Category::GoalShotCreation,
        Category::Defense,
        Category::Possession,
        Category::PlayingTime,
        Category::Misc,
        Category::Keeper,
        Category::KeeperAdv,
    ];

    /// Outfield categories in query order
    pub const OUTFIELD: [Category; 9] = [
        Category::Standard,
        Category::Shooting,
        Category::Passing,
        Category::PassingTypes,
        Category::GoalShotCreation,
        Category::Defense,
        Category::Possession,
        Category::PlayingTime,
        Category::Misc,
    ];

    /// The fixed query order for one extraction. Earlier categories win
    /// when two of them supply the same field.
    pub fn plan(include_keeper: bool) -> Vec<Category> {
        let mut categories = Category::OUTFIELD.to_vec();
        if include_keeper {
            categories.push(Category::Keeper);
            categories.push(Category::KeeperAdv);
        }
        categories
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Shooting => "shooting",
            Category::Passing => "passing",
            Category::PassingTypes => "passing_types",
            Category::GoalShotCreation => "goal_shot_creation",
            Category::Defense => "defense",
            Category::Possession => "possession",
            Category::PlayingTime => "playing_time",
            Category::Misc => "misc",
            Category::Keeper => "keeper",
            Category::KeeperAdv => "keeper_adv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| StatsError::UnknownCategory(s.to_string()))
    }
}

/// Anything that can hand out a category table for a set of leagues and seasons.
/// Errors are per category; callers skip the category and carry on.
pub trait StatsSource {
    fn category_table(
        &self,
        category: Category,
        leagues: &[String],
        seasons: &[String],
    ) -> Result<RawStatTable>;
}

impl<T: StatsSource + ?Sized> StatsSource for &T {
    fn category_table(
        &self,
        category: Category,
        leagues: &[String],
        seasons: &[String],
    ) -> Result<RawStatTable> {
        (**self).category_table(category, leagues, seasons)
    }
}

/// Keep only rows in the requested leagues and seasons. An empty filter keeps everything.
pub(crate) fn filter_rows(mut table: RawStatTable, leagues: &[String], seasons: &[String]) -> RawStatTable {
    table.rows.retain(|row| {
        (leagues.is_empty() || leagues.contains(&row.index.league))
            && (seasons.is_empty() || seasons.contains(&row.index.season))
    });
    table
}
