pub mod column;
pub mod record;
pub mod request;
pub mod table;

pub use column::{normalize, ColumnKey};
pub use record::{FieldName, PlayerRecord, IDENTITY_FIELDS};
pub use request::ExtractionRequest;
pub use table::{RawStatTable, RowIndex, StatRow, StatValue};
