use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to fetch {category} table: {message}")]
    CategoryFetch { category: String, message: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, StatsError>;
