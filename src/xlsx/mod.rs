pub mod writer;

pub use writer::write_records_to_xlsx;
