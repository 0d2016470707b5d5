pub mod assembler;
pub mod batch;
pub mod error;
pub mod model;
pub mod names;
pub mod resolver;
pub mod source;
pub mod xlsx;

pub use assembler::assemble;
pub use batch::{run_batch, run_batch_with, BatchOptions, BatchResult};
pub use error::{Result, StatsError};
pub use model::*;
pub use source::{Category, CsvDirSource, MemorySource, StatsSource};
