//! Batch extraction over a list of requests

use crate::assembler::assemble;
use crate::error::Result;
use crate::model::{ExtractionRequest, PlayerRecord, StatValue};
use crate::source::StatsSource;
use rayon::prelude::*;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// How a batch is run
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Assemble requests on a rayon pool instead of one after another
    pub parallel: bool,
    /// Pool size for parallel runs (default: number of CPU cores)
    pub threads: Option<usize>,
}

impl BatchOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.parallel = true;
        self.threads = Some(threads);
        self
    }
}

/// Records assembled by a batch, in request order, plus the requests that
/// produced nothing
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub records: Vec<PlayerRecord>,
    pub omitted: Vec<ExtractionRequest>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of every record's fields, in first-seen order
    pub fn columns(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for record in &self.records {
            for key in record.keys() {
                if seen.insert(key) {
                    columns.push(key.to_string());
                }
            }
        }
        columns
    }

    /// Write one row per record; fields a record lacks become empty cells
    pub fn write_csv_to<W: Write>(&self, writer: W) -> Result<()> {
        let columns = self.columns();
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&columns)?;

        let missing = StatValue::Missing;
        for record in &self.records {
            let row: Vec<String> = columns
                .iter()
                .map(|c| record.get_or(c, &missing).to_string())
                .collect();
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv_to(file)
    }
}

/// Assemble every request in order. Players that cannot be found are left
/// out of the records and listed in `omitted`.
pub fn run_batch<S: StatsSource + ?Sized>(source: &S, requests: &[ExtractionRequest]) -> BatchResult {
    let outcomes = requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            log::info!("[{}/{}] {}", i + 1, requests.len(), request.player_name);
            assemble(source, request)
        })
        .collect();
    collect_outcomes(requests, outcomes)
}

/// Run a batch with the given options. Parallel runs still return records
/// in request order.
pub fn run_batch_with<S: StatsSource + Sync + ?Sized>(
    source: &S,
    requests: &[ExtractionRequest],
    options: &BatchOptions,
) -> BatchResult {
    if !options.parallel {
        return run_batch(source, requests);
    }

    let work = || -> Vec<Option<PlayerRecord>> {
        requests
            .par_iter()
            .map(|request| assemble(source, request))
            .collect()
    };

    let outcomes = match options.threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(work),
            Err(e) => {
                log::warn!("Could not build a {}-thread pool ({}), using the global pool", n, e);
                work()
            }
        },
        None => work(),
    };

    collect_outcomes(requests, outcomes)
}

fn collect_outcomes(requests: &[ExtractionRequest], outcomes: Vec<Option<PlayerRecord>>) -> BatchResult {
    let mut result = BatchResult::default();
    for (request, outcome) in requests.iter().zip(outcomes) {
        match outcome {
            Some(record) => result.records.push(record),
            None => {
                log::warn!(
                    "Omitting '{}' ({} {}): not found",
                    request.player_name,
                    request.league,
                    request.season
                );
                result.omitted.push(request.clone());
            }
        }
    }

    log::info!(
        "Batch finished: {} records, {} omitted",
        result.records.len(),
        result.omitted.len()
    );
    result
}

/// Read extraction requests from a CSV file with header
/// `player_name,league,season[,include_keeper_stats]`
pub fn load_requests(path: &Path) -> Result<Vec<ExtractionRequest>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut requests = Vec::new();
    for result in reader.deserialize() {
        requests.push(result?);
    }
    Ok(requests)
}
