use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pitch_stats::batch::{self, BatchOptions};
use pitch_stats::names;
use pitch_stats::xlsx;
use pitch_stats::{assemble, Category, CsvDirSource, ExtractionRequest};

#[derive(Parser)]
#[command(name = "pitch-stats")]
#[command(about = "Normalize per-player football statistics into flat player records", long_about = None)]
struct Cli {
    /// Directory holding one CSV export per category (standard.csv, shooting.csv, ...)
    #[arg(long, env = "PITCH_STATS_DATA_DIR", global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Header rows in each category file: 2 for group/stat rows, 1 for tuple-form labels
    #[arg(long, global = true, default_value = "2")]
    header_rows: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the record for a single player
    Extract {
        /// Player name (full name, surname or accented form)
        #[arg(short, long)]
        player: String,

        /// League identifier, e.g. "ESP-La Liga"
        #[arg(short, long)]
        league: String,

        /// Season identifier, e.g. "2024-25"
        #[arg(short, long)]
        season: String,

        /// Also query goalkeeping categories
        #[arg(long)]
        keeper: bool,
    },

    /// Assemble records for every request in a CSV file
    Batch {
        /// Requests CSV (player_name,league,season[,include_keeper_stats])
        #[arg(short, long)]
        requests: PathBuf,

        /// Output file (.csv or .xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Number of parallel threads (default: sequential)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Show how the columns of a category file normalize and map
    Columns {
        /// Category name, e.g. "defense"
        #[arg(short, long)]
        category: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let source = CsvDirSource::new(&cli.data_dir).with_header_rows(cli.header_rows);

    match cli.command {
        Commands::Extract { player, league, season, keeper } => {
            let mut request = ExtractionRequest::new(&player, &league, &season);
            if keeper {
                request = request.with_keeper_stats();
            }
            extract(&source, &request)?;
        }
        Commands::Batch { requests, output, threads } => {
            run_batch(&source, &requests, &output, threads)?;
        }
        Commands::Columns { category } => {
            columns(&source, &category)?;
        }
    }

    Ok(())
}

fn extract(source: &CsvDirSource, request: &ExtractionRequest) -> Result<()> {
    println!(
        "Extracting {} ({} {}) from {}",
        request.player_name,
        request.league,
        request.season,
        source.dir().display()
    );

    match assemble(source, request) {
        Some(record) => {
            println!("Found {} fields", record.len());
            println!();
            for (field, value) in record.iter() {
                println!("  {}: {}", field, value);
            }
        }
        None => {
            println!("Player not found in any category");
        }
    }

    Ok(())
}

fn run_batch(source: &CsvDirSource, requests_path: &Path, output: &Path, threads: Option<usize>) -> Result<()> {
    let output_ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if output_ext != "csv" && output_ext != "xlsx" {
        anyhow::bail!("Unsupported output format: {}", output_ext);
    }

    println!("Reading requests: {}", requests_path.display());
    let requests = batch::load_requests(requests_path).context("Failed to read requests file")?;
    println!("Found {} requests", requests.len());

    let options = match threads {
        Some(n) => BatchOptions::parallel().with_threads(n),
        None => BatchOptions::sequential(),
    };
    let result = batch::run_batch_with(source, &requests, &options);

    println!("Assembled {} records", result.len());
    if !result.omitted.is_empty() {
        println!("Not found ({}):", result.omitted.len());
        for request in &result.omitted {
            println!("  - {} ({} {})", request.player_name, request.league, request.season);
        }
    }

    match output_ext.as_str() {
        "csv" => {
            println!("Writing CSV file: {}", output.display());
            result.write_csv(output).context("Failed to write CSV file")?;
        }
        _ => {
            println!("Writing Excel file: {}", output.display());
            xlsx::write_records_to_xlsx(&result, output).context("Failed to write Excel file")?;
        }
    }

    println!("Done!");
    Ok(())
}

fn columns(source: &CsvDirSource, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let table = source
        .read_table(category)
        .with_context(|| format!("Failed to read {} table", category))?;

    println!("{}: {} columns, {} rows", category, table.columns.len(), table.len());
    println!();

    let mut unmapped = 0;
    for column in &table.columns {
        let flat = column.normalize();
        let mapped = names::map_field(&flat);
        if names::is_mapped(&flat) {
            println!("  {} -> {} -> {}", column, flat, mapped);
        } else {
            unmapped += 1;
            println!("  {} -> {} (unmapped)", column, flat);
        }
    }

    if unmapped > 0 {
        println!();
        println!("{} columns pass through unmapped", unmapped);
    }

    Ok(())
}
