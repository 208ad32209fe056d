use clap::{Parser, ValueEnum};
use property_finder::config::DEFAULT_CONFIG_PATH;
use property_finder::spreadsheets::{export_buildings_xlsx, export_table_xlsx};
use property_finder::{AppConfig, AppError, AppResult, Dataset, QueryParams, SearchEngine};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    Buildings,
    Grid,
    Table,
}

/// Run one search over the listings dataset.
#[derive(Parser)]
#[command(name = "property-finder")]
#[command(version)]
struct Cli {
    /// Which result shape to produce
    #[arg(value_enum)]
    view: View,

    /// Search parameters as a query string, e.g. "transactionType=For+Sale&minPrice=500000"
    #[arg(default_value = "")]
    query: String,

    /// Config file (defaults to config/property_finder.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset file, overriding the config
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Write an .xlsx file with this name into the export directory instead of printing JSON
    #[arg(long)]
    xlsx: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let using_builtin_defaults = cli.config.is_none() && !AppConfig::default_file_exists();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::load_default(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if using_builtin_defaults {
        log::info!("{DEFAULT_CONFIG_PATH} not found, using built-in defaults");
    }

    if let Err(e) = run(&cli, &config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
    let dataset_path = cli
        .dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.dataset.path));
    let dataset = Dataset::from_json_file(&dataset_path)?;

    let engine = SearchEngine::new(&dataset);
    let params = QueryParams::from_query_string(&cli.query);

    match (cli.view, &cli.xlsx) {
        (View::Buildings, None) => print_json(&engine.buildings(&params)),
        (View::Grid, None) => print_json(&engine.grid(&params)),
        (View::Table, None) => print_json(&engine.table(&params)),
        (View::Buildings, Some(name)) => {
            let results = engine.buildings(&params);
            let bytes = export_buildings_xlsx(&results.records, &config.export.sheet_name)?;
            write_export(&config.export.directory, name, &bytes)
        }
        (View::Table, Some(name)) => {
            let results = engine.table(&params);
            let bytes = export_table_xlsx(&results.records, &config.export.sheet_name)?;
            write_export(&config.export.directory, name, &bytes)
        }
        (View::Grid, Some(_)) => Err(AppError::BadRequest(
            "xlsx export is available for the buildings and table views".to_string(),
        )),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_export(directory: &str, name: &str, bytes: &[u8]) -> AppResult<()> {
    fs::create_dir_all(directory)?;
    let path = Path::new(directory).join(name);
    fs::write(&path, bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
