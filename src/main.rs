use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use van_configurator::config::Settings;
use van_configurator::configurator::{Action, Configurator};
use van_configurator::export::{export_csv, export_json};
use van_configurator::loader::{builtin_assets, builtin_catalog, load_assets, load_catalog};
use van_configurator::logging::{init_logging, LogConfig};
use van_configurator::submit::Web3FormsClient;
use van_configurator::ui::App;

#[derive(Parser, Debug)]
#[command(name = "van-configurator")]
#[command(about = "Van Configurator - pick a chassis, package and add-ons, see price and layers")]
#[command(version)]
struct Args {
    /// Settings file (defaults to the per-user config.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog JSON instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Asset table JSON instead of the built-in one
    #[arg(long, value_name = "FILE")]
    assets: Option<PathBuf>,

    /// Select an id before starting (repeatable, applied in order)
    #[arg(long = "select", value_name = "ID")]
    select: Vec<String>,

    /// The customer supplies the van
    #[arg(long)]
    owns_van: bool,

    /// Export the summary to CSV and exit
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the summary to JSON and exit
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?;
    let headless = args.csv.is_some() || args.json.is_some();

    let mut log_config = LogConfig::from_verbosity(args.verbose);
    if args.verbose == 0 {
        if let Some(level) = settings.log_level()? {
            log_config = log_config.with_level(level);
        }
    }
    let log_file = args.log_file.clone().or_else(|| settings.logging.file.clone());
    // Raw-mode terminal: the UI only logs to a file.
    if headless || log_file.is_some() {
        let log_config = log_config.with_log_file(log_file);
        init_logging(&log_config).wrap_err("failed to open log file")?;
    }

    let catalog = match args.catalog.as_ref().or(settings.catalog.as_ref()) {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    let assets = match args.assets.as_ref().or(settings.assets.as_ref()) {
        Some(path) => load_assets(path)?,
        None => builtin_assets()?,
    };

    let mut configurator = Configurator::new(catalog, assets);
    for id in &args.select {
        if !configurator.select(id) {
            warn!(%id, "selection ignored, category is still locked");
        }
    }
    if args.owns_van {
        configurator.apply(Action::SetOwnsVan(true));
    }

    if headless {
        let summary = configurator.summary();

        if let Some(csv_path) = &args.csv {
            export_csv(&summary, csv_path)?;
            println!("Exported to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&summary, json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        return Ok(());
    }

    let mut app = App::new(configurator);
    match settings.submission.access_key.as_deref() {
        Some(key) => match Web3FormsClient::new(settings.endpoint(), key) {
            Ok(client) => app = app.with_endpoint(Arc::new(client)),
            Err(err) => warn!(error = %err, "form submission disabled"),
        },
        None => warn!("no access key configured, form submission disabled"),
    }

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
