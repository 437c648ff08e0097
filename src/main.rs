use clap::Parser;
use ica_price_watcher::app::{Menu, Outcome, Preset};
use ica_price_watcher::domain::model::ReportDate;
use ica_price_watcher::utils::{logger, validation::Validate};
use ica_price_watcher::{
    CliConfig, DealWatcher, LocalStorage, MockDealSource, StoreDirectory, WatcherConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let loaded = match &cli.config {
        Some(path) => {
            tracing::info!("Loading store directory from {}", path);
            WatcherConfig::from_file(path)
        }
        None => WatcherConfig::builtin(),
    };

    let mut config = match loaded.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Some(output_path) = &cli.output_path {
        config.report.output_path = output_path.clone();
    }
    tracing::info!(
        "Directory has {} stores in {} regions",
        config.store_count(),
        config.directory.regions.len()
    );

    let source = match MockDealSource::new(&config.source.endpoint) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Could not load mock offers: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let watcher = DealWatcher::new(
        source,
        storage,
        StoreDirectory::from_config(&config.directory),
        ReportDate::today(),
    )
    .with_top_n(config.top_n())
    .with_output_dir(config.output_path());

    let preset = Preset {
        mode: cli.mode.clone(),
        region: cli.region.clone(),
        store: cli.store.clone(),
    };

    let stdin = std::io::stdin();
    let mut menu = Menu::new(&watcher, stdin.lock(), std::io::stdout())
        .with_preset(preset)
        .with_summary_examples(config.summary_examples())
        .with_pause(!cli.no_pause);

    match menu.run().await {
        Ok(Outcome::Store(report)) => {
            tracing::info!("Saved {} deals to {}", report.top_deals.len(), report.output_path);
        }
        Ok(Outcome::Summary(summary)) => {
            tracing::info!(
                "Saved best deals of {}/{} stores to {}",
                summary.entries.len(),
                summary.stores_scanned,
                summary.output_path
            );
        }
        Ok(Outcome::Nationwide) => {}
        Ok(Outcome::Rejected(reason)) => {
            tracing::debug!("Menu input rejected: {}", reason);
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}
