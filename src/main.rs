use anyhow::{Context, Result};
use folio::catalog::{Catalog, CatalogController, BUILTIN_CATALOG};
use folio::config::Config;
use folio::logger::init_file_logging;
use folio::ui;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(flag) = args.first() {
        match flag.as_str() {
            "--generate-config" => {
                let path = match args.get(1) {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("❌ Unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    init_file_logging(&config.logging)?;

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => BUILTIN_CATALOG.clone(),
    };

    let mut controller = CatalogController::new(catalog)?;
    if let Err(e) = controller.set_filter(&config.ui.default_filter) {
        log::warn!("Ignoring default_filter from config: {}", e);
    }

    ui::run_app(config, controller).await
}

fn print_usage() {
    println!("Usage: folio [--generate-config [PATH]]");
    println!();
    println!("  --generate-config [PATH]  Write a default config file (defaults to the XDG config dir)");
    println!("  -h, --help                Show this message");
}
