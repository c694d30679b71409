use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use tidyrs::app::{FruitSession, Prompt};
use tidyrs::config::InventoryConfig;
use tidyrs::inventory::BincodeFileStore;

#[derive(Parser)]
#[command(name = "fruit-inventory", version, about = "Interactive fruit inventory manager")]
struct Args {
    /// Inventory file (overrides `store_file` in the config)
    #[arg(short, long)]
    store: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> tidyrs::Result<()> {
    let config = match &args.config {
        Some(path) => InventoryConfig::from_file(path)?,
        None => InventoryConfig::default(),
    };
    let path = args
        .store
        .unwrap_or_else(|| PathBuf::from(&config.store_file));

    let mut session = FruitSession::open(BincodeFileStore::new(path), &config.starter_items)?;
    let stdin = io::stdin();
    let mut prompt = Prompt::new(BufReader::new(stdin.lock()), io::stdout());
    session.run(&mut prompt)
}

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
