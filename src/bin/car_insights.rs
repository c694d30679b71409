use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use tidyrs::app::{CarSession, JsonSink, Prompt, ReportSink, TextSink};
use tidyrs::config::CleaningConfig;

#[derive(Parser)]
#[command(name = "car-insights", version, about = "Interactive cleanup of a car listings CSV")]
struct Args {
    /// CSV file to load (overrides `data_file` in the config)
    #[arg(short, long)]
    data: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Where "Exit and save" writes the cleaned CSV
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Directory for relative file names and CSV merging
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Emit summaries and outlier reports as JSON lines
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match CleaningConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => CleaningConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_file = data.to_string_lossy().into_owned();
    }
    if let Some(output) = &args.output {
        config.output_file = output.to_string_lossy().into_owned();
    }

    let mut session = CarSession::load(config, &args.dir);
    let stdin = io::stdin();
    let mut prompt = Prompt::new(BufReader::new(stdin.lock()), io::stdout());
    let mut sink: Box<dyn ReportSink> = if args.json {
        Box::new(JsonSink::new(io::stdout()))
    } else {
        Box::new(TextSink::new(io::stdout()))
    };

    match session.run(&mut prompt, sink.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
