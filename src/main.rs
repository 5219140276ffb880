mod error;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::error::ErrorCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Level file to process (YAML or JSON)
    #[arg(value_name = "LEVEL")]
    pub level: PathBuf,

    /// Glass item config (YAML or JSON)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Where to write the processed level
    #[arg(short, long, value_name = "FILE", default_value = "out.json")]
    pub output: PathBuf,

    /// Log and skip panes that fail instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout.
            let _ = err.print();
            return if err.use_stderr() {
                ErrorCode::Usage.into()
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.verbose);

    match run::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            err.code.into()
        }
    }
}
