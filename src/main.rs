use clap::Parser;
use gamify::cli::commands::Cli;
use gamify::cli::handlers;
use gamify::io::config_io::load_config;
use gamify::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    // Logs go to a file: the TUI owns stdout
    let log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gamify starting");

    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("error: {}", e);
            1
        }
    };

    tracing::info!("gamify exiting");
    // Flush buffered log lines before exit() skips destructors
    drop(log_guard);
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    handlers::dispatch(cli, config)
}
