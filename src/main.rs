use brutekit::cli::Cli;
use brutekit::config::load_config;
use brutekit::errors::AppError;
use brutekit::logger;
use brutekit::metrics::Metrics;
use brutekit::runner::{self, RunSummary, BANNER};
use console::style;
use prometheus::Registry;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_normalized();
    logger::init_logging();

    match execute(&cli) {
        Ok(summary) => {
            let ok = style("+").green();
            println!("\n[{}] Generated {} mutations", ok, summary.mutations);
            println!("[{}] Results written to: {}", ok, summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n[{}] {}", style("Debug").red().for_stderr(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute(cli: &Cli) -> Result<RunSummary, AppError> {
    let cfg = load_config(cli)?;
    if !cfg.quiet {
        println!("{}", BANNER);
    }

    let registry = Registry::new();
    let metrics = Metrics::new(&registry)?;
    runner::run(&cfg, &metrics)
}
