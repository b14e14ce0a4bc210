mod runner;

use clap::Parser;
use std::io::BufRead;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Source line to evaluate; the first line of stdin is read when omitted
    source: Option<String>,
}

/// Logging is off unless `RUST_LOG` is set. Events go to stderr.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(cli: Cli) -> std::io::Result<String> {
    match cli.source {
        Some(source) => Ok(source),
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = read_source(cli)
        .map_err(runner::RunError::from)
        .and_then(|source| runner::execute(&source, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
