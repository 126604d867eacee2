// Menagerie: animal habitat simulation driven by commands on stdin

use std::io::{self, Read};
use std::process;

use edulab::menagerie::engine::MenagerieEngine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error: cannot read stdin: {}", e);
        process::exit(1);
    }

    let mut engine = MenagerieEngine::new();
    let run_result = engine.run(&input);

    let stdout = io::stdout();
    if let Err(e) = engine.transcript().write_to(stdout.lock()) {
        eprintln!("Error: cannot write stdout: {}", e);
        process::exit(1);
    }

    match run_result {
        Ok(()) => {
            tracing::info!(lines = engine.transcript().len(), "run complete");
        }
        Err(e) => {
            eprintln!("Input error: {}", e);
            process::exit(1);
        }
    }
}
