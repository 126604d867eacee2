// Gradebook: student/exam/grade record store driven by a command file

use std::fs;
use std::process;

use edulab::gradebook::engine::GradebookEngine;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("gradebook");
        eprintln!("Usage: {} [input.txt [output.txt]]", program_name);
        process::exit(1);
    }
    let input_path = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_INPUT);
    let output_path = args.get(2).map(|s| s.as_str()).unwrap_or(DEFAULT_OUTPUT);

    let source = match fs::read_to_string(input_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let mut engine = GradebookEngine::new();
    let run_result = engine.run(&source);

    // Lines produced before a stream error are still written out, matching
    // the one-line-per-command contract for everything that did run.
    let output = fs::File::create(output_path)
        .and_then(|file| engine.transcript().write_to(file));
    if let Err(e) = output {
        eprintln!("Error: cannot write '{}': {}", output_path, e);
        process::exit(1);
    }

    match run_result {
        Ok(()) => {
            tracing::info!(
                commands_answered = engine.transcript().len(),
                "run complete"
            );
        }
        Err(e) => {
            eprintln!("Input error: {}", e);
            process::exit(1);
        }
    }
}
