/// CLI: reads a job description (JSON) from a file or stdin and writes the
/// generated TypeScript file it describes.
///
/// Usage:
///   typed-const-gen job.json
///   typed-const-gen --format enum < job.json
///   typed-const-gen --no-timestamp job.json
///
/// Job shape:
///   {"type": "Mode", "data": ["x", "y"], "variableName": "Mode",
///    "outputPath": "gen/mode.ts", "typeFormat": "type"}
use std::process::ExitCode;

use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;
use typed_const_gen::{write_typed_variable_to_file, TypeFormat, WriteOptions};

const USAGE: &str = "Usage: typed-const-gen [--format plain|enum|type] [--no-timestamp] [job.json]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut format: Option<TypeFormat> = None;
    let mut no_timestamp = false;
    let mut file_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                i += 1;
                let Some(name) = args.get(i) else {
                    eprintln!("--format needs a value. {USAGE}");
                    return ExitCode::FAILURE;
                };
                format = match name.as_str() {
                    "plain" | "enum" | "type" => name.parse().ok(),
                    other => {
                        eprintln!("Unknown format: {other}. Use 'plain', 'enum', or 'type'.");
                        return ExitCode::FAILURE;
                    }
                };
            }
            "--no-timestamp" => no_timestamp = true,
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                eprintln!("  Reads a job from file or stdin, writes the generated file.");
                return ExitCode::SUCCESS;
            }
            path => file_path = Some(path),
        }
        i += 1;
    }

    let json_str = match file_path {
        Some(path) => match tokio::fs::read_to_string(path).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Cannot read {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
                eprintln!("Cannot read stdin: {e}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let mut opts: WriteOptions = match serde_json::from_str(&json_str) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Invalid job: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = format {
        opts.type_format = format;
    }
    if no_timestamp {
        opts.include_timestamp = false;
    }

    match write_typed_variable_to_file(&opts).await {
        Ok(()) => {
            tracing::info!(path = %opts.output_path.display(), "generated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
