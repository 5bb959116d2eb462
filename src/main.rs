use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

mod config;
mod data;
mod engine;
mod ingest;
mod render;
mod util;

use crate::config::{AppConfig, CliArgs};
use crate::data::DataContext;
use crate::engine::AnalysisEngine;
use crate::util::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = match AppConfig::new(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Build the data snapshot, attaching an uploaded file if given
    let mut ctx = DataContext::sample();
    if let Some(path) = &args.upload {
        match ingest::load_upload(path) {
            Ok(upload) => {
                info!("Attached upload '{}'", upload.file_name);
                ctx.uploaded = Some(upload);
            }
            Err(e) => {
                error!("Failed to load upload: {}", e);
                return Err(e.into());
            }
        }
    }

    let engine = AnalysisEngine::new(config.engine);

    match &args.question {
        Some(question) => {
            let result = engine.analyze(question, &ctx).await;
            render::print_result(&result, args.json)?;
        }
        None => run_prompt(&engine, &ctx, args.json).await?,
    }

    Ok(())
}

/// Interactive prompt loop; exits on EOF or a "quit"/"exit" line.
async fn run_prompt(
    engine: &AnalysisEngine,
    ctx: &DataContext,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Ask a question about your data (or 'quit' to exit).");
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let question = line.trim();
        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        let result = engine.analyze(question, ctx).await;
        render::print_result(&result, as_json)?;
    }

    Ok(())
}
