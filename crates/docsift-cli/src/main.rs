//! docsift - summarize or query documents and web pages with an LLM.

use clap::Parser;
use docsift_cli::{init_tracing, Cli, Config, OutputSink, Pipeline};
use docsift_llm::{CompletionClient, OpenAiProvider};
use std::io;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docsift_cli::Result<()> {
    // A missing .env file is fine; the key may already be in the environment
    dotenvy::dotenv().ok();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.llm.model = model;
    }

    let provider = OpenAiProvider::new(config.api_key()?, &config.llm.model)?
        .with_base_url(&config.llm.base_url);
    let client = CompletionClient::new(provider)
        .with_system_prompt(&config.llm.system_prompt)
        .with_max_tokens(config.llm.max_tokens);

    let pipeline = Pipeline::from_config(&config.extractor, client)?;
    let summary = pipeline.run(&cli.inputs, cli.query.as_deref())?;
    info!(
        chunks = summary.chunk_count,
        completion_calls = summary.completion_calls,
        "Processing complete"
    );

    OutputSink::new(cli.output).emit(&summary.text, &mut io::stdout().lock())?;
    Ok(())
}
