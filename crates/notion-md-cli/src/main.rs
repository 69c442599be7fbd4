use anyhow::{Context, Result};
use notion_md_config::{Config, TOKEN_ENV_VAR};
use notion_md_engine::{
    NotionClient, NotionClientOptions, convert_to_markdown_with_depth, extract_block_id,
};
use std::{env, process};

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <block-id-or-url>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} cec15681-9083-4e1f-a0ae-72d268507aab");
    eprintln!("  {program} https://www.notion.so/10xall/By-name-cec1568190834e1fa0ae72d268507aab");
    eprintln!();
    eprintln!("The API token is read from {TOKEN_ENV_VAR} or the `token` key in");
    eprintln!("{}", Config::config_path().display());
}

fn run(input: &str) -> Result<String> {
    let block_id = extract_block_id(input)?;
    log::info!("Exporting block {block_id}");

    let config = Config::load_or_default()?;
    let token = config.resolve_token(env::var(TOKEN_ENV_VAR).ok())?;

    let client = NotionClient::with_options(
        token,
        NotionClientOptions {
            base_url: config.api_base_url,
            notion_version: config.notion_version,
            page_size: config.page_size,
            max_retries: config.max_retries,
        },
    );

    convert_to_markdown_with_depth(&client, &block_id, config.max_depth)
        .context("Error fetching blocks")
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("notion-md");

    if args.len() != 2 {
        print_usage(program);
        process::exit(1);
    }

    match run(&args[1]) {
        Ok(markdown) => print!("{markdown}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
