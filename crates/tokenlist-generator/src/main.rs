use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;
use tokenlist_generator::{
    config::{PublicConfig, DEFAULT_NETWORK_ID},
    tokenlist::{self, GenerateOptions},
};
use tracing_subscriber::EnvFilter;

mod args;

use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();
    // stdout is reserved for the summary line
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PublicConfig::load(&args.config)
        .await
        .wrap_err("Failed to load network config")?;
    tracing::info!(
        default_network_id = config
            .default_network_id
            .or(args.chain_id)
            .unwrap_or(DEFAULT_NETWORK_ID),
        networks = config.networks.len(),
        "Loaded config from {}",
        args.config.display()
    );

    let options = GenerateOptions {
        tokens_dir: args.tokens_dir,
        rpc_override: args.rpc_url,
        list_name: args.list_name,
        timeout: Duration::from_secs(args.timeout),
    };

    let token_list = tokenlist::generate(&config, &options).await?;
    token_list.write(&args.output).await?;

    println!(
        "Wrote {} tokens to {}",
        token_list.tokens.len(),
        args.output.display()
    );

    Ok(())
}
