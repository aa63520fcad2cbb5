use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Path to the public config.json
    #[arg(short, long, env = "CONFIG_PATH", default_value = "public/config.json")]
    pub(crate) config: PathBuf,

    /// Directory holding one `<chain id>/` folder of token logos per network
    #[arg(short, long, env = "TOKENS_DIR", default_value = "public/tokens")]
    pub(crate) tokens_dir: PathBuf,

    /// Where to write the token list
    #[arg(short, long, env = "TOKENLIST_PATH", default_value = "public/tokenlist.json")]
    pub(crate) output: PathBuf,

    /// RPC endpoint used for every network instead of the configured ones
    #[arg(long, env = "KASPLEX_RPC")]
    pub(crate) rpc_url: Option<Url>,

    /// Informational default network, used when the config has none
    #[arg(long, env = "CHAIN_ID")]
    pub(crate) chain_id: Option<u64>,

    /// Name of the generated token list
    #[arg(long, default_value = tokenlist_generator::tokenlist::DEFAULT_LIST_NAME)]
    pub(crate) list_name: String,

    /// Per-call RPC timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub(crate) timeout: u64,

    /// The log level
    #[arg(short, long, default_value_t = LevelFilter::INFO)]
    pub(crate) log_level: LevelFilter,
}
