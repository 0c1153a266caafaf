use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Inference endpoint URL used by the direct call
    #[arg(short, long, env = "INFERENCE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Bearer token sent with every request
    #[arg(short = 'k', long, env = "INFERENCE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL the typed client resolves model names against
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Model name or full URL for the typed client (defaults to the endpoint)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Prompt to send
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// YAML config file (defaults to ~/.inference-probe/config.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
