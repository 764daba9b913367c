mod config;
mod http;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config);

	http::serve(config).await
}

fn init_tracing(config: &Config) {
	let directives = config
		.rust_log
		.clone()
		.unwrap_or_else(|| "nba_server=debug,tower_http=debug".to_string());

	tracing_subscriber::fmt().with_env_filter(EnvFilter::new(directives)).init();
}
