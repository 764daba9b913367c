use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "NBA Data Retrieval Server")]
#[command(about = "Serves fixtures and advanced statistics from saved basketball-reference pages", long_about = None)]
pub struct Config {
	/// Address to bind the HTTP listener on
	#[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
	pub bind_addr: String,

	/// Directory holding the saved pages
	#[arg(long, env = "PAGE_DIR", default_value = "pages")]
	pub page_dir: PathBuf,

	/// Log filter, e.g. `nba_server=debug,tower_http=debug`
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,
}
