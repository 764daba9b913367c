use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableScrapeError {
	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("Invalid table selector: {selector}")]
	InvalidSelector { selector: String },

	#[error("No table with id {table_id} on the page")]
	TableNotFound { table_id: String },
}

impl TableScrapeError {
	pub fn invalid_selector(selector: &str) -> Self {
		TableScrapeError::InvalidSelector {
			selector: selector.to_string(),
		}
	}

	pub fn table_not_found(table_id: &str) -> Self {
		TableScrapeError::TableNotFound {
			table_id: table_id.to_string(),
		}
	}
}
