use std::fs::File;
use std::io::Read;
use std::path::Path;

use scraper::{Html, Selector};

use crate::error::TableScrapeError;

/// One extraction session over one saved page: acquiring the session
/// parses the document, extraction walks it, release is the session going
/// out of scope. A session is created per request and never shared.
pub struct ScrapeSession {
	document: Html,
}

impl ScrapeSession {
	pub fn from_file(path: &Path) -> Result<Self, TableScrapeError> {
		let mut file = File::open(path)?;
		let mut html = String::new();
		file.read_to_string(&mut html)?;

		Ok(Self::from_html(&html))
	}

	pub fn from_html(html: &str) -> Self {
		ScrapeSession {
			document: Html::parse_document(html),
		}
	}

	/// Flatten `table#<table_id>` into one text line per row, header row
	/// first, cell texts joined by single spaces.
	pub fn table_lines(&self, table_id: &str) -> Result<Vec<String>, TableScrapeError> {
		let table_selector = format!("table#{table_id}");
		let table_selector =
			Selector::parse(&table_selector).map_err(|_| TableScrapeError::invalid_selector(&table_selector))?;
		let row_selector = Selector::parse("tr").map_err(|_| TableScrapeError::invalid_selector("tr"))?;

		let table = self
			.document
			.select(&table_selector)
			.next()
			.ok_or_else(|| TableScrapeError::table_not_found(table_id))?;

		let mut lines = Vec::new();
		for row in table.select(&row_selector) {
			let text = row.text().collect::<Vec<_>>().join(" ");
			let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
			if !line.is_empty() {
				lines.push(line);
			}
		}

		Ok(lines)
	}
}
