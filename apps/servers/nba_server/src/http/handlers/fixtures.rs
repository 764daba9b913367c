use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use bref_html_tables::pages::{self, SCHEDULE_TABLE_ID};
use bref_html_tables::ScrapeSession;
use nba_fixture_parser::parsers::parse_fixture_table;
use nba_fixture_parser::schema::{FixtureRecord, Month, SeasonYear};

use crate::http::serve::ApiContext;
use crate::http::Result;

#[derive(Debug, Deserialize)]
pub struct FixtureSelection {
	month: String,
	year: u16,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixturesResponse {
	month: String,
	year: u16,
	fixture_count: usize,
	fixtures: Vec<FixtureRecord>,
}

pub async fn get_fixtures(
	State(context): State<ApiContext>,
	Query(selection): Query<FixtureSelection>,
) -> Result<Json<FixturesResponse>> {
	let month = selection.month.parse::<Month>()?;
	let year = SeasonYear::new(selection.year)?;

	let page_path = context.config.page_dir.join(pages::fixtures_page_name(month, year));
	let session = ScrapeSession::from_file(&page_path)?;
	let lines = session.table_lines(SCHEDULE_TABLE_ID)?;

	let table = parse_fixture_table(&lines)?;
	tracing::info!(%month, %year, fixtures = table.fixtures.len(), "extracted fixtures");

	Ok(Json(FixturesResponse {
		month: month.to_string(),
		year: year.value(),
		fixture_count: table.fixtures.len(),
		fixtures: table.fixtures,
	}))
}
