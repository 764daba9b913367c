use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use bref_html_tables::pages::{self, TEAM_AND_OPPONENT_TABLE_ID};
use bref_html_tables::ScrapeSession;
use nba_fixture_parser::parsers::extract_season_totals;
use nba_fixture_parser::schema::{AdvancedStatistics, SeasonYear, TeamAbbreviation};

use crate::http::serve::ApiContext;
use crate::http::Result;

#[derive(Debug, Deserialize)]
pub struct SeasonSelection {
	team: String,
	year: u16,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStatisticsResponse {
	team: String,
	year: u16,
	advanced_statistics: AdvancedStatistics,
}

pub async fn get_advanced_statistics(
	State(context): State<ApiContext>,
	Query(selection): Query<SeasonSelection>,
) -> Result<Json<AdvancedStatisticsResponse>> {
	let team = selection.team.parse::<TeamAbbreviation>()?;
	let year = SeasonYear::new(selection.year)?;

	let page_path = context.config.page_dir.join(pages::team_page_name(team, year));
	let session = ScrapeSession::from_file(&page_path)?;
	let lines = session.table_lines(TEAM_AND_OPPONENT_TABLE_ID)?;

	let (team_totals, opponent_totals) = extract_season_totals(&lines)?;
	let advanced_statistics = AdvancedStatistics::from_totals(&team_totals, &opponent_totals)?;
	tracing::info!(%team, %year, "derived advanced statistics");

	Ok(Json(AdvancedStatisticsResponse {
		team: team.to_string(),
		year: year.value(),
		advanced_statistics,
	}))
}
