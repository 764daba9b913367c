use nba_fixture_parser::schema::{Month, SeasonYear, TeamAbbreviation};

/// Element id of the month-of-fixtures table.
pub const SCHEDULE_TABLE_ID: &str = "schedule";

/// Element id of the season totals table.
pub const TEAM_AND_OPPONENT_TABLE_ID: &str = "team_and_opponent";

/// File name of a saved month-of-fixtures page.
pub fn fixtures_page_name(month: Month, year: SeasonYear) -> String {
	format!("NBA_{year}_games-{month}.html")
}

/// File name of a saved team-season page.
pub fn team_page_name(team: TeamAbbreviation, year: SeasonYear) -> String {
	format!("{team}_{year}.html")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_page_names() {
		let year = SeasonYear::new(2023).unwrap();

		assert_eq!(fixtures_page_name(Month::October, year), "NBA_2023_games-october.html");
		assert_eq!(team_page_name(TeamAbbreviation::DEN, year), "DEN_2023.html");
	}
}
