use crate::error::StatisticsParseError;
use crate::schema::{SeasonTotals, STAT_CATEGORIES, STAT_CATEGORY_COUNT};

/// Fixed row positions inside the team-and-opponent table: the header is
/// line 0, the team totals sit on line 1 and the opponent totals on line
/// 5, with per-game, rank and year-over-year rows in between.
const TEAM_ROW: usize = 1;
const OPPONENT_ROW: usize = 5;

/// Slice the team and opponent totals out of a statistics table.
pub fn extract_season_totals(lines: &[String]) -> Result<(SeasonTotals, SeasonTotals), StatisticsParseError> {
	let team = totals_from_row(lines, TEAM_ROW)?;
	let opponent = totals_from_row(lines, OPPONENT_ROW)?;

	Ok((team, opponent))
}

fn totals_from_row(lines: &[String], row: usize) -> Result<SeasonTotals, StatisticsParseError> {
	let line = lines.get(row).ok_or_else(|| StatisticsParseError::missing_row(row))?;

	// The first token is the row label ("Team" / "Opponent").
	let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
	if tokens.len() != STAT_CATEGORY_COUNT {
		return Err(StatisticsParseError::WrongValueCount {
			found: tokens.len(),
			expected: STAT_CATEGORY_COUNT,
		});
	}

	let mut values = [0.0; STAT_CATEGORY_COUNT];
	for (value, (category, token)) in values.iter_mut().zip(STAT_CATEGORIES.into_iter().zip(tokens)) {
		*value = repair_leading_zero(token)
			.parse()
			.map_err(|source| StatisticsParseError::invalid_value(category, token, source))?;
	}

	Ok(SeasonTotals::from_values(values))
}

/// Percentage columns are written without a leading zero (".459").
fn repair_leading_zero(token: &str) -> String {
	if token.starts_with('.') {
		format!("0{token}")
	} else {
		token.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn statistics_lines() -> Vec<String> {
		[
			"G MP FG FGA FG% 3P 3PA 3P% 2P 2PA 2P% FT FTA FT% ORB DRB TRB AST STL BLK TOV PF PTS",
			"Team 82 19805 3272 7125 .459 1028 2852 .360 2244 4273 .525 1678 2175 .771 870 2871 3741 2034 602 425 1121 1711 8250",
			"Team/G 82 241.5 39.9 86.9 .459 12.5 34.8 .360 27.4 52.1 .525 20.5 26.5 .771 10.6 35.0 45.6 24.8 7.3 5.2 13.7 20.9 100.6",
			"Lg Rank 15 20 14 10 18 12 9 16 13 11 17 8 7 21 19 6 10 12 14 13 22 18 9",
			"Year/Year 0 0.2 1.4 -0.5 .004 0.9 1.2 .002 0.5 -1.7 .003 -0.3 -0.4 .001 0.2 1.1 1.3 0.8 0.1 0.4 -0.6 0.3 2.1",
			"Opponent 82 19805 3189 7035 .453 986 2783 .354 2203 4252 .518 1636 2112 .775 842 2822 3664 1994 578 398 1092 1745 8000",
		]
		.into_iter()
		.map(String::from)
		.collect()
	}

	#[test]
	fn test_extracts_fixed_row_positions() {
		let (team, opponent) = extract_season_totals(&statistics_lines()).unwrap();

		assert_eq!(team.games, 82.0);
		assert_eq!(team.points, 8250.0);
		assert_eq!(team.turnovers, 1121.0);
		assert_eq!(opponent.points, 8000.0);
		assert_eq!(opponent.offensive_rebounds, 842.0);
	}

	#[test]
	fn test_repairs_leading_zero_decimals() {
		let (team, opponent) = extract_season_totals(&statistics_lines()).unwrap();

		assert_eq!(team.field_goal_percentage, 0.459);
		assert_eq!(team.three_point_percentage, 0.360);
		assert_eq!(opponent.free_throw_percentage, 0.775);
	}

	#[test]
	fn test_missing_opponent_row_is_reported() {
		let lines = statistics_lines()[..4].to_vec();

		assert_eq!(extract_season_totals(&lines), Err(StatisticsParseError::missing_row(5)));
	}

	#[test]
	fn test_wrong_value_count_is_reported() {
		let mut lines = statistics_lines();
		lines[1] = "Team 82 19805".to_string();

		assert_eq!(
			extract_season_totals(&lines),
			Err(StatisticsParseError::WrongValueCount { found: 2, expected: 23 })
		);
	}

	#[test]
	fn test_non_numeric_value_is_reported() {
		let mut lines = statistics_lines();
		lines[5] = lines[5].replace("8000", "80o0");

		assert!(matches!(
			extract_season_totals(&lines),
			Err(StatisticsParseError::InvalidValue { category: "PTS", .. })
		));
	}
}
