use crate::error::FixtureParseError;
use crate::schema::{
	normalize_headings, FixtureRecord, RowLayout, ATTENDANCE_NOT_REPORTED, AWAY_NAME_START, NOISE_TOKENS,
};

/// Repeated header lines inside the table body start with this marker.
const HEADER_MARKER: &str = "Date";

/// A parsed month of fixtures: canonical column order plus one record per
/// source row, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTable {
	pub headings: Vec<String>,
	pub fixtures: Vec<FixtureRecord>,
}

/// Parse a whole schedule table: first line is the header, the rest are
/// data rows. Repeated header lines are dropped; any malformed data row
/// fails the batch.
pub fn parse_fixture_table(lines: &[String]) -> Result<FixtureTable, FixtureParseError> {
	let (header, rows) = lines.split_first().ok_or(FixtureParseError::EmptyTable)?;
	let headings = normalize_headings(header);

	let mut fixtures = Vec::new();
	for line in rows {
		if is_repeated_header(line) {
			continue;
		}
		fixtures.push(parse_fixture_line(line)?);
	}

	Ok(FixtureTable { headings, fixtures })
}

/// Parse one data line into a fixture record.
pub fn parse_fixture_line(line: &str) -> Result<FixtureRecord, FixtureParseError> {
	let tokens = filter_tokens(line);
	let layout = RowLayout::classify(&tokens)?;
	assemble_record(&tokens, layout)
}

/// Split a line on whitespace and drop the known noise tokens.
pub fn filter_tokens(line: &str) -> Vec<&str> {
	line.split_whitespace().filter(|token| !NOISE_TOKENS.contains(token)).collect()
}

fn is_repeated_header(line: &str) -> bool {
	line.get(..HEADER_MARKER.len()) == Some(HEADER_MARKER)
}

fn assemble_record(tokens: &[&str], layout: RowLayout) -> Result<FixtureRecord, FixtureParseError> {
	let away_points_index = AWAY_NAME_START + layout.away_name_len();
	let home_start = away_points_index + 1;
	let home_points_index = home_start + layout.home_name_len();

	let attendance = if layout.has_attendance() {
		parse_attendance(tokens[home_points_index + 1])?
	} else {
		ATTENDANCE_NOT_REPORTED
	};

	Ok(FixtureRecord {
		date: tokens[1..4].join(" "),
		tip_off_time: tokens[4].to_string(),
		away_team: tokens[AWAY_NAME_START..away_points_index].join(" "),
		away_points: parse_points("away points", tokens[away_points_index])?,
		home_team: tokens[home_start..home_points_index].join(" "),
		home_points: parse_points("home points", tokens[home_points_index])?,
		attendance,
	})
}

fn parse_points(field: &'static str, token: &str) -> Result<u32, FixtureParseError> {
	token.parse().map_err(|source| FixtureParseError::invalid_number(field, token, source))
}

/// Attendance figures carry thousands separators in the source.
fn parse_attendance(token: &str) -> Result<u32, FixtureParseError> {
	token
		.replace(',', "")
		.parse()
		.map_err(|source| FixtureParseError::invalid_number("attendance", token, source))
}
