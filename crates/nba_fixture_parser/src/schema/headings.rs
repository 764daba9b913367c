/// Header columns that carry nothing the fixture record keeps.
const DROPPED_HEADINGS: [&str; 3] = ["(ET)", "Notes", "Arena"];

/// Positional renames applied after the drop pass. Each entry is only
/// applied when the expected source literal sits at the expected position.
const HEADING_RENAMES: [(usize, &str, &str); 6] = [
	(1, "Start", "Tip-Off Time"),
	(2, "Visitor/Neutral", "Away Team"),
	(3, "PTS", "Away PTS"),
	(4, "Home/Neutral", "Home Team"),
	(5, "PTS", "Home PTS"),
	(6, "Attend.", "Attendance"),
];

/// Derive the canonical column order from the table's header line.
pub fn normalize_headings(header_line: &str) -> Vec<String> {
	let mut headings: Vec<String> = header_line
		.split_whitespace()
		.filter(|heading| !DROPPED_HEADINGS.contains(heading))
		.map(str::to_string)
		.collect();

	for &(position, source, renamed) in &HEADING_RENAMES {
		if headings.get(position).is_some_and(|heading| heading == source) {
			headings[position] = renamed.to_string();
		}
	}

	headings
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalizes_full_header() {
		let header = "Date Start (ET) Visitor/Neutral PTS Home/Neutral PTS Attend. Arena Notes";

		assert_eq!(
			normalize_headings(header),
			vec!["Date", "Tip-Off Time", "Away Team", "Away PTS", "Home Team", "Home PTS", "Attendance"]
		);
	}

	#[test]
	fn test_unexpected_columns_pass_through_unrenamed() {
		let header = "Date Start Road PTS Home/Neutral PTS Attend.";

		assert_eq!(
			normalize_headings(header),
			vec!["Date", "Tip-Off Time", "Road", "Away PTS", "Home Team", "Home PTS", "Attendance"]
		);
	}

	#[test]
	fn test_short_header_does_not_panic() {
		assert_eq!(normalize_headings("Date Start"), vec!["Date", "Tip-Off Time"]);
	}
}
