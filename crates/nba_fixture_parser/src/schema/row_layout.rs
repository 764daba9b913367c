use crate::error::FixtureParseError;

/// Tokens that carry no fixture information: overtime markers, the
/// two-token box score link label and the neutral-site flag.
pub const NOISE_TOKENS: [&str; 7] = ["OT", "2OT", "3OT", "4OT", "(IV)", "Box", "Score"];

/// First words that may open a three-word franchise name.
pub const THREE_WORD_STARTERS: [&str; 6] = ["Los", "Golden", "New", "Oklahoma", "Portland", "San"];

/// Last words that confirm a franchise name is three words long.
pub const THREE_WORD_LAST_WORDS: [&str; 8] = [
	"Clippers", "Lakers", "Warriors", "Pelicans", "Knicks", "Thunder", "Blazers", "Spurs",
];

/// The away name always starts after the weekday, the three date tokens
/// and the tip-off time.
pub const AWAY_NAME_START: usize = 5;

/// Smallest row that still holds every field: five prefix tokens, two
/// two-word names, two points values and an attendance figure.
pub const MIN_ROW_TOKENS: usize = 12;

const MAX_ROW_TOKENS: usize = 18;

/// Field layout of one schedule row. The source writes franchise names as
/// one to three words and sometimes omits the attendance figure, so the
/// layout has to be inferred from the filtered token count, with the
/// starter/last-word tables breaking ties between name widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
	/// Two-word away and home names, attendance reported.
	TwoTwo,
	/// Three-word away name, two-word home name.
	ThreeTwo,
	/// Two-word away name, three-word home name.
	TwoThree,
	/// Three-word names on both sides.
	ThreeThree,
	/// Three-word away name on a row with no attendance figure.
	ThreeTwoNoAttendance,
}

impl RowLayout {
	/// Select the layout for a filtered token sequence.
	///
	/// Decision table, most specific first:
	/// 1. 14 tokens with a confirming last word at the away-name boundary
	///    is the no-attendance row.
	/// 2. 17 or 18 tokens always carry two three-word names.
	/// 3. 16 tokens: a starter at the away position claims three words,
	///    then the home position is tested the same way.
	/// 4. 15 tokens: a starter at the away position, else at the home
	///    position, else both names are two words.
	/// 5. 12 to 14 tokens otherwise are the plain two-word row; trailing
	///    venue tokens are ignored.
	/// Anything shorter or longer matches no layout and is malformed.
	pub fn classify(tokens: &[&str]) -> Result<Self, FixtureParseError> {
		let count = tokens.len();
		if !(MIN_ROW_TOKENS..=MAX_ROW_TOKENS).contains(&count) {
			return Err(FixtureParseError::unknown_layout(count));
		}

		let away_starter = THREE_WORD_STARTERS.contains(&tokens[AWAY_NAME_START]);

		Ok(match count {
			14 if THREE_WORD_LAST_WORDS.contains(&tokens[7]) => RowLayout::ThreeTwoNoAttendance,
			17 | 18 => RowLayout::ThreeThree,
			16 if away_starter => {
				if THREE_WORD_STARTERS.contains(&tokens[9]) {
					RowLayout::ThreeThree
				} else {
					RowLayout::ThreeTwo
				}
			}
			16 => RowLayout::TwoThree,
			15 if away_starter => RowLayout::ThreeTwo,
			15 if THREE_WORD_STARTERS.contains(&tokens[8]) => RowLayout::TwoThree,
			_ => RowLayout::TwoTwo,
		})
	}

	pub const fn away_name_len(self) -> usize {
		match self {
			RowLayout::TwoTwo | RowLayout::TwoThree => 2,
			RowLayout::ThreeTwo | RowLayout::ThreeThree | RowLayout::ThreeTwoNoAttendance => 3,
		}
	}

	pub const fn home_name_len(self) -> usize {
		match self {
			RowLayout::TwoTwo | RowLayout::ThreeTwo | RowLayout::ThreeTwoNoAttendance => 2,
			RowLayout::TwoThree | RowLayout::ThreeThree => 3,
		}
	}

	pub const fn has_attendance(self) -> bool {
		!matches!(self, RowLayout::ThreeTwoNoAttendance)
	}
}
