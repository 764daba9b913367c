use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureParseError {
	#[error("Fixture table has no header line")]
	EmptyTable,

	#[error("Fixture row has {count} tokens, which matches no known layout")]
	UnknownLayout { count: usize },

	#[error("Invalid {field} value: {token}")]
	InvalidNumber {
		field: &'static str,
		token: String,
		source: ParseIntError,
	},
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsParseError {
	#[error("Statistics table is missing row {row}")]
	MissingRow { row: usize },

	#[error("Statistics row has {found} values, expected {expected}")]
	WrongValueCount { found: usize, expected: usize },

	#[error("Invalid {category} value: {token}")]
	InvalidValue {
		category: &'static str,
		token: String,
		source: ParseFloatError,
	},
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdvancedStatisticsError {
	#[error("Cannot compute {metric}: {denominator} is zero")]
	ZeroDenominator {
		metric: &'static str,
		denominator: &'static str,
	},
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
	#[error("Invalid month selection: {month}")]
	InvalidMonth { month: String },

	#[error("Invalid year selection: {year}")]
	InvalidYear { year: String },

	#[error("Invalid team abbreviation: {abbreviation}")]
	InvalidTeamAbbreviation { abbreviation: String },
}

impl FixtureParseError {
	pub fn unknown_layout(count: usize) -> Self {
		FixtureParseError::UnknownLayout { count }
	}

	pub fn invalid_number(field: &'static str, token: &str, source: ParseIntError) -> Self {
		FixtureParseError::InvalidNumber {
			field,
			token: token.to_string(),
			source,
		}
	}
}

impl StatisticsParseError {
	pub fn missing_row(row: usize) -> Self {
		StatisticsParseError::MissingRow { row }
	}

	pub fn invalid_value(category: &'static str, token: &str, source: ParseFloatError) -> Self {
		StatisticsParseError::InvalidValue {
			category,
			token: token.to_string(),
			source,
		}
	}
}

impl AdvancedStatisticsError {
	pub fn zero_denominator(metric: &'static str, denominator: &'static str) -> Self {
		AdvancedStatisticsError::ZeroDenominator { metric, denominator }
	}
}

impl SelectionError {
	pub fn invalid_month(month: &str) -> Self {
		SelectionError::InvalidMonth { month: month.to_string() }
	}

	pub fn invalid_year(year: u16) -> Self {
		SelectionError::InvalidYear { year: year.to_string() }
	}

	pub fn invalid_team_abbreviation(abbreviation: &str) -> Self {
		SelectionError::InvalidTeamAbbreviation {
			abbreviation: abbreviation.to_string(),
		}
	}
}
