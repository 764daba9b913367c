use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// Months of an NBA season, October through June.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
	October,
	November,
	December,
	January,
	February,
	March,
	April,
	May,
	June,
}

impl Month {
	pub const ALL: [Month; 9] = [
		Month::October,
		Month::November,
		Month::December,
		Month::January,
		Month::February,
		Month::March,
		Month::April,
		Month::May,
		Month::June,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Month::October => "october",
			Month::November => "november",
			Month::December => "december",
			Month::January => "january",
			Month::February => "february",
			Month::March => "march",
			Month::April => "april",
			Month::May => "may",
			Month::June => "june",
		}
	}
}

impl FromStr for Month {
	type Err = SelectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Month::ALL
			.into_iter()
			.find(|month| month.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| SelectionError::invalid_month(s))
	}
}

impl fmt::Display for Month {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A season's end year, e.g. 2023 for the 2022-23 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonYear(u16);

impl SeasonYear {
	pub const MIN: u16 = 2014;
	pub const MAX: u16 = 2023;

	pub fn new(year: u16) -> Result<Self, SelectionError> {
		if year < Self::MIN || year > Self::MAX {
			Err(SelectionError::invalid_year(year))
		} else {
			Ok(SeasonYear(year))
		}
	}

	pub fn value(self) -> u16 {
		self.0
	}
}

impl FromStr for SeasonYear {
	type Err = SelectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let year = s.parse::<u16>().map_err(|_| SelectionError::InvalidYear { year: s.to_string() })?;
		SeasonYear::new(year)
	}
}

impl fmt::Display for SeasonYear {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Basketball-reference franchise codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamAbbreviation {
	ATL, // Atlanta Hawks
	BOS, // Boston Celtics
	BRK, // Brooklyn Nets
	CHI, // Chicago Bulls
	CHO, // Charlotte Hornets
	CLE, // Cleveland Cavaliers
	DAL, // Dallas Mavericks
	DEN, // Denver Nuggets
	DET, // Detroit Pistons
	GSW, // Golden State Warriors
	HOU, // Houston Rockets
	IND, // Indiana Pacers
	LAC, // Los Angeles Clippers
	LAL, // Los Angeles Lakers
	MEM, // Memphis Grizzlies
	MIA, // Miami Heat
	MIL, // Milwaukee Bucks
	MIN, // Minnesota Timberwolves
	NOP, // New Orleans Pelicans
	NYK, // New York Knicks
	OKC, // Oklahoma City Thunder
	ORL, // Orlando Magic
	PHI, // Philadelphia 76ers
	PHO, // Phoenix Suns
	POR, // Portland Trail Blazers
	SAC, // Sacramento Kings
	SAS, // San Antonio Spurs
	TOR, // Toronto Raptors
	UTA, // Utah Jazz
	WAS, // Washington Wizards
}

impl TeamAbbreviation {
	pub fn as_str(self) -> &'static str {
		match self {
			TeamAbbreviation::ATL => "ATL",
			TeamAbbreviation::BOS => "BOS",
			TeamAbbreviation::BRK => "BRK",
			TeamAbbreviation::CHI => "CHI",
			TeamAbbreviation::CHO => "CHO",
			TeamAbbreviation::CLE => "CLE",
			TeamAbbreviation::DAL => "DAL",
			TeamAbbreviation::DEN => "DEN",
			TeamAbbreviation::DET => "DET",
			TeamAbbreviation::GSW => "GSW",
			TeamAbbreviation::HOU => "HOU",
			TeamAbbreviation::IND => "IND",
			TeamAbbreviation::LAC => "LAC",
			TeamAbbreviation::LAL => "LAL",
			TeamAbbreviation::MEM => "MEM",
			TeamAbbreviation::MIA => "MIA",
			TeamAbbreviation::MIL => "MIL",
			TeamAbbreviation::MIN => "MIN",
			TeamAbbreviation::NOP => "NOP",
			TeamAbbreviation::NYK => "NYK",
			TeamAbbreviation::OKC => "OKC",
			TeamAbbreviation::ORL => "ORL",
			TeamAbbreviation::PHI => "PHI",
			TeamAbbreviation::PHO => "PHO",
			TeamAbbreviation::POR => "POR",
			TeamAbbreviation::SAC => "SAC",
			TeamAbbreviation::SAS => "SAS",
			TeamAbbreviation::TOR => "TOR",
			TeamAbbreviation::UTA => "UTA",
			TeamAbbreviation::WAS => "WAS",
		}
	}
}

impl FromStr for TeamAbbreviation {
	type Err = SelectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ATL" => Ok(TeamAbbreviation::ATL),
			"BOS" => Ok(TeamAbbreviation::BOS),
			"BRK" => Ok(TeamAbbreviation::BRK),
			"CHI" => Ok(TeamAbbreviation::CHI),
			"CHO" => Ok(TeamAbbreviation::CHO),
			"CLE" => Ok(TeamAbbreviation::CLE),
			"DAL" => Ok(TeamAbbreviation::DAL),
			"DEN" => Ok(TeamAbbreviation::DEN),
			"DET" => Ok(TeamAbbreviation::DET),
			"GSW" => Ok(TeamAbbreviation::GSW),
			"HOU" => Ok(TeamAbbreviation::HOU),
			"IND" => Ok(TeamAbbreviation::IND),
			"LAC" => Ok(TeamAbbreviation::LAC),
			"LAL" => Ok(TeamAbbreviation::LAL),
			"MEM" => Ok(TeamAbbreviation::MEM),
			"MIA" => Ok(TeamAbbreviation::MIA),
			"MIL" => Ok(TeamAbbreviation::MIL),
			"MIN" => Ok(TeamAbbreviation::MIN),
			"NOP" => Ok(TeamAbbreviation::NOP),
			"NYK" => Ok(TeamAbbreviation::NYK),
			"OKC" => Ok(TeamAbbreviation::OKC),
			"ORL" => Ok(TeamAbbreviation::ORL),
			"PHI" => Ok(TeamAbbreviation::PHI),
			"PHO" => Ok(TeamAbbreviation::PHO),
			"POR" => Ok(TeamAbbreviation::POR),
			"SAC" => Ok(TeamAbbreviation::SAC),
			"SAS" => Ok(TeamAbbreviation::SAS),
			"TOR" => Ok(TeamAbbreviation::TOR),
			"UTA" => Ok(TeamAbbreviation::UTA),
			"WAS" => Ok(TeamAbbreviation::WAS),
			_ => Err(SelectionError::invalid_team_abbreviation(s)),
		}
	}
}

impl fmt::Display for TeamAbbreviation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_month_from_str() {
		assert_eq!(Month::from_str("october"), Ok(Month::October));
		assert_eq!(Month::from_str("February"), Ok(Month::February));
		assert_eq!(Month::from_str("JUNE"), Ok(Month::June));
		assert!(Month::from_str("july").is_err());
		assert!(Month::from_str("").is_err());
	}

	#[test]
	fn test_month_display_is_page_spelling() {
		assert_eq!(Month::October.to_string(), "october");
		assert_eq!(Month::January.to_string(), "january");
	}

	#[test]
	fn test_season_year_bounds() {
		assert!(SeasonYear::new(2013).is_err());
		assert_eq!(SeasonYear::new(2014).map(SeasonYear::value), Ok(2014));
		assert_eq!(SeasonYear::new(2023).map(SeasonYear::value), Ok(2023));
		assert!(SeasonYear::new(2024).is_err());
	}

	#[test]
	fn test_season_year_from_str() {
		assert_eq!(SeasonYear::from_str("2020").map(SeasonYear::value), Ok(2020));
		assert!(SeasonYear::from_str("20xx").is_err());
	}

	#[test]
	fn test_team_abbreviation_round_trip() {
		for code in ["ATL", "DEN", "GSW", "NOP", "POR", "WAS"] {
			assert_eq!(TeamAbbreviation::from_str(code).unwrap().as_str(), code);
		}
		assert!(TeamAbbreviation::from_str("SEA").is_err());
		assert!(TeamAbbreviation::from_str("den").is_err());
	}
}
