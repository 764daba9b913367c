use serde::Serialize;

/// Number of statistical categories in a team-and-opponent table row.
pub const STAT_CATEGORY_COUNT: usize = 23;

/// Category labels, in source column order.
pub const STAT_CATEGORIES: [&str; STAT_CATEGORY_COUNT] = [
	"G", "MP", "FG", "FGA", "FG%", "3P", "3PA", "3P%", "2P", "2PA", "2P%", "FT", "FTA", "FT%", "ORB",
	"DRB", "TRB", "AST", "STL", "BLK", "TOV", "PF", "PTS",
];

/// Raw season box-score sums for one side of a team-and-opponent table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonTotals {
	pub games: f64,
	pub minutes: f64,
	pub field_goals: f64,
	pub field_goal_attempts: f64,
	pub field_goal_percentage: f64,
	pub three_point_makes: f64,
	pub three_point_attempts: f64,
	pub three_point_percentage: f64,
	pub two_point_makes: f64,
	pub two_point_attempts: f64,
	pub two_point_percentage: f64,
	pub free_throws: f64,
	pub free_throw_attempts: f64,
	pub free_throw_percentage: f64,
	pub offensive_rebounds: f64,
	pub defensive_rebounds: f64,
	pub total_rebounds: f64,
	pub assists: f64,
	pub steals: f64,
	pub blocks: f64,
	pub turnovers: f64,
	pub personal_fouls: f64,
	pub points: f64,
}

impl SeasonTotals {
	/// Build totals from a row of values in source column order.
	pub fn from_values(values: [f64; STAT_CATEGORY_COUNT]) -> Self {
		SeasonTotals {
			games: values[0],
			minutes: values[1],
			field_goals: values[2],
			field_goal_attempts: values[3],
			field_goal_percentage: values[4],
			three_point_makes: values[5],
			three_point_attempts: values[6],
			three_point_percentage: values[7],
			two_point_makes: values[8],
			two_point_attempts: values[9],
			two_point_percentage: values[10],
			free_throws: values[11],
			free_throw_attempts: values[12],
			free_throw_percentage: values[13],
			offensive_rebounds: values[14],
			defensive_rebounds: values[15],
			total_rebounds: values[16],
			assists: values[17],
			steals: values[18],
			blocks: values[19],
			turnovers: values[20],
			personal_fouls: values[21],
			points: values[22],
		}
	}
}
