use serde::{Deserialize, Serialize};

/// Attendance value published when the source row reports no figure,
/// e.g. bubble or other closed-door games.
pub const ATTENDANCE_NOT_REPORTED: u32 = 0;

/// One played game, assembled from a schedule table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
	pub date: String,
	pub tip_off_time: String,
	pub away_team: String,
	pub away_points: u32,
	pub home_team: String,
	pub home_points: u32,
	pub attendance: u32,
}
