use serde::Serialize;

use crate::error::AdvancedStatisticsError;
use crate::schema::SeasonTotals;

/// Derived efficiency metrics for one team season, published under the
/// category labels used by the source site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvancedStatistics {
	#[serde(rename = "PPG")]
	pub points_per_game: f64,
	#[serde(rename = "PAPG")]
	pub points_allowed_per_game: f64,
	#[serde(rename = "ORtg")]
	pub offensive_rating: f64,
	#[serde(rename = "DRtg")]
	pub defensive_rating: f64,
	#[serde(rename = "NRtg")]
	pub net_rating: f64,
	#[serde(rename = "ASTpG")]
	pub assists_per_game: f64,
	#[serde(rename = "AST%")]
	pub assist_rate: f64,
	#[serde(rename = "AST/TOV")]
	pub assist_to_turnover_ratio: f64,
	#[serde(rename = "DRBpG")]
	pub defensive_rebounds_per_game: f64,
	#[serde(rename = "ORBpG")]
	pub offensive_rebounds_per_game: f64,
	#[serde(rename = "TRBpG")]
	pub total_rebounds_per_game: f64,
	#[serde(rename = "DRB%")]
	pub defensive_rebound_percentage: f64,
	#[serde(rename = "ORB%")]
	pub offensive_rebound_percentage: f64,
	#[serde(rename = "TRB%")]
	pub total_rebound_percentage: f64,
	#[serde(rename = "TOV%")]
	pub turnover_percentage: f64,
	#[serde(rename = "EFG%")]
	pub effective_field_goal_percentage: f64,
	#[serde(rename = "TSA")]
	pub true_shooting_attempts: f64,
	#[serde(rename = "TS%")]
	pub true_shooting_percentage: f64,
	#[serde(rename = "Pace")]
	pub pace: f64,
	#[serde(rename = "TIE")]
	pub team_impact_estimate: f64,
}

impl AdvancedStatistics {
	/// Derive the full metrics record from one season's team and opponent
	/// totals.
	pub fn from_totals(team: &SeasonTotals, opponent: &SeasonTotals) -> Result<Self, AdvancedStatisticsError> {
		AdvancedStatisticsCalculator::new(team, opponent).calculate()
	}
}

/// Computes the derived metrics from one totals pair. Every published
/// value is rounded to three decimal places independently; a zero
/// denominator anywhere is a data-quality failure, not a zero result.
pub struct AdvancedStatisticsCalculator<'a> {
	team: &'a SeasonTotals,
	opponent: &'a SeasonTotals,
}

impl<'a> AdvancedStatisticsCalculator<'a> {
	pub fn new(team: &'a SeasonTotals, opponent: &'a SeasonTotals) -> Self {
		AdvancedStatisticsCalculator { team, opponent }
	}

	pub fn calculate(&self) -> Result<AdvancedStatistics, AdvancedStatisticsError> {
		let offensive_rating = self.offensive_rating()?;
		let defensive_rating = self.defensive_rating()?;

		Ok(AdvancedStatistics {
			points_per_game: self.per_game("PPG", self.team.points)?,
			points_allowed_per_game: self.per_game("PAPG", self.opponent.points)?,
			offensive_rating,
			defensive_rating,
			// Net rating subtracts the already-rounded ratings so the
			// published values reconcile exactly.
			net_rating: round3(offensive_rating - defensive_rating),
			assists_per_game: self.per_game("ASTpG", self.team.assists)?,
			assist_rate: self.assist_rate()?,
			assist_to_turnover_ratio: self.assist_to_turnover_ratio()?,
			defensive_rebounds_per_game: self.per_game("DRBpG", self.team.defensive_rebounds)?,
			offensive_rebounds_per_game: self.per_game("ORBpG", self.team.offensive_rebounds)?,
			total_rebounds_per_game: self.per_game("TRBpG", self.team.total_rebounds)?,
			defensive_rebound_percentage: self.defensive_rebound_percentage()?,
			offensive_rebound_percentage: self.offensive_rebound_percentage()?,
			total_rebound_percentage: self.total_rebound_percentage()?,
			turnover_percentage: self.turnover_percentage()?,
			effective_field_goal_percentage: self.effective_field_goal_percentage()?,
			true_shooting_attempts: self.true_shooting_attempts(),
			true_shooting_percentage: self.true_shooting_percentage()?,
			pace: self.pace()?,
			team_impact_estimate: self.team_impact_estimate()?,
		})
	}

	fn per_game(&self, metric: &'static str, statistic: f64) -> Result<f64, AdvancedStatisticsError> {
		Ok(round3(checked_div(metric, "games played", statistic, self.team.games)?))
	}

	/// Points scored per 100 estimated possessions.
	fn offensive_rating(&self) -> Result<f64, AdvancedStatisticsError> {
		let possessions = self.possessions()?;

		Ok(round3(checked_div("ORtg", "estimated possessions", self.team.points, possessions)? * 100.0))
	}

	/// Points allowed per 100 opponent estimated possessions.
	fn defensive_rating(&self) -> Result<f64, AdvancedStatisticsError> {
		let opponent_possessions = self.opponent_possessions()?;

		Ok(round3(
			checked_div("DRtg", "opponent estimated possessions", self.opponent.points, opponent_possessions)? * 100.0,
		))
	}

	/// Share of made field goals that were assisted.
	fn assist_rate(&self) -> Result<f64, AdvancedStatisticsError> {
		Ok(round3(checked_div("AST%", "field goals made", self.team.assists, self.team.field_goals)? * 100.0))
	}

	fn assist_to_turnover_ratio(&self) -> Result<f64, AdvancedStatisticsError> {
		Ok(round3(checked_div("AST/TOV", "turnovers", self.team.assists, self.team.turnovers)?))
	}

	fn defensive_rebound_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let chances = self.team.defensive_rebounds + self.opponent.offensive_rebounds;

		Ok(round3(checked_div("DRB%", "defensive rebound chances", self.team.defensive_rebounds, chances)? * 100.0))
	}

	fn offensive_rebound_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let chances = self.team.offensive_rebounds + self.opponent.defensive_rebounds;

		Ok(round3(checked_div("ORB%", "offensive rebound chances", self.team.offensive_rebounds, chances)? * 100.0))
	}

	fn total_rebound_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let chances = self.team.total_rebounds + self.opponent.total_rebounds;

		Ok(round3(checked_div("TRB%", "rebound chances", self.team.total_rebounds, chances)? * 100.0))
	}

	/// Estimated share of plays that end in a committed turnover.
	fn turnover_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let plays = self.team.field_goal_attempts + 0.44 * self.team.free_throw_attempts + self.team.turnovers;

		Ok(round3(checked_div("TOV%", "plays", 100.0 * self.team.turnovers, plays)?))
	}

	/// Field goal percentage with made threes weighted half a make higher.
	fn effective_field_goal_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let weighted_makes = self.team.field_goals + 0.5 * self.team.three_point_makes;

		Ok(round3(
			checked_div("EFG%", "field goal attempts", weighted_makes, self.team.field_goal_attempts)? * 100.0,
		))
	}

	fn true_shooting_attempts(&self) -> f64 {
		round3(self.team.field_goal_attempts + 0.44 * self.team.free_throw_attempts)
	}

	fn true_shooting_percentage(&self) -> Result<f64, AdvancedStatisticsError> {
		let true_shooting_attempts = self.true_shooting_attempts();

		Ok(round3(
			checked_div("TS%", "true shooting attempts", self.team.points, 2.0 * true_shooting_attempts)? * 100.0,
		))
	}

	/// Estimated possessions per 48 minutes, averaged over both sides.
	fn pace(&self) -> Result<f64, AdvancedStatisticsError> {
		let possessions = self.possessions()? + self.opponent_possessions()?;

		Ok(round3(
			48.0 * checked_div("Pace", "minutes played", possessions, 2.0 * (self.team.minutes / 5.0))?,
		))
	}

	/// Share of total statistical production credited to the team.
	fn team_impact_estimate(&self) -> Result<f64, AdvancedStatisticsError> {
		let team_impact = impact_term(self.team);
		let combined_impact = team_impact + impact_term(self.opponent);

		Ok(round3(checked_div("TIE", "combined impact total", team_impact, combined_impact)? * 100.0))
	}

	fn possessions(&self) -> Result<f64, AdvancedStatisticsError> {
		let team_term = possession_term("estimated possessions", self.team, self.opponent)?;
		let opponent_term = possession_term("estimated possessions", self.opponent, self.team)?;

		Ok(round3(0.5 * (team_term + opponent_term)))
	}

	fn opponent_possessions(&self) -> Result<f64, AdvancedStatisticsError> {
		let opponent_term = possession_term("opponent estimated possessions", self.opponent, self.team)?;
		let team_term = possession_term("opponent estimated possessions", self.team, self.opponent)?;

		Ok(round3(0.5 * (opponent_term + team_term)))
	}
}

/// One side's contribution to the possession estimate. The rebound share
/// divides this side's offensive rebounds by the chances against the
/// other side's defensive rebounds.
fn possession_term(metric: &'static str, side: &SeasonTotals, other: &SeasonTotals) -> Result<f64, AdvancedStatisticsError> {
	let rebound_share = checked_div(
		metric,
		"offensive rebound chances",
		side.offensive_rebounds,
		side.offensive_rebounds + other.defensive_rebounds,
	)?;

	Ok(side.field_goal_attempts + 0.4 * side.free_throw_attempts
		- 1.07 * rebound_share * (side.field_goal_attempts - side.field_goals)
		+ side.turnovers)
}

fn impact_term(side: &SeasonTotals) -> f64 {
	side.points + side.field_goals + side.free_throws
		- side.field_goal_attempts
		- side.free_throw_attempts
		+ side.defensive_rebounds
		+ side.offensive_rebounds / 2.0
		+ side.assists
		+ side.steals
		+ side.blocks / 2.0
		- side.personal_fouls
		- side.turnovers
}

fn round3(value: f64) -> f64 {
	(value * 1000.0).round() / 1000.0
}

fn checked_div(
	metric: &'static str,
	denominator_name: &'static str,
	numerator: f64,
	denominator: f64,
) -> Result<f64, AdvancedStatisticsError> {
	if denominator == 0.0 {
		Err(AdvancedStatisticsError::zero_denominator(metric, denominator_name))
	} else {
		Ok(numerator / denominator)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::STAT_CATEGORY_COUNT;

	fn zeroed() -> SeasonTotals {
		SeasonTotals::from_values([0.0; STAT_CATEGORY_COUNT])
	}

	/// Totals chosen so the possession estimate comes out to a round
	/// 7000.0 on both sides: each side's rebound share is exactly 0.5 and
	/// each missed-shot correction is exactly 1070.
	fn clean_team() -> SeasonTotals {
		SeasonTotals {
			games: 82.0,
			minutes: 19680.0,
			field_goals: 5000.0,
			field_goal_attempts: 7000.0,
			field_goal_percentage: 0.714,
			three_point_makes: 1400.0,
			three_point_attempts: 3000.0,
			three_point_percentage: 0.467,
			two_point_makes: 3600.0,
			two_point_attempts: 4000.0,
			two_point_percentage: 0.9,
			free_throws: 1200.0,
			free_throw_attempts: 1000.0,
			free_throw_percentage: 0.8,
			offensive_rebounds: 1000.0,
			defensive_rebounds: 1000.0,
			total_rebounds: 2000.0,
			assists: 2000.0,
			steals: 600.0,
			blocks: 400.0,
			turnovers: 670.0,
			personal_fouls: 1530.0,
			points: 8400.0,
		}
	}

	fn clean_opponent() -> SeasonTotals {
		SeasonTotals {
			games: 82.0,
			minutes: 19680.0,
			field_goals: 4800.0,
			field_goal_attempts: 6800.0,
			field_goal_percentage: 0.706,
			three_point_makes: 1200.0,
			three_point_attempts: 2800.0,
			three_point_percentage: 0.429,
			two_point_makes: 3600.0,
			two_point_attempts: 4000.0,
			two_point_percentage: 0.9,
			free_throws: 1100.0,
			free_throw_attempts: 1000.0,
			free_throw_percentage: 0.733,
			offensive_rebounds: 1000.0,
			defensive_rebounds: 1000.0,
			total_rebounds: 2000.0,
			assists: 1800.0,
			steals: 500.0,
			blocks: 300.0,
			turnovers: 870.0,
			personal_fouls: 1450.0,
			points: 7700.0,
		}
	}

	#[test]
	fn test_per_game_metrics() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(statistics.points_per_game, 102.439);
		assert_eq!(statistics.points_allowed_per_game, 93.902);
		assert_eq!(statistics.assists_per_game, 24.39);
		assert_eq!(statistics.defensive_rebounds_per_game, 12.195);
		assert_eq!(statistics.offensive_rebounds_per_game, 12.195);
		assert_eq!(statistics.total_rebounds_per_game, 24.39);
	}

	#[test]
	fn test_ratings_from_clean_possessions() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		// Both possession estimates are 7000.0 by construction.
		assert_eq!(statistics.offensive_rating, 120.0);
		assert_eq!(statistics.defensive_rating, 110.0);
		assert_eq!(statistics.net_rating, 10.0);
	}

	#[test]
	fn test_net_rating_subtracts_rounded_ratings() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(statistics.net_rating, round3(statistics.offensive_rating - statistics.defensive_rating));
	}

	#[test]
	fn test_shooting_and_ball_control_metrics() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(statistics.assist_rate, 40.0);
		assert_eq!(statistics.assist_to_turnover_ratio, 2.985);
		assert_eq!(statistics.turnover_percentage, 8.261);
		assert_eq!(statistics.effective_field_goal_percentage, 81.429);
		assert_eq!(statistics.true_shooting_attempts, 7440.0);
		assert_eq!(statistics.true_shooting_percentage, 56.452);
	}

	#[test]
	fn test_rebounding_percentages() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(statistics.defensive_rebound_percentage, 50.0);
		assert_eq!(statistics.offensive_rebound_percentage, 50.0);
		assert_eq!(statistics.total_rebound_percentage, 50.0);
	}

	#[test]
	fn test_pace_and_team_impact() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(statistics.pace, 85.366);
		assert_eq!(statistics.team_impact_estimate, 53.937);
	}

	#[test]
	fn test_zero_turnovers_fail_assist_to_turnover_ratio() {
		let mut team = clean_team();
		team.turnovers = 0.0;

		assert_eq!(
			AdvancedStatistics::from_totals(&team, &clean_opponent()),
			Err(AdvancedStatisticsError::zero_denominator("AST/TOV", "turnovers"))
		);
	}

	#[test]
	fn test_zero_attempts_fail_shooting_metrics() {
		let team = zeroed();
		let opponent = clean_opponent();

		let calculator = AdvancedStatisticsCalculator::new(&team, &opponent);
		assert_eq!(
			calculator.true_shooting_percentage(),
			Err(AdvancedStatisticsError::zero_denominator("TS%", "true shooting attempts"))
		);
		assert_eq!(
			calculator.effective_field_goal_percentage(),
			Err(AdvancedStatisticsError::zero_denominator("EFG%", "field goal attempts"))
		);
		assert_eq!(
			calculator.turnover_percentage(),
			Err(AdvancedStatisticsError::zero_denominator("TOV%", "plays"))
		);
	}

	#[test]
	fn test_zero_games_fail_per_game_metrics() {
		let mut team = clean_team();
		team.games = 0.0;

		assert_eq!(
			AdvancedStatistics::from_totals(&team, &clean_opponent()),
			Err(AdvancedStatisticsError::zero_denominator("PPG", "games played"))
		);
	}

	#[test]
	fn test_recomputation_is_deterministic() {
		let first = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();
		let second = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();

		assert_eq!(first, second);
	}

	#[test]
	fn test_serializes_under_source_labels() {
		let statistics = AdvancedStatistics::from_totals(&clean_team(), &clean_opponent()).unwrap();
		let json = serde_json::to_value(statistics).unwrap();

		assert_eq!(json["PPG"], 102.439);
		assert_eq!(json["NRtg"], 10.0);
		assert_eq!(json["AST/TOV"], 2.985);
		assert_eq!(json["TS%"], 56.452);
		assert_eq!(json["TIE"], 53.937);
	}
}
