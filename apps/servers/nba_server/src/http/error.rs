use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use bref_html_tables::TableScrapeError;
use nba_fixture_parser::error::{AdvancedStatisticsError, FixtureParseError, SelectionError, StatisticsParseError};

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Selection(#[from] SelectionError),

	#[error(transparent)]
	Scrape(#[from] TableScrapeError),

	#[error(transparent)]
	FixtureParse(#[from] FixtureParseError),

	#[error(transparent)]
	StatisticsParse(#[from] StatisticsParseError),

	#[error(transparent)]
	AdvancedStatistics(#[from] AdvancedStatisticsError),
}

impl Error {
	fn status_code(&self) -> StatusCode {
		match self {
			Error::Selection(_) => StatusCode::BAD_REQUEST,
			Error::Scrape(_) | Error::FixtureParse(_) | Error::StatisticsParse(_) => StatusCode::BAD_GATEWAY,
			Error::AdvancedStatistics(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status_code();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		(status, Json(json!({ "message": self.to_string() }))).into_response()
	}
}
