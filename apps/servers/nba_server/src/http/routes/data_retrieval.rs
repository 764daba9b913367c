use axum::routing::get;
use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::http::handlers::{advanced_statistics, fixtures};
use crate::http::serve::ApiContext;

pub fn routes(context: ApiContext) -> Router {
	let cors = CorsLayer::new().allow_methods([Method::GET]).allow_origin(Any);

	Router::new()
		.route("/data-retrieval/fixtures", get(fixtures::get_fixtures))
		.route("/data-retrieval/advanced-statistics", get(advanced_statistics::get_advanced_statistics))
		.layer(cors)
		.with_state(context)
}
