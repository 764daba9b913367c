use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::http::routes;

#[derive(Clone)]
pub struct ApiContext {
	pub config: Arc<Config>,
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
	let bind_addr = config.bind_addr.clone();
	let context = ApiContext { config: Arc::new(config) };

	let app = api_router(context).layer(
		ServiceBuilder::new()
			// Enables logging. Use `RUST_LOG=tower_http=debug`
			.layer(TraceLayer::new_for_http()),
	);

	let listener = TcpListener::bind(&bind_addr).await?;
	tracing::debug!("listening on {}", listener.local_addr()?);
	axum::serve(listener, app).await?;

	Ok(())
}

fn api_router(context: ApiContext) -> Router {
	routes::data_retrieval::routes(context)
}
