use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use reach_server::engine::EngineConfig;
use reach_server::graph::load_feed;
use reach_server::web::{AppState, create_router};

/// Default location of the schedule feed.
const DEFAULT_FEED_PATH: &str = "data/feed.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let feed_path =
        std::env::var("REACH_FEED").unwrap_or_else(|_| DEFAULT_FEED_PATH.to_string());

    println!("Loading schedule feed from {feed_path}...");
    let graph = match load_feed(&feed_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to load schedule feed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} stations and {} routes",
        graph.station_count(),
        graph.route_count()
    );

    let state = AppState::new(graph, EngineConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit reachability server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health        - Health check");
    println!("  GET /reachability  - Reachable stations (stationId, maxTransfers)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
