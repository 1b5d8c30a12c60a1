use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use eventpro_server::config::Config;
use eventpro_server::routes::create_routes;
use eventpro_server::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config);
    {
        let dashboard = state.dashboard.read().await;
        tracing::info!(
            events = dashboard.events.len(),
            proposals = dashboard.proposals.len(),
            organizer = %dashboard.organizer.name,
            "Dashboard seeded"
        );
    }

    let app = create_routes(state, config.production);

    let addr = config.addr();
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
