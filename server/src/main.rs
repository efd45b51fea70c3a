use tokio::net::TcpListener;
use todo_server::{Config, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let addr = config.address();
    let store = Store::seeded();

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, records = store.len().await, "listening, ctrl+c to exit");
    todo_server::run(listener, store).await
}
