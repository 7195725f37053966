use anyhow::Context;
use siteseed::store::{DocumentStore, MemoryStore};
use siteseed::web;
use std::{env, net::IpAddr, net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr = SocketAddr::new(host_from_env()?, port_from_env()?);

    // One store handle per process, shared across requests for its lifetime.
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let app = web::router(store);

    println!("siteseed listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn host_from_env() -> anyhow::Result<IpAddr> {
    let raw = env::var("SITESEED_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    raw.parse()
        .with_context(|| format!("invalid SITESEED_ADDR='{raw}'"))
}

fn port_from_env() -> anyhow::Result<u16> {
    let raw = env::var("SITESEED_PORT").unwrap_or_else(|_| "3001".to_string());
    raw.parse::<u16>()
        .with_context(|| format!("invalid SITESEED_PORT='{raw}'"))
}
