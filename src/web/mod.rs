use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod handlers;


use crate::error::ListenerError;
use crate::AppContext;

/// Binds `addr`, announces the port on stdout and serves until the process dies.
pub async fn start_server(ctx: Arc<AppContext>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = bind(addr).await?;
    let port = listener.local_addr().map(|a| a.port()).unwrap_or(addr.port());

    println!("{}", startup_message(port));
    info!("Listening on {}", addr);
    serve(ctx, listener).await?;

    Ok(())
}

pub fn startup_message(port: u16) -> String {
    format!("Starting webhook listener on port {}...", port)
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ListenerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })
}

pub async fn serve(ctx: Arc<AppContext>, listener: TcpListener) -> Result<(), ListenerError> {
    let app = handlers::router(ctx);
    axum::serve(listener, app).await.map_err(ListenerError::Serve)
}
