use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use webhook_listener::{sink::StdoutSink, utils::logger, web, AppContext, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load();

    // 初始化日志系统
    let _guard = logger::init(config.log_dir.as_deref())?;
    info!("Starting webhook listener ({})", env!("GIT_HASH"));

    let ctx = Arc::new(AppContext {
        sink: Arc::new(StdoutSink::stdout()),
    });

    if let Err(e) = web::start_server(ctx, config.addr()).await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
