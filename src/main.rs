use std::sync::Arc;

use bookstore_server::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration is read exactly once, at process start
    let cfg = config::Config::from_env()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(config::AppState::new(&cfg));

    // Only the production artifact binds a socket; every other mode embeds
    // the handler stack in-process instead.
    if !state.config.is_production() {
        logger::log_standby(&state.config);
        return Ok(());
    }

    let addr = state.config.socket_addr()?;
    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &state.config);

    server::run(listener, state).await;
    Ok(())
}
