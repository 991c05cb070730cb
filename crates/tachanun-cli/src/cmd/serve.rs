use anyhow::Context;
use tachanun_core::config::Config;
use std::path::Path;

pub fn run(
    config_path: &Path,
    host: Option<&str>,
    port: Option<u16>,
    open_browser: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;
    let host = host.unwrap_or(config.server.host.as_str()).to_string();
    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;

        tokio::select! {
            res = tachanun_server::serve_on(listener, open_browser) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
