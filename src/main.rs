/*****************************************************************************************
 *
 *  PriceDB – In-memory item price store over HTTP
 *  ----------------------------------------------
 *
 *  /list  /price  /create  /update  /delete   +   /system/{alive,version}
 *
 *****************************************************************************************/

use anyhow::Context;
use axum::serve;
use tokio::net::TcpListener;

use pricedb::app;
use pricedb::config::AppConfig;
use pricedb::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //
    // ────────────────────────────────────────────────────────
    //  Load configuration (config.json or defaults)
    // ────────────────────────────────────────────────────────
    //
    let cfg = AppConfig::load()?;

    //
    // ────────────────────────────────────────────────────────
    //  Configure logging
    // ────────────────────────────────────────────────────────
    //
    logging::init(&cfg.log_level);

    tracing::info!("Starting PriceDB {}", cfg.server_version);
    tracing::debug!("Loaded configuration: {:?}", cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Create the item store from the seed
    // ────────────────────────────────────────────────────────
    //
    let store = cfg.seed_store();
    tracing::info!(items = store.len(), "Item store seeded");

    //
    // ────────────────────────────────────────────────────────
    //  Build Axum app
    // ────────────────────────────────────────────────────────
    //
    let app = app::build_app(store, &cfg);

    //
    // ────────────────────────────────────────────────────────
    //  Bind server and start listening
    // ────────────────────────────────────────────────────────
    //
    let addr = cfg.bind_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind address");
            return Err(e).with_context(|| format!("failed to bind {addr}"));
        }
    };

    tracing::info!("Listening on http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await
        .context("server error")?;

    tracing::info!("Goodbye.");
    Ok(())
}

//
// ─────────────────────────────────────────────────────────────
//  Graceful shutdown handler
// ─────────────────────────────────────────────────────────────
//
async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::warn!("CTRL+C received, shutting down");
}
