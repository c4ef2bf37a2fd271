use anyhow::Result;
use quiltt::app::App;
use quiltt::{ConfigPaths, HeadlessTerminal};

fn main() -> Result<()> {
    // Routes all log::info!() etc. from every crate to stderr.
    let level = quiltt::debug::init_log_bridge();
    log::info!("Starting quiltt {} (log level {level})", quiltt::VERSION);

    // The reload timer and the terminal share one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;

    let mut app = App::new(ConfigPaths::default(), HeadlessTerminal::new());
    runtime.block_on(app.run(shutdown_signal()));

    log::info!(
        "Exited after {} config reload(s)",
        app.reload_count()
    );
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
