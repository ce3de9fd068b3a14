// Lucky draw entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Open database
// 4. Create mpsc channels
// 5. Start the draw engine (loads saved state, claims the session slot)
// 6. Spawn app logic task
// 7. Run the TUI until the user quits
// 8. Cleanup on exit

use std::sync::Arc;

use luckydraw::app;
use luckydraw::config;
use luckydraw::tui;
use luckydraw_core::{Database, DrawPoolEngine, SharedStore, SystemRandom};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Lucky draw starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: pick_amount={}, auto_shuffle={} every {}ms",
        config.draw.pick_amount, config.auto_shuffle.enabled, config.auto_shuffle.period_ms
    );

    // 3. Open database
    let db = Database::open(&config.database.path).context("failed to open database")?;
    info!("Database opened at {}", config.database.path);
    let store: SharedStore = Arc::new(db);

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 5. Start the draw engine. Confirmations go through the TUI.
    let engine = DrawPoolEngine::start(
        store,
        Box::new(SystemRandom::from_entropy()),
        Box::new(app::ChannelConfirm::new(ui_tx.clone())),
    );
    let pick_amount = config.draw.pick_amount;
    let app_state = app::AppState::new(config, engine);

    // 6. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 7. Run the TUI event loop (blocking until user quits)
    info!("Application ready");
    if let Err(e) = tui::run(ui_rx, cmd_tx, pick_amount).await {
        error!("TUI error: {}", e);
    }

    // 8. Cleanup: wait for app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Lucky draw shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("luckydraw.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("luckydraw=info,luckydraw_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
