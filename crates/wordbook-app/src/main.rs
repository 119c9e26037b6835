use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::AsyncWriteExt;
use tokio::signal;
use wordbook_config::Config;
use wordbook_core::SearchInput;

pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);
    logging::init(config.log_format);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        match cli.word {
            Some(word) => lookup_once(config, word).await,
            None => run(config).await,
        }
    });

    // The stdin reader may still be parked in a blocking read
    runtime.shutdown_timeout(Duration::from_millis(250));
    result
}

/// Single lookup for `--word`
async fn lookup_once(config: Config, word: String) -> anyhow::Result<()> {
    let ui_config = config.ui.clone();
    let state = AppState::new(config);

    let mut input = SearchInput::new();
    input.set_value(word.as_str());

    let result = state.session.search(word).await;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(ui::render(&input, &result, &ui_config).as_bytes())
        .await?;
    stdout.flush().await?;

    Ok(())
}

/// Interactive session until stdin closes or Ctrl+C
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut stopping = false;
    let mut first_error = None;

    loop {
        tokio::select! {
            _ = &mut shutdown, if !stopping => {
                tracing::info!("Shutdown requested");
                stopping = true;
                controller.shutdown();
            }
            joined = tasks.join_next() => {
                match joined {
                    None => break,
                    Some(Ok(Ok(()))) => tracing::debug!("task exited"),
                    Some(Ok(Err(e))) => {
                        tracing::error!("task failed: {e}");
                        first_error.get_or_insert(e);
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        controller.shutdown();
                    }
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
