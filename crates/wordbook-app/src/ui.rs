use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use wordbook_config::ui::{OutputFormat, UiConfig};
use wordbook_core::{InputEvent, SearchInput, html_document, render_page};
use wordbook_types::{AppEvent, LookupState};

/// Render the whole page for the configured layout and format
pub fn render(input: &SearchInput, state: &LookupState, ui: &UiConfig) -> String {
    let page = render_page(input, state, ui.layout);

    match ui.format {
        OutputFormat::Text => format!("{}\n", page.to_text()),
        OutputFormat::Html => html_document(&page),
    }
}

/// Terminal front-end: every input line is typed into the search box and
/// submitted with Enter; every state change is written out.
///
/// At end of input the backend is asked to shut down. Updates keep being
/// rendered until it answers with `Shutdown`.
pub async fn ui_loop<R, W>(
    reader: R,
    mut writer: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    ui: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = SearchInput::new();
    let mut lines = reader.lines();
    let mut input_open = true;

    writer
        .write_all(render(&input, &LookupState::Idle, &ui).as_bytes())
        .await?;
    writer.flush().await?;

    tracing::info!("[UI] Ready, layout={:?} format={:?}", ui.layout, ui.format);
    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::info!("[UI] Input closed");
                    input_open = false;
                    if ui_to_app_tx.send(AppEvent::Shutdown).await.is_err() {
                        break;
                    }
                    continue;
                };

                input.set_value("");
                input.type_text(&line);
                if let Some(term) = input.handle(InputEvent::Enter) {
                    ui_to_app_tx.send(AppEvent::Search(term)).await?;
                }
            }
            event = app_to_ui_rx.recv() => {
                match event? {
                    AppEvent::StateChanged(state) => {
                        writer.write_all(render(&input, &state, &ui).as_bytes()).await?;
                        writer.flush().await?;
                    }
                    AppEvent::Shutdown => break,
                    AppEvent::Search(_) => {}
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Stopping");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use wordbook_config::Layout;

    use super::*;

    #[test]
    fn test_render_text_error_page() {
        let mut input = SearchInput::new();
        input.type_text("hejsan");
        let ui = UiConfig::default();

        let out = render(
            &input,
            &LookupState::Error("Word not found in the dictionary".to_string()),
            &ui,
        );

        assert_eq!(out, "[ hejsan ] [Search]\nWord not found in the dictionary\n");
    }

    #[test]
    fn test_render_html_book_page() {
        let ui = UiConfig {
            layout: Layout::Book,
            format: OutputFormat::Html,
        };

        let out = render(&SearchInput::new(), &LookupState::Loading, &ui);

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<p class=\"loading\">Loading...</p>"));
    }
}
