use std::future;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use mello::app::{App, AppMessage};
use mello::cli::{parse_args, run_cli_command};
use mello::error::MelloError;
use mello::startup::{init_logging, AppConfig};
use mello::terminal::{setup_panic_hook, TerminalManager};
use mello::ui;

fn main() -> Result<()> {
    // CLI commands run before any terminal setup
    if let Some(code) = run_cli_command(parse_args(std::env::args())) {
        std::process::exit(code);
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            let err = MelloError::from(err);
            eprintln!("mello: {err}\n  hint: {}", err.recovery_hint());
            std::process::exit(err.category().exit_code());
        }
    };
    let log_path = init_logging(&config);

    color_eyre::install()?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(&config))?;

    if let Some(path) = log_path {
        tracing::info!(path = %path.display(), "mello exited");
    }
    Ok(())
}

async fn run(config: &AppConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let (width, height) = crossterm::terminal::size()?;

    let mut app = App::new(config);
    app.update_terminal_dimensions(width, height);

    let result = run_app(manager.terminal(), &mut app, config).await;
    manager.restore()?;

    if let Ok(snapshot) = serde_json::to_string(&app.snapshot()) {
        tracing::debug!(%snapshot, "final state");
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // select! needs the receiver by value
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(config.tick);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(text);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.should_quit = true;
                    }
                }
            }

            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => future::pending().await,
                }
            } => {
                if let Some(msg) = message {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quit requested");
            break;
        }
    }

    Ok(())
}
