use bugboard::adapters::ReqwestHttpClient;
use bugboard::app::{App, AppMessage};
use bugboard::config::{CliCommand, Config, USAGE};
use bugboard::repository::HttpIssueRepository;
use bugboard::terminal::{setup_panic_hook, TerminalManager};
use bugboard::{logging, ui};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound between redraw checks when nothing else happens
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env().wrap_err("invalid environment configuration")?;
    let config = match config.apply_args(std::env::args().skip(1))? {
        CliCommand::Run(config) => config,
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Version => {
            println!("bugboard {}", VERSION);
            return Ok(());
        }
    };

    color_eyre::install()?;

    if let Err(err) = logging::init(config.log_file.as_deref()) {
        eprintln!("bugboard: logging disabled: {}", err);
    }
    tracing::info!(api_url = %config.api_url, "Starting bugboard {}", VERSION);

    // Restore the terminal on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));

    if let Err(err) = &result {
        tracing::error!("Exited with error: {:?}", err);
    }
    result
}

async fn run(config: Config) -> Result<()> {
    let client = ReqwestHttpClient::with_timeout(config.request_timeout)
        .map_err(|e| eyre!("failed to build HTTP client: {}", e))?;
    let repo = HttpIssueRepository::new(config.api_url.clone(), client);
    let mut app = App::new(Arc::new(repo), &config);

    let mut manager = TerminalManager::new()?;
    app.start();
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!("Terminal event error: {}", err);
                        return Err(err.into());
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Shutting down");
            return Ok(());
        }
    }
}
