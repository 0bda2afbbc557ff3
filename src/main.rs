use nooph::app::App;
use nooph::cli::{parse_args, run_cli_command};
use nooph::error::ShellError;
use nooph::startup::{init_logging, ShellConfig};
use nooph::terminal::{setup_panic_hook, TerminalManager};
use nooph::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Instant;

fn main() -> Result<()> {
    run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let config = match ShellConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };

    match init_logging() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging enabled"),
        Ok(None) => {}
        Err(e) if e.is_recoverable() => eprintln!("Warning: {}", e.user_message()),
        Err(e) => return Err(e.into()),
    }

    // Restore the terminal before any panic is printed
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_shell(config))
}

/// Mount the shell, run it until quit, and unmount it.
async fn run_shell(config: ShellConfig) -> Result<()> {
    let mut term = TerminalManager::new()?;
    let mut app = App::new(config);
    tracing::info!("shell mounted");

    let result = run_app(&mut term, &mut app).await;

    // Cancels any send still in flight
    drop(app);
    term.restore();
    tracing::info!("shell unmounted");
    result
}

async fn run_app(term: &mut TerminalManager, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Take the receiver out of the app so select! can own it
    let mut message_rx = app.message_rx.take().ok_or(ShellError::ChannelClosed)?;
    let frame_tick = app.config.frame_tick;

    loop {
        if app.needs_redraw {
            term.draw(|f| ui::render(f, &mut *app))?;
        }

        let timeout = tokio::time::sleep(frame_tick);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(ShellError::Event(e).into()),
                    None => {
                        tracing::warn!("terminal event stream ended");
                        return Ok(());
                    }
                }
            }

            message = message_rx.recv() => {
                match message {
                    Some(message) => app.handle_message(message),
                    // The app holds a sender, so this only happens on teardown
                    None => return Err(ShellError::ChannelClosed.into()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
