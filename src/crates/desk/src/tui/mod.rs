//! TUI module for the ratatui-based terminal interface.
//!
//! Owns the terminal lifecycle and the main event loop. Assist calls are
//! spawned as tokio tasks so the interface keeps redrawing while a request
//! is in flight; the affected view is marked busy until the completion
//! lands (or is dropped as stale if the user navigated away).

pub mod app;
pub mod events;
pub mod ui;

pub use app::{App, AssistJob, AssistOutcome, Screen};
pub use events::{Event, EventHandler};

use crate::config::UiSection;
use crate::Result;
use assist::AssistClient;
use desk_core::store::TicketStore;
use tokio::sync::mpsc;
use tracing::info;

/// Run the TUI application until the user quits.
pub async fn run(store: TicketStore, assist: AssistClient, ui_config: UiSection) -> Result<()> {
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    info!("Starting TUI mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);
    let event_handler = EventHandler::new(ui_config.tick_rate_ms);
    let (assist_tx, mut assist_rx) = mpsc::unbounded_channel::<AssistOutcome>();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Apply any assist completions that landed since the last frame.
        while let Ok(outcome) = assist_rx.try_recv() {
            app.apply_assist(outcome);
        }

        match event_handler.next()? {
            Event::Tick => {}
            Event::Resize(_, _) => {}
            Event::Key(key) => {
                if let Some(job) = app.handle_key(key) {
                    spawn_assist(job, assist.clone(), assist_tx.clone());
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI mode exited");
    Ok(())
}

/// Run an assist job off the event loop. The client is total, so the task
/// always produces an outcome; staleness is decided by the app when it
/// arrives.
fn spawn_assist(
    job: AssistJob,
    client: AssistClient,
    tx: mpsc::UnboundedSender<AssistOutcome>,
) {
    tokio::spawn(async move {
        let outcome = match job {
            AssistJob::Analyze {
                request_id,
                title,
                description,
            } => {
                let analysis = client.analyze_ticket(&title, &description).await;
                AssistOutcome::Analysis { request_id, analysis }
            }
            AssistJob::Draft { request_id, ticket } => {
                let text = client.draft_reply(&ticket).await;
                AssistOutcome::Draft {
                    request_id,
                    ticket_id: ticket.id,
                    text,
                }
            }
        };
        // The receiver is gone only when the UI is shutting down.
        let _ = tx.send(outcome);
    });
}
