//! Event handling and event loop plumbing for the TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// UI events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard key pressed
    Key(KeyEvent),

    /// Terminal resized
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

/// Event handler polling the terminal on a dedicated thread.
pub struct EventHandler {
    #[allow(dead_code)]
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    _thread_handle: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = channel();
        let sender_clone = sender.clone();

        let thread_handle = thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms.max(10));
            let mut last_tick = std::time::Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if sender_clone.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if sender_clone.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender_clone.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = std::time::Instant::now();
                }
            }
        });

        Self {
            sender,
            receiver,
            _thread_handle: Some(thread_handle),
        }
    }

    /// Receive the next event (blocking).
    pub fn next(&self) -> Result<Event, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }
}
