//! TUI shell: terminal management, event loop, session handle (impure
//! shell).
//!
//! Everything stateful about the display lives in [`crate::state`]; this
//! module owns the terminal, translates crossterm events into
//! [`AppEvent`]s, and paints the rendered frame. Inbound data and layout
//! commands arrive through a [`SessionHandle`] channel rather than any
//! process-wide singleton, so multiple sessions can coexist in tests.

use crate::config::KeyBindings;
use crate::state::{AppEvent, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Commands injectable into a running session from outside the event
/// loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Replace the displayed buffer.
    ShowBytes(Vec<u8>),
    /// Select a layout by index into the predefined layout list.
    SetLayout(usize),
}

/// Handle for pushing data and layout changes into a running session.
///
/// Returned alongside the app by its constructors. Delivery is
/// fire-and-forget; the display catches up on the next scheduling turn of
/// the event loop.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Sender<SessionCommand>,
}

impl SessionHandle {
    /// Display the given bytes in the session.
    pub fn show_bytes(&self, data: Vec<u8>) {
        let _ = self.tx.send(SessionCommand::ShowBytes(data));
    }

    /// Select the layout at `index`; out-of-range indices are ignored.
    pub fn set_layout(&self, index: usize) {
        let _ = self.tx.send(SessionCommand::SetLayout(index));
    }
}

/// Main TUI application, generic over backend so tests can drive it with
/// `ratatui::backend::TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    commands: Receiver<SessionCommand>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI session in raw mode on the alternate
    /// screen. Returns the app plus the handle callers use to push bytes.
    ///
    /// A failure after raw mode is enabled restores the terminal before
    /// the error propagates, so a broken startup never leaves the shell
    /// unusable.
    pub fn new() -> Result<(Self, SessionHandle), TuiError> {
        enable_raw_mode()?;
        Self::enter_screen().inspect_err(|_| restore_terminal())
    }

    fn enter_screen() -> Result<(Self, SessionHandle), TuiError> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal))
    }

    /// Run the main event loop. Returns when the user quits.
    ///
    /// Event-driven: redraws happen on input and resize immediately; the
    /// session command channel is drained on the poll-timeout tick, so an
    /// idle session consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(250);

        // Seed the state with the real terminal size, and pick up any
        // commands sent before the loop started, so the first frame is
        // already correct.
        let size = self.terminal.size()?;
        self.state
            .apply(AppEvent::Resize(size.width, size.height));
        self.drain_commands();
        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        self.state.apply(AppEvent::Resize(width, height));
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.drain_commands() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build a session around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::channel();
        let app = Self {
            terminal,
            state: AppState::new(),
            key_bindings: KeyBindings::default(),
            commands: rx,
        };
        (app, SessionHandle { tx })
    }

    /// Resolve and apply a single keyboard event; returns `true` when the
    /// session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, bindings or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");
        self.state.apply(AppEvent::Key(action))
    }

    /// Drain pending session commands without blocking; returns whether
    /// any arrived. Called by the run loop on every timer tick.
    pub fn drain_commands(&mut self) -> bool {
        let mut any = false;
        loop {
            match self.commands.try_recv() {
                Ok(SessionCommand::ShowBytes(data)) => {
                    self.state.apply(AppEvent::ReplaceData(data));
                    any = true;
                }
                Ok(SessionCommand::SetLayout(index)) => {
                    self.state.apply(AppEvent::SelectLayout(index));
                    any = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        any
    }

    /// Render the current frame as one text block.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let frame_text = self.state.render_frame();
        self.terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(frame_text.as_str()), frame.area());
        })?;
        Ok(())
    }

    /// Immutable view of the session state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a state event directly (resize injection for embedding
    /// callers and tests).
    pub fn apply_event(&mut self, event: AppEvent) -> bool {
        self.state.apply(event)
    }
}

/// Run a full session: initialize the terminal, show `data` in the layout
/// at `layout_index`, loop until quit, then restore the terminal.
///
/// The terminal is restored whether the loop returns, errors, or panics.
pub fn run_with_data(data: Vec<u8>, layout_index: usize) -> Result<(), TuiError> {
    let (mut app, handle) = TuiApp::new()?;
    let _restore = RestoreOnDrop;
    handle.show_bytes(data);
    handle.set_layout(layout_index);
    app.run()
}

/// Restores the terminal when dropped, including during unwinding.
struct RestoreOnDrop;

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    // Best-effort on both calls: restoration must not mask the original
    // failure, and repeating it is harmless.
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}
