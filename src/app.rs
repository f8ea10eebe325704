use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::nexum::Nexum;
use crate::session::{FileSessionStore, SessionError, SessionStore};
use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// How the application was launched.
///
pub enum Launch {
    /// Company panel: restored session (or login) then the board.
    Panel,
    /// Public application form for the given company slug, no session
    /// required.
    Apply(String),
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, launch: Launch, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, log_buffer))),
            config,
        };

        let sessions = FileSessionStore::new(&app.config.directory()?);
        let initial_token = app.prepare_initial_state(&sessions, launch).await;
        app.start_network(rx, initial_token, sessions);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Restore the persisted session and pick the initial view. Returns the
    /// restored token, if any, for the network thread's client.
    ///
    async fn prepare_initial_state(
        &self,
        sessions: &FileSessionStore,
        launch: Launch,
    ) -> Option<String> {
        let mut state = self.state.lock().await;
        let mut token = None;

        match sessions.load() {
            Ok(Some(session)) => {
                debug!(
                    "Restored session for company '{}'.",
                    session.company_name().unwrap_or("<unknown>")
                );
                token = session.token.clone();
                state.set_session(Some(session));
            }
            Ok(None) => {
                debug!("No persisted session found.");
            }
            Err(SessionError::Corrupt(e)) => {
                warn!("Persisted session could not be parsed: {}", e);
                state.set_session_error(Some("Sesión inválida".to_string()));
            }
            Err(e) => {
                warn!("Failed to read persisted session: {}", e);
            }
        }

        match launch {
            Launch::Apply(slug) => {
                state.open_apply(slug);
            }
            Launch::Panel => {
                if state.get_session().is_some() {
                    state.push_view(View::Board);
                    state.send_network_event(NetworkEvent::LoadCandidates);
                }
            }
        }

        token
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(
        &self,
        net_receiver: NetworkEventReceiver,
        token: Option<String>,
        sessions: FileSessionStore,
    ) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let base_url = self.config.api_base_url.clone();
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create network runtime - this should never happen")
                .block_on(async {
                    let mut nexum = Nexum::new(&base_url);
                    nexum.set_token(token);
                    let mut network_event_handler =
                        NetworkEventHandler::new(&cloned_state, &mut nexum, &sessions);
                    while let Ok(network_event) = net_receiver.recv() {
                        match network_event_handler.handle(network_event).await {
                            Ok(_) => (),
                            Err(e) => error!("Failed to handle network event: {}", e),
                        }
                    }
                })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting
    /// the render loop on the main thread. Return the result following an
    /// exit request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
