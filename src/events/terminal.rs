use crate::events::network::Event as NetworkEvent;
use crate::state::{ApplyField, EditField, State, View};
use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if matches!(event::poll(tick_rate), Ok(true)) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if tx_clone.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => {
                if key.kind == KeyEventKind::Release {
                    return Ok(true);
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                if key.code == KeyCode::F(12) {
                    state.toggle_debug_mode();
                    return Ok(true);
                }
                match state.get_current_view() {
                    View::Login => Ok(handle_login_key(key, state)),
                    View::Board => Ok(handle_board_key(key, state)),
                    View::Apply => Ok(handle_apply_key(key, state)),
                    View::CandidateDetail => Ok(handle_detail_key(key, state)),
                }
            }
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

fn handle_login_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.toggle_login_field();
        }
        KeyCode::Enter => {
            if let Some((email, password)) = state.begin_login() {
                state.send_network_event(NetworkEvent::Login { email, password });
            }
        }
        KeyCode::Backspace => {
            state.login_delete_char();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.login_insert_char(c);
        }
        _ => {}
    }
    true
}

fn handle_board_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Left | KeyCode::Char('h') => {
            state.board_prev_column();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.board_next_column();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.board_prev_row();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.board_next_row();
        }
        KeyCode::Enter => {
            if let Some(id) = state.selected_candidate().map(|c| c.id) {
                state.open_candidate(id);
                state.send_network_event(NetworkEvent::LoadCandidate { id });
            }
        }
        KeyCode::Char('n') => {
            if let Some(slug) = state.session_slug() {
                state.open_apply(slug);
            }
        }
        KeyCode::Char('r') => {
            state.send_network_event(NetworkEvent::LoadCandidates);
        }
        KeyCode::Char('o') => {
            state.logout();
            state.send_network_event(NetworkEvent::Logout);
        }
        _ => {}
    }
    true
}

fn handle_apply_key(key: KeyEvent, state: &mut State) -> bool {
    // The submit gate runs here, synchronously under the state lock, so a
    // double-press cannot queue two requests.
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if let Some((slug, payload)) = state.begin_submit() {
            state.send_network_event(NetworkEvent::SubmitApplication { slug, payload });
        }
        return true;
    }
    match key.code {
        KeyCode::Esc => {
            state.pop_view();
        }
        KeyCode::Tab => {
            state.apply_next_field();
        }
        KeyCode::BackTab => {
            state.apply_prev_field();
        }
        _ => match state.get_apply_field() {
            ApplyField::Resumen => {
                state.apply_textarea_input(key);
            }
            ApplyField::NivelEstudio => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    state.apply_cycle_nivel(true);
                }
                KeyCode::Left => {
                    state.apply_cycle_nivel(false);
                }
                _ => {}
            },
            _ => match key.code {
                KeyCode::Backspace => {
                    state.apply_delete_char();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    state.apply_insert_char(c);
                }
                _ => {}
            },
        },
    }
    true
}

fn handle_detail_key(key: KeyEvent, state: &mut State) -> bool {
    // Same synchronous gating as the application form.
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if let Some((id, payload)) = state.begin_save() {
            state.send_network_event(NetworkEvent::SaveCandidate { id, payload });
        }
        return true;
    }
    match key.code {
        KeyCode::Esc => {
            state.pop_view();
            // The board reflects whatever was saved here.
            state.send_network_event(NetworkEvent::LoadCandidates);
        }
        KeyCode::Tab => {
            state.edit_next_field();
        }
        KeyCode::BackTab => {
            state.edit_prev_field();
        }
        _ => match state.get_edit_field() {
            EditField::Notes => {
                state.edit_textarea_input(key);
            }
            _ => match key.code {
                KeyCode::Backspace => {
                    state.edit_delete_char();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    state.edit_insert_char(c);
                }
                _ => {}
            },
        },
    }
    true
}
