use crate::state::{State, View};
use crate::ui::{Frame, Theme};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the current view with the footer hint bar, plus the debug
/// overlay when toggled.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let theme = Theme::default();
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    match state.get_current_view() {
        View::Login => super::login::login(frame, chunks[0], state, &theme),
        View::Board => super::board::board(frame, chunks[0], state, &theme),
        View::Apply => super::apply::apply(frame, chunks[0], state, &theme),
        View::CandidateDetail => super::candidate::candidate(frame, chunks[0], state, &theme),
    }

    super::footer::footer(frame, chunks[1], state, &theme);

    if state.is_debug_mode() {
        super::log::log(frame, size, state, &theme);
    }
}
