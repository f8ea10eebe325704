use crate::state::{State, View};
use crate::ui::widgets::styling;
use crate::ui::{Frame, Theme};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

/// Render the footer hint bar for the current view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let hints = match state.get_current_view() {
        View::Login => " Tab: cambiar campo | Enter: entrar | Ctrl-C: salir",
        View::Board => {
            " ←/→: estatus | ↑/↓: candidato | Enter: ver/editar | n: nuevo | r: recargar | o: cerrar sesión | q: salir"
        }
        View::Apply => " Tab/Shift-Tab: campo | Ctrl-S: guardar datos | Esc: volver | Ctrl-C: salir",
        View::CandidateDetail => {
            " Tab/Shift-Tab: campo | Ctrl-S: guardar cambios | Esc: volver | Ctrl-C: salir"
        }
    };
    let bar = Paragraph::new(hints).style(styling::muted_text_style(theme));
    frame.render_widget(bar, size);
}
