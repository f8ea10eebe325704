use crate::state::{ApplyField, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the public application form.
///
pub fn apply(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Form fields
            Constraint::Length(2), // Violation + message
            Constraint::Length(1), // Reminder
        ])
        .split(size);

    render_title(frame, chunks[0], state, theme);
    render_fields(frame, chunks[1], state, theme);
    render_status(frame, chunks[2], state, theme);

    let reminder = Paragraph::new(
        "No subas tu CV aquí. Si la empresa continúa tu proceso, te lo solicitará.",
    )
    .style(styling::muted_text_style(theme));
    frame.render_widget(reminder, chunks[3]);
}

fn render_title(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            "Registro de candidato",
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  Empresa: {}",
                if state.get_apply_slug().is_empty() {
                    "-"
                } else {
                    state.get_apply_slug()
                }
            ),
            styling::muted_text_style(theme),
        ),
    ];
    if state.is_submitting() {
        spans.push(Span::styled(
            format!("  {} Guardando...", spinner::frame(state.get_spinner_index())),
            Style::default().fg(theme.accent.to_color()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}

fn render_fields(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    let draft = state.get_apply_draft().clone();
    let focus = state.get_apply_field();
    let focus_index = ApplyField::ALL
        .iter()
        .position(|f| *f == focus)
        .unwrap_or(0);

    let heights: Vec<u16> = ApplyField::ALL.iter().map(|f| field_height(*f)).collect();
    let (start, end) = visible_range(&heights, focus_index, size.height);

    let mut constraints: Vec<Constraint> = heights[start..end]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (slot, field) in ApplyField::ALL[start..end].iter().enumerate() {
        let active = *field == focus;
        match field {
            ApplyField::Resumen => {
                render_resumen(frame, chunks[slot], state, active, theme);
            }
            ApplyField::NivelEstudio => {
                let value = draft.field_text(*field);
                let (text, muted) = if value.is_empty() {
                    ("Selecciona una opción (←/→)".to_string(), true)
                } else {
                    (value.to_string(), false)
                };
                render_field(frame, chunks[slot], field.label(), &text, active, muted, theme);
            }
            _ => {
                render_field(
                    frame,
                    chunks[slot],
                    field.label(),
                    draft.field_text(*field),
                    active,
                    false,
                    theme,
                );
            }
        }
    }
}

fn render_status(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let mut lines = vec![];
    if let Some(violation) = state.apply_violation() {
        lines.push(Line::from(Span::styled(
            format!("Para continuar, completa: {}", violation.label()),
            styling::muted_text_style(theme),
        )));
    }
    if let Some(message) = state.get_apply_message() {
        let style = if message.starts_with('✅') {
            styling::success_text_style(theme)
        } else {
            styling::error_text_style(theme)
        };
        lines.push(Line::from(Span::styled(message.to_string(), style)));
    }
    frame.render_widget(Paragraph::new(lines), size);
}

fn render_resumen(frame: &mut Frame, size: Rect, state: &mut State, active: bool, theme: &Theme) {
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let textarea = state.resumen_textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Resumen de experiencia"),
    );
    textarea.set_cursor_line_style(Style::default());
    frame.render_widget(textarea.widget(), size);
}

fn render_field(
    frame: &mut Frame,
    size: Rect,
    label: &str,
    value: &str,
    active: bool,
    muted: bool,
    theme: &Theme,
) {
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let title = if active {
        Span::styled(label.to_string(), Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(label.to_string())
    };
    let text_style = if muted {
        styling::muted_text_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    let field = Paragraph::new(value.to_string()).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(field, size);
}

fn field_height(field: ApplyField) -> u16 {
    match field {
        ApplyField::Resumen => 5,
        _ => 3,
    }
}

/// Choose the window of fields to show so the focused one is always
/// visible within the given height.
///
pub(super) fn visible_range(heights: &[u16], focus: usize, available: u16) -> (usize, usize) {
    let mut start = 0;
    loop {
        let mut used = 0u16;
        let mut end = start;
        while end < heights.len() && used + heights[end] <= available {
            used += heights[end];
            end += 1;
        }
        if focus < end || start + 1 >= heights.len() {
            return (start, end);
        }
        start += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_fits_all_when_tall() {
        let heights = [3, 3, 3];
        assert_eq!(visible_range(&heights, 0, 20), (0, 3));
        assert_eq!(visible_range(&heights, 2, 20), (0, 3));
    }

    #[test]
    fn test_visible_range_scrolls_to_focus() {
        let heights = [3, 3, 3, 3];
        // Only two fields fit; focusing the last one slides the window.
        assert_eq!(visible_range(&heights, 0, 6), (0, 2));
        assert_eq!(visible_range(&heights, 3, 6), (2, 4));
    }

    #[test]
    fn test_visible_range_handles_tiny_area() {
        let heights = [3, 5, 3];
        let (start, end) = visible_range(&heights, 1, 2);
        assert!(start <= heights.len());
        assert!(end <= heights.len());
    }
}
