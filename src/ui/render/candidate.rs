use crate::state::{EditField, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the candidate detail view with its edit form.
///
pub fn candidate(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Status line
            Constraint::Min(1),    // Form fields
        ])
        .split(size);

    render_title(frame, chunks[0], state, theme);
    render_status(frame, chunks[1], state, theme);

    if state.is_detail_loading() {
        let message = Paragraph::new(Line::from(vec![
            Span::styled(
                spinner::frame(state.get_spinner_index()),
                Style::default().fg(theme.primary.to_color()),
            ),
            Span::raw(" Cargando…"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[2]);
        return;
    }

    if state.get_edit_draft().is_some() {
        render_fields(frame, chunks[2], state, theme);
    }
}

fn render_title(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let id_text = state
        .get_candidate_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let name = state
        .get_edit_draft()
        .map(|draft| format!("{} {}", draft.nombres, draft.apellidos))
        .unwrap_or_default();
    let mut spans = vec![
        Span::styled(
            "Ver / Editar candidato",
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ID: {}", id_text), styling::muted_text_style(theme)),
    ];
    if !name.trim().is_empty() {
        spans.push(Span::styled(
            format!("  {}", name),
            styling::normal_text_style(theme),
        ));
    }
    if let Some(created_at) = state.get_candidate().and_then(|c| c.created_at.as_deref()) {
        spans.push(Span::styled(
            format!("  Creado: {}", created_at),
            styling::muted_text_style(theme),
        ));
    }
    if state.is_saving() {
        spans.push(Span::styled(
            format!("  {} Guardando...", spinner::frame(state.get_spinner_index())),
            Style::default().fg(theme.accent.to_color()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}

fn render_status(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let line: Line = if let Some(error) = state.get_detail_error() {
        Line::from(Span::styled(
            error.to_string(),
            styling::error_text_style(theme),
        ))
    } else if let Some(success) = state.get_detail_success() {
        Line::from(Span::styled(
            success.to_string(),
            styling::success_text_style(theme),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), size);
}

fn render_fields(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    let Some(draft) = state.get_edit_draft().cloned() else {
        return;
    };
    let focus = state.get_edit_field();
    let focus_index = EditField::ALL.iter().position(|f| *f == focus).unwrap_or(0);

    let heights: Vec<u16> = EditField::ALL.iter().map(|f| field_height(*f)).collect();
    let (start, end) = super::apply::visible_range(&heights, focus_index, size.height);

    let mut constraints: Vec<Constraint> = heights[start..end]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (slot, field) in EditField::ALL[start..end].iter().enumerate() {
        let active = *field == focus;
        if *field == EditField::Notes {
            render_notes(frame, chunks[slot], state, active, theme);
        } else {
            render_field(
                frame,
                chunks[slot],
                field.label(),
                draft.field_text(*field),
                active,
                theme,
            );
        }
    }
}

fn render_notes(frame: &mut Frame, size: Rect, state: &mut State, active: bool, theme: &Theme) {
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let textarea = state.notes_textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Notas"),
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
    let field = Paragraph::new(value.to_string())
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    frame.render_widget(field, size);
}

fn field_height(field: EditField) -> u16 {
    match field {
        EditField::Notes => 5,
        _ => 3,
    }
}
