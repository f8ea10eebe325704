use crate::nexum::{Candidate, CandidateStatus};
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the candidate board: one column per workflow status, with a
/// details panel for the highlighted candidate.
///
pub fn board(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(size);

    render_header(frame, chunks[0], state, theme);

    if let Some(error) = state.get_board_error() {
        let message = Paragraph::new(error.to_string())
            .style(styling::error_text_style(theme))
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
        return;
    }

    if state.is_board_loading() {
        let message = Paragraph::new(Line::from(vec![
            Span::styled(
                spinner::frame(state.get_spinner_index()),
                Style::default().fg(theme.primary.to_color()),
            ),
            Span::raw(" Cargando candidatos…"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
        return;
    }

    // Columns on the left, highlighted candidate details on the right.
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_columns(frame, body[0], state, theme);
    render_details(frame, body[1], state, theme);
}

fn render_header(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Panel — {}", state.company_name()),
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Pizarra de candidatos por estatus",
            styling::muted_text_style(theme),
        ),
    ]));
    frame.render_widget(title, size);
}

fn render_columns(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let constraints: Vec<Constraint> = CandidateStatus::ALL
        .iter()
        .map(|_| Constraint::Percentage((100 / CandidateStatus::ALL.len()) as u16))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(size);

    for (index, status) in CandidateStatus::ALL.iter().enumerate() {
        let candidates = state.candidates_with_status(*status);
        let active = index == state.get_board_column_index();
        render_column(
            frame,
            chunks[index],
            *status,
            &candidates,
            active,
            if active {
                Some(state.get_board_row_index())
            } else {
                None
            },
            theme,
        );
    }
}

fn render_column(
    frame: &mut Frame,
    size: Rect,
    status: CandidateStatus,
    candidates: &[&Candidate],
    active: bool,
    selected: Option<usize>,
    theme: &Theme,
) {
    let border_style = if active {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("{} ({})", status.label(), candidates.len()));

    if candidates.is_empty() {
        let empty = Paragraph::new("No hay candidatos en este estatus")
            .style(styling::muted_text_style(theme))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = candidates
        .iter()
        .map(|candidate| {
            let mut lines = vec![Line::from(Span::styled(
                format!("{} {}", candidate.nombres, candidate.apellidos),
                styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
            ))];
            if let Some(puesto) = &candidate.puesto_aplica {
                lines.push(Line::from(Span::styled(
                    puesto.clone(),
                    styling::muted_text_style(theme),
                )));
            }
            if let Some(telefono) = &candidate.telefono {
                lines.push(Line::from(Span::styled(
                    telefono.clone(),
                    styling::muted_text_style(theme),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(theme));

    let mut list_state = ListState::default();
    list_state.select(selected);
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn render_details(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title("Detalle");

    let Some(candidate) = state.selected_candidate() else {
        let empty = Paragraph::new("Selecciona un candidato")
            .style(styling::muted_text_style(theme))
            .block(block);
        frame.render_widget(empty, size);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", candidate.nombres, candidate.apellidos),
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let mut push_detail = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            if !value.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", label), styling::muted_text_style(theme)),
                    Span::styled(value.to_string(), styling::normal_text_style(theme)),
                ]));
            }
        }
    };
    push_detail("Puesto", candidate.puesto_aplica.as_deref());
    push_detail("Teléfono", candidate.telefono.as_deref());
    push_detail("Correo", candidate.correo.as_deref());
    push_detail("Municipio", candidate.municipio.as_deref());
    let anios = candidate
        .anios_experiencia
        .map(crate::state::number_to_field_text);
    push_detail("Años de experiencia", anios.as_deref());
    let pretension = candidate
        .pretension_salarial
        .map(crate::state::number_to_field_text);
    push_detail("Pretensión (Q)", pretension.as_deref());
    push_detail("CV", candidate.cv_url.as_deref());

    if let Some(notes) = candidate.notes.as_deref() {
        if !notes.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("📝 {}", notes),
                styling::normal_text_style(theme),
            )));
        }
    }

    let details = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(details, size);
}
