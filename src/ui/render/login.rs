use crate::state::{LoginField, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
  _ __    ___ __  __ _   _  _ __ ___
 | '_ \\  / _ \\\\ \\/ /| | | || '_ ` _ \\
 | | | ||  __/ >  < | |_| || | | | | |
 |_| |_| \\___|/_/\\_\\ \\__,_||_| |_| |_|
";

/// Render the company login view.
///
pub fn login(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let box_width = size.width.min(52);
    let box_area = Rect {
        x: size.x + (size.width.saturating_sub(box_width)) / 2,
        y: size.y + size.height.saturating_sub(size.height.min(22)) / 2,
        width: box_width,
        height: size.height.min(22),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Length(2), // Tagline
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Error / progress
            Constraint::Min(0),
        ])
        .split(box_area);

    let banner = Paragraph::new(BANNER)
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let tagline = Paragraph::new("Login Empresa — ingresa con el email y password de tu empresa")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[1]);

    render_input(
        frame,
        chunks[2],
        "Email",
        state.get_login_email(),
        state.get_login_field() == LoginField::Email,
        theme,
    );

    let masked: String = state.get_login_password().chars().map(|_| '*').collect();
    render_input(
        frame,
        chunks[3],
        "Password",
        &masked,
        state.get_login_field() == LoginField::Password,
        theme,
    );

    let status: Line = if state.is_logging_in() {
        Line::from(vec![
            Span::styled(
                spinner::frame(state.get_spinner_index()),
                Style::default().fg(theme.primary.to_color()),
            ),
            Span::styled(" Ingresando...", styling::muted_text_style(theme)),
        ])
    } else if let Some(error) = state.get_login_error() {
        Line::from(Span::styled(error.to_string(), styling::error_text_style(theme)))
    } else if let Some(error) = state.get_session_error() {
        Line::from(Span::styled(error.to_string(), styling::error_text_style(theme)))
    } else {
        Line::from("")
    };
    let status = Paragraph::new(status).alignment(Alignment::Center);
    frame.render_widget(status, chunks[4]);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
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
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let input = Paragraph::new(value.to_string())
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(input, area);
}
