use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::{Frame, Theme};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, List, ListItem},
};

/// Render the debug log overlay on top of the current view.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let area = centered_rect(size, 90, 80);
    frame.render_widget(Clear, area);

    let entries = state.get_debug_entries();
    let visible = area.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| ListItem::new(entry.clone()).style(styling::muted_text_style(theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title("Debug log (F12 para cerrar)"),
    );
    frame.render_widget(list, area);
}

fn centered_rect(size: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (size.width as u32 * percent_x as u32 / 100) as u16;
    let height = (size.height as u32 * percent_y as u32 / 100) as u16;
    Rect {
        x: size.x + (size.width.saturating_sub(width)) / 2,
        y: size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_contained() {
        let outer = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let inner = centered_rect(outer, 90, 80);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
        assert!(inner.x >= outer.x && inner.y >= outer.y);
    }
}
