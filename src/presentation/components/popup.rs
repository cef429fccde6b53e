use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use super::super::view::PopupRender;

pub fn render_popup(frame: &mut Frame<'_>, popup: PopupRender<'_>) {
    let height = (popup.options.len() as u16).saturating_add(2).min(14);
    let area = centered(frame.area(), 60, height);
    let items = popup
        .options
        .iter()
        .map(|option| ListItem::new(option.clone()))
        .collect::<Vec<_>>();
    let mut state = ListState::default();
    state.select(Some(popup.selected));
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{} (↑/↓, Enter, Esc)", popup.title))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
