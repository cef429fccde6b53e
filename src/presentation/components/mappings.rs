use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::super::view::UiContext;

pub fn render_mapping_list(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let editing = ctx
        .editor
        .mode()
        .editing()
        .map(|mapping| mapping.external_value.as_str());
    let items = if ctx.mappings.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No mappings yet",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        ctx.mappings
            .iter()
            .map(|mapping| {
                let style = if Some(mapping.external_value.as_str()) == editing {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mapping.external_value.clone(), style),
                    Span::raw(" → "),
                    Span::raw(mapping.local_attribute.label()),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(
        Block::default()
            .title(format!("Mappings ({})", ctx.mappings.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
