use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{FieldId, FieldStatus};

use super::super::view::UiContext;

pub fn render_form(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let editor = ctx.editor;
    let state = editor.state();
    let content_width = area.width.saturating_sub(4).max(8) as usize;
    let mut lines = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    lines.push(label_line(FieldId::ExternalValue, ctx.focus));
    let draft = state.external_value_draft();
    let marker = if ctx.focus == FieldId::ExternalValue {
        "» "
    } else {
        "  "
    };
    if ctx.focus == FieldId::ExternalValue && ctx.popup.is_none() {
        let column = UnicodeWidthStr::width(marker) + UnicodeWidthStr::width(draft);
        cursor = Some((column as u16, lines.len() as u16));
    }
    lines.push(Line::from(vec![Span::raw(marker), Span::raw(draft.to_string())]));
    lines.extend(status_lines(state.status(), content_width));

    lines.push(Line::default());
    lines.push(label_line(FieldId::LocalAttribute, ctx.focus));
    let marker = if ctx.focus == FieldId::LocalAttribute {
        "» "
    } else {
        "  "
    };
    let selection = match state.selected_attribute() {
        Some(attribute) => Span::raw(attribute.label()),
        None => Span::styled("<choose>", Style::default().fg(Color::DarkGray)),
    };
    let selectable = editor
        .candidates()
        .iter()
        .filter(|candidate| candidate.is_selectable())
        .count();
    lines.push(Line::from(vec![
        Span::raw(marker),
        selection,
        Span::styled(
            format!("  (Enter to choose, {selectable} available)"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    if let Some(attribute) = state.selected_attribute()
        && !attribute.uri.is_empty()
    {
        lines.push(Line::from(Span::styled(
            format!("  {}", attribute.uri),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::default());
    lines.push(submit_line(editor.can_submit(), editor.mode().is_edit()));

    let title = if editor.mode().is_edit() {
        format!("{} • edit mapping", ctx.title)
    } else {
        format!("{} • new mapping", ctx.title)
    };
    let widget = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(widget, area);

    if let Some((column, line)) = cursor {
        let x = area.x.saturating_add(1).saturating_add(column);
        let y = area.y.saturating_add(1).saturating_add(line);
        if x < area.right() && y < area.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

fn label_line(field: FieldId, focus: FieldId) -> Line<'static> {
    let style = if field == focus {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(format!("{} *", field.label()), style))
}

fn status_lines(status: FieldStatus, width: usize) -> Vec<Line<'static>> {
    let FieldStatus::Invalid(err) = status else {
        return Vec::new();
    };
    let text = format!("✗ {err} ({})", err.code());
    wrap(&text, width)
        .into_iter()
        .map(|segment| {
            Line::from(Span::styled(
                format!("  {segment}"),
                Style::default().fg(Color::Red),
            ))
        })
        .collect()
}

fn submit_line(enabled: bool, edit: bool) -> Line<'static> {
    let verb = if edit { "Update" } else { "Add" };
    if enabled {
        Line::from(Span::styled(
            format!("[ {verb} mapping ]"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("[ {verb} mapping ] (disabled)"),
            Style::default().fg(Color::DarkGray),
        ))
    }
}
