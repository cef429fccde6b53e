use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    domain::Mapping,
    form::{FieldId, MappingEditor},
};

use super::components::{render_footer, render_form, render_mapping_list, render_popup};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub editor: &'a MappingEditor,
    pub focus: FieldId,
    pub mappings: &'a [Mapping],
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub dirty: bool,
    pub show_mapping_list: bool,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(4)])
        .split(frame.area());

    let body = if ctx.show_mapping_list {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);
        render_mapping_list(frame, columns[1], &ctx);
        columns[0]
    } else {
        rows[0]
    };

    render_form(frame, body, &ctx);
    render_footer(frame, rows[1], &ctx);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}
