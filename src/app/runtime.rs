use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::{
    domain::Mapping,
    form::{
        EditorCommand, EditorEngine, EditorEvent, FieldId, FieldStatus, MappingEditor, edit_text,
    },
    presentation::{self, UiContext},
    session::{MappingList, MappingListError},
};

use super::{
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    popup::PopupState,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    title: String,
    list: MappingList,
    editor: MappingEditor,
    focus: FieldId,
    options: UiOptions,
    status: StatusLine,
    popup: Option<PopupState>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(
        title: String,
        list: MappingList,
        editor: MappingEditor,
        options: UiOptions,
    ) -> Self {
        let status = StatusLine::new(editor.mode().is_edit());
        Self {
            title,
            list,
            editor,
            focus: FieldId::ExternalValue,
            options,
            status,
            popup: None,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub(crate) fn run(&mut self) -> Result<Vec<Mapping>> {
        let mut terminal = TerminalGuard::enter()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
            }
        }
        Ok(self.list.mappings())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let mappings = self.list.mappings();
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                editor: &self.editor,
                focus: self.focus,
                mappings: &mappings,
                status_message: self.status.message(),
                help: self.options.show_help.then_some(HELP_TEXT),
                dirty: self.editor.is_dirty(),
                show_mapping_list: self.options.show_mapping_list,
                popup: self.popup.as_ref().map(PopupState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(key) {
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::ResetDrafts => {
                self.exit_armed = false;
                self.dispatch(EditorCommand::Reset);
                self.status.ready(self.editor.mode().is_edit());
            }
            KeyCommand::NextField => self.focus = self.focus.next(),
            KeyCommand::PrevField => self.focus = self.focus.prev(),
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready(self.editor.mode().is_edit());
            }
            KeyCommand::Activate => match self.focus {
                FieldId::ExternalValue => self.focus = FieldId::LocalAttribute,
                FieldId::LocalAttribute => self.open_popup(),
            },
            KeyCommand::Edit(event) => self.handle_field_input(&event),
            KeyCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.status.ready(self.editor.mode().is_edit());
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let selected = popup.selected_id().map(str::to_string);
                self.popup = None;
                if let Some(id) = selected {
                    self.dispatch(EditorCommand::LocalAttributeSelected(id));
                    self.mark_edited(FieldId::LocalAttribute);
                }
            }
            _ => {}
        }
        true
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        if self.focus != FieldId::ExternalValue {
            return;
        }
        let mut draft = self.editor.state().external_value_draft().to_string();
        if edit_text(&mut draft, key) {
            self.dispatch(EditorCommand::ExternalValueChanged(draft));
            self.mark_edited(FieldId::ExternalValue);
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.popup.is_some() || self.focus != FieldId::ExternalValue {
            return;
        }
        let mut draft = self.editor.state().external_value_draft().to_string();
        draft.extend(text.chars().filter(|ch| !ch.is_control()));
        self.dispatch(EditorCommand::ExternalValueChanged(draft));
        self.mark_edited(FieldId::ExternalValue);
    }

    fn mark_edited(&mut self, field: FieldId) {
        self.exit_armed = false;
        match self.editor.state().status() {
            FieldStatus::Invalid(err) if field == FieldId::ExternalValue => {
                self.status.set_raw(format!("{err}"));
            }
            _ => self.status.editing(field.label()),
        }
    }

    fn open_popup(&mut self) {
        let popup = PopupState::from_candidates(
            FieldId::LocalAttribute.label(),
            self.editor.candidates(),
            self.editor.state().selected_index(),
        );
        match popup {
            Some(popup) => {
                self.status.set_raw("Use ↑/↓ and Enter to choose");
                self.popup = Some(popup);
            }
            None => self.status.set_raw("No local attributes left to map"),
        }
    }

    fn on_submit(&mut self) {
        let editing = self.editor.mode().is_edit();
        match self.list.submit(&mut self.editor) {
            Ok(mapping) if editing => self.status.updated(&mapping),
            Ok(mapping) => {
                self.focus = FieldId::ExternalValue;
                self.status.added(&mapping);
            }
            Err(MappingListError::Submit(err)) => {
                debug!(%err, "submit rejected");
                self.status.rejected(&err.to_string());
            }
            Err(err) => {
                warn!(%err, "submitted mapping could not be recorded");
                self.status.set_raw(err.to_string());
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.editor.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    /// Run a field command through the editor. Submissions go through
    /// [`MappingList::submit`] instead, so nothing is expected in `emitted`.
    fn dispatch(&mut self, command: EditorCommand) {
        let mut emitted: Vec<Mapping> = Vec::new();
        let outcome = EditorEngine::new(&mut self.editor, &mut emitted).dispatch(command);
        match outcome {
            Ok(EditorEvent::Selected(false)) => {
                self.status.set_raw("That attribute cannot be selected");
            }
            Ok(_) => {}
            Err(err) => {
                debug!(%err, "command rejected");
                self.status.rejected(&err.to_string());
            }
        }
    }
}
