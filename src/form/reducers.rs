use super::{
    actions::EditorCommand, editor::MappingEditor, error::SubmitError, sink::MappingSink,
    state::FieldStatus,
};

/// What a dispatched command did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Validated(FieldStatus),
    Selected(bool),
    Submitted,
    Reset,
}

/// Routes form events into a [`MappingEditor`], forwarding submitted mappings.
pub struct EditorEngine<'a, S>
where
    S: MappingSink + ?Sized,
{
    editor: &'a mut MappingEditor,
    sink: &'a mut S,
}

impl<'a, S> EditorEngine<'a, S>
where
    S: MappingSink + ?Sized,
{
    pub fn new(editor: &'a mut MappingEditor, sink: &'a mut S) -> Self {
        Self { editor, sink }
    }

    pub fn dispatch(&mut self, command: EditorCommand) -> Result<EditorEvent, SubmitError> {
        match command {
            EditorCommand::ExternalValueChanged(value) => {
                Ok(EditorEvent::Validated(self.editor.set_external_value(value)))
            }
            EditorCommand::LocalAttributeSelected(id) => {
                Ok(EditorEvent::Selected(self.editor.select_local_attribute(&id)))
            }
            EditorCommand::Submit => {
                self.editor.submit(&mut *self.sink)?;
                Ok(EditorEvent::Submitted)
            }
            EditorCommand::Reset => {
                self.editor.reset();
                Ok(EditorEvent::Reset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalAttribute, Mapping};
    use crate::form::ValidationError;

    #[test]
    fn add_another_workflow_collects_each_submission() {
        let available = vec![
            LocalAttribute::new("a1", "Email", "urn:email"),
            LocalAttribute::new("a2", "Phone", "urn:phone"),
        ];
        let mut editor = MappingEditor::create(available, Vec::new());
        let mut collected: Vec<Mapping> = Vec::new();
        let mut engine = EditorEngine::new(&mut editor, &mut collected);

        for (external, id) in [("email", "a1"), ("phone_number", "a2")] {
            assert_eq!(
                engine
                    .dispatch(EditorCommand::ExternalValueChanged(external.into()))
                    .unwrap(),
                EditorEvent::Validated(FieldStatus::Valid)
            );
            assert_eq!(
                engine
                    .dispatch(EditorCommand::LocalAttributeSelected(id.into()))
                    .unwrap(),
                EditorEvent::Selected(true)
            );
            assert_eq!(
                engine.dispatch(EditorCommand::Submit).unwrap(),
                EditorEvent::Submitted
            );
        }
        drop(engine);

        let externals: Vec<_> = collected.iter().map(|m| m.external_value.as_str()).collect();
        assert_eq!(externals, ["email", "phone_number"]);
    }

    #[test]
    fn failed_submit_surfaces_error() {
        let mut editor = MappingEditor::create(Vec::new(), Vec::new());
        let mut emitted: Vec<Mapping> = Vec::new();
        let mut engine = EditorEngine::new(&mut editor, &mut emitted);
        assert_eq!(
            engine
                .dispatch(EditorCommand::ExternalValueChanged("  ".into()))
                .unwrap(),
            EditorEvent::Validated(FieldStatus::Invalid(ValidationError::Required))
        );
        assert_eq!(
            engine.dispatch(EditorCommand::Submit),
            Err(SubmitError::MissingExternalValue)
        );
        assert_eq!(
            engine.dispatch(EditorCommand::Reset).unwrap(),
            EditorEvent::Reset
        );
        drop(engine);
        assert!(emitted.is_empty());
        assert_eq!(editor.state().status(), FieldStatus::Pristine);
    }
}
