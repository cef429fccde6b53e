use tracing::{debug, info};

use crate::domain::{LocalAttribute, Mapping};

use super::{
    candidates::derive_candidates,
    error::{SubmitError, ValidationError},
    sink::MappingSink,
    state::{EditorState, FieldStatus},
    validation::validate_external_value,
};

/// Whether the editor appends a new mapping or rewrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(Mapping),
}

impl EditorMode {
    pub fn editing(&self) -> Option<&Mapping> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(mapping) => Some(mapping),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditorMode::Edit(_))
    }
}

/// A submitted mapping together with the entry it rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOutcome {
    /// External value of the edited mapping; `None` when the mapping is new.
    pub replaces: Option<String>,
    pub mapping: Mapping,
}

impl EditorOutcome {
    pub fn is_edit(&self) -> bool {
        self.replaces.is_some()
    }
}

/// Inputs supplied by the owner of the mapping list.
#[derive(Debug, Clone, Default)]
pub struct EditorProps {
    /// Local attributes not yet claimed by another mapping.
    pub available: Vec<LocalAttribute>,
    /// Every mapping currently in the list, the edited one included.
    pub already_mapped: Vec<Mapping>,
    pub mode: EditorMode,
}

/// Two-field form producing one [`Mapping`] per successful submission.
#[derive(Debug, Clone)]
pub struct MappingEditor {
    props: EditorProps,
    state: EditorState,
}

impl MappingEditor {
    pub fn new(props: EditorProps) -> Self {
        let mut state = EditorState {
            candidates: derive_candidates(&props.available, props.mode.editing()),
            ..EditorState::default()
        };
        if let Some(mapping) = props.mode.editing() {
            state.external_value_draft = mapping.external_value.clone();
            state.local_attribute_draft = Some(mapping.local_attribute.id.clone())
                .filter(|id| !id.trim().is_empty());
        }
        debug!(
            candidates = state.candidates.len(),
            edit = props.mode.is_edit(),
            "mapping editor initialized"
        );
        Self { props, state }
    }

    pub fn create(available: Vec<LocalAttribute>, already_mapped: Vec<Mapping>) -> Self {
        Self::new(EditorProps {
            available,
            already_mapped,
            mode: EditorMode::Create,
        })
    }

    pub fn edit(
        mapping: Mapping,
        available: Vec<LocalAttribute>,
        already_mapped: Vec<Mapping>,
    ) -> Self {
        Self::new(EditorProps {
            available,
            already_mapped,
            mode: EditorMode::Edit(mapping),
        })
    }

    pub fn mode(&self) -> &EditorMode {
        &self.props.mode
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn candidates(&self) -> &[LocalAttribute] {
        &self.state.candidates
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Replace the available list. Candidates are only rebuilt when it changed.
    pub fn set_available(&mut self, available: Vec<LocalAttribute>) -> bool {
        if available == self.props.available {
            return false;
        }
        self.props.available = available;
        self.state.candidates = derive_candidates(&self.props.available, self.props.mode.editing());
        if self.state.selected_attribute().is_none() {
            self.state.local_attribute_draft = None;
        }
        debug!(
            candidates = self.state.candidates.len(),
            "candidate list rebuilt"
        );
        true
    }

    pub fn set_already_mapped(&mut self, already_mapped: Vec<Mapping>) {
        self.props.already_mapped = already_mapped;
        if self.state.status != FieldStatus::Pristine {
            self.revalidate();
        }
    }

    pub fn set_external_value(&mut self, value: impl Into<String>) -> FieldStatus {
        self.state.external_value_draft = value.into();
        self.revalidate()
    }

    /// Select by id. Unknown or id-less candidates are ignored.
    pub fn select_local_attribute(&mut self, id: &str) -> bool {
        let found = self
            .state
            .candidates
            .iter()
            .any(|candidate| candidate.is_selectable() && candidate.id == id);
        if found {
            self.state.local_attribute_draft = Some(id.to_string());
        }
        found
    }

    pub fn revalidate(&mut self) -> FieldStatus {
        let result = validate_external_value(
            &self.state.external_value_draft,
            &self.props.already_mapped,
            self.props.mode.editing(),
        );
        if let Err(err) = result {
            debug!(code = err.code(), "external attribute rejected");
        }
        self.state.status = result.into();
        self.state.status
    }

    /// Build a mapping from the drafts and hand it to `sink`.
    ///
    /// In create mode the drafts are cleared afterwards so another mapping can
    /// be entered; in edit mode they are left as they are.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<(), SubmitError>
    where
        S: MappingSink + ?Sized,
    {
        let outcome = self.submit_outcome()?;
        sink.accept(outcome.mapping);
        Ok(())
    }

    /// Like [`submit`](Self::submit), but returns the mapping along with the
    /// external value it replaces so the list owner can apply it.
    pub fn submit_outcome(&mut self) -> Result<EditorOutcome, SubmitError> {
        let outcome = self.prepare_submission()?;
        self.finish_submission();
        Ok(outcome)
    }

    pub(crate) fn prepare_submission(&mut self) -> Result<EditorOutcome, SubmitError> {
        if self.state.external_value_draft.trim().is_empty() {
            self.state.status = FieldStatus::Invalid(ValidationError::Required);
            return Err(SubmitError::MissingExternalValue);
        }
        let Some(id) = self.state.local_attribute_draft.clone() else {
            return Err(SubmitError::MissingLocalAttribute);
        };
        if let FieldStatus::Invalid(err) = self.revalidate() {
            return Err(SubmitError::Invalid(err));
        }
        let Some(local_attribute) = self.state.selected_attribute().cloned() else {
            return Err(SubmitError::UnknownLocalAttribute { id });
        };

        let mapping = Mapping::new(self.state.external_value_draft.clone(), local_attribute);
        info!(
            external = %mapping.external_value,
            local = %mapping.local_attribute.id,
            edit = self.props.mode.is_edit(),
            "mapping submitted"
        );
        Ok(EditorOutcome {
            replaces: self
                .props
                .mode
                .editing()
                .map(|original| original.external_value.clone()),
            mapping,
        })
    }

    pub(crate) fn finish_submission(&mut self) {
        if !self.props.mode.is_edit() {
            self.reset();
        }
    }

    /// Point an edit-mode editor at `mapping`, the list's stored copy of its
    /// last submission. Create-mode editors are left untouched.
    pub fn retarget(&mut self, mapping: Mapping) {
        if !self.props.mode.is_edit() {
            return;
        }
        self.props.mode = EditorMode::Edit(mapping);
        self.state.candidates = derive_candidates(&self.props.available, self.props.mode.editing());
        debug!(
            candidates = self.state.candidates.len(),
            "editor retargeted"
        );
    }

    /// Clear both drafts and their validation status.
    pub fn reset(&mut self) {
        self.state.clear_drafts();
    }

    /// True when the drafts differ from what the editor was opened with.
    pub fn is_dirty(&self) -> bool {
        match self.props.mode.editing() {
            Some(mapping) => {
                self.state.external_value_draft != mapping.external_value
                    || self.state.local_attribute_draft.as_deref()
                        != Some(mapping.local_attribute.id.as_str())
            }
            None => {
                !self.state.external_value_draft.is_empty()
                    || self.state.local_attribute_draft.is_some()
            }
        }
    }
}
