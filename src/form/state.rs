use crate::domain::LocalAttribute;

use super::error::ValidationError;

/// Result of the last validation run on the external attribute field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            FieldStatus::Invalid(err) => Some(*err),
            _ => None,
        }
    }
}

impl From<Result<(), ValidationError>> for FieldStatus {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }
}

/// Transient state owned by one editor instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub(crate) candidates: Vec<LocalAttribute>,
    pub(crate) external_value_draft: String,
    pub(crate) local_attribute_draft: Option<String>,
    pub(crate) status: FieldStatus,
}

impl EditorState {
    pub fn candidates(&self) -> &[LocalAttribute] {
        &self.candidates
    }

    pub fn external_value_draft(&self) -> &str {
        &self.external_value_draft
    }

    pub fn local_attribute_draft(&self) -> Option<&str> {
        self.local_attribute_draft.as_deref()
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn selected_attribute(&self) -> Option<&LocalAttribute> {
        let id = self.local_attribute_draft.as_deref()?;
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.local_attribute_draft.as_deref()?;
        self.candidates.iter().position(|candidate| candidate.id == id)
    }

    /// Submission stays disabled while a draft is empty or the last check failed.
    pub fn can_submit(&self) -> bool {
        !self.external_value_draft.trim().is_empty()
            && self.local_attribute_draft.is_some()
            && self.status.error().is_none()
    }

    pub(crate) fn clear_drafts(&mut self) {
        self.external_value_draft.clear();
        self.local_attribute_draft = None;
        self.status = FieldStatus::Pristine;
    }
}
