use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::{
    domain::{LocalAttribute, Mapping},
    form::{EditorMode, EditorOutcome, EditorProps, MappingEditor, SubmitError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingListError {
    NotFound { external_value: String },
    Duplicate { external_value: String },
    Submit(SubmitError),
}

impl fmt::Display for MappingListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingListError::NotFound { external_value } => {
                write!(f, "no mapping for external attribute '{external_value}'")
            }
            MappingListError::Duplicate { external_value } => {
                write!(f, "external attribute '{external_value}' is already mapped")
            }
            MappingListError::Submit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MappingListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MappingListError::Submit(err) => Some(err),
            MappingListError::NotFound { .. } | MappingListError::Duplicate { .. } => None,
        }
    }
}

impl From<SubmitError> for MappingListError {
    fn from(err: SubmitError) -> Self {
        MappingListError::Submit(err)
    }
}

/// Owner of the claim-mapping list: the side that feeds editors and receives
/// their submissions.
#[derive(Debug, Clone, Default)]
pub struct MappingList {
    attributes: Vec<LocalAttribute>,
    mappings: IndexMap<String, Mapping>,
}

impl MappingList {
    /// Fails with [`MappingListError::Duplicate`] when two mappings share an
    /// external value.
    pub fn new(
        attributes: Vec<LocalAttribute>,
        mappings: Vec<Mapping>,
    ) -> Result<Self, MappingListError> {
        let mut list = Self {
            attributes,
            mappings: IndexMap::with_capacity(mappings.len()),
        };
        for mapping in mappings {
            list.append(mapping)?;
        }
        Ok(list)
    }

    pub fn attributes(&self) -> &[LocalAttribute] {
        &self.attributes
    }

    pub fn mappings(&self) -> Vec<Mapping> {
        self.mappings.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn get(&self, external_value: &str) -> Option<&Mapping> {
        self.mappings.get(external_value)
    }

    /// Attributes that no mapping points at yet, in their original order.
    pub fn available(&self) -> Vec<LocalAttribute> {
        self.attributes
            .iter()
            .filter(|attribute| {
                !self
                    .mappings
                    .values()
                    .any(|mapping| mapping.local_attribute.id == attribute.id)
            })
            .cloned()
            .collect()
    }

    pub fn editor_props(&self, mode: EditorMode) -> EditorProps {
        EditorProps {
            available: self.available(),
            already_mapped: self.mappings(),
            mode,
        }
    }

    pub fn editor_for_create(&self) -> MappingEditor {
        MappingEditor::new(self.editor_props(EditorMode::Create))
    }

    pub fn editor_for_edit(&self, external_value: &str) -> Result<MappingEditor, MappingListError> {
        let mapping = self
            .get(external_value)
            .cloned()
            .ok_or_else(|| MappingListError::NotFound {
                external_value: external_value.to_string(),
            })?;
        Ok(MappingEditor::new(
            self.editor_props(EditorMode::Edit(mapping)),
        ))
    }

    /// Submit `editor` and fold the emitted mapping into the list.
    ///
    /// Afterwards the editor sees the updated list. An edit-mode editor is
    /// pointed at the stored mapping, so it can be submitted again.
    pub fn submit(&mut self, editor: &mut MappingEditor) -> Result<Mapping, MappingListError> {
        let outcome = editor.prepare_submission()?;
        let mapping = outcome.mapping.clone();
        self.apply(outcome)?;
        editor.finish_submission();
        editor.retarget(mapping.clone());
        self.refresh(editor);
        Ok(mapping)
    }

    /// Append a new mapping or replace the one it was edited from.
    pub fn apply(&mut self, outcome: EditorOutcome) -> Result<(), MappingListError> {
        match outcome.replaces {
            None => self.append(outcome.mapping),
            Some(original) => self.replace(&original, outcome.mapping),
        }
    }

    /// Push the list's current view into an open editor.
    pub fn refresh(&self, editor: &mut MappingEditor) {
        editor.set_available(self.available());
        editor.set_already_mapped(self.mappings());
    }

    /// Add `mapping` at the end. An existing external value is never overwritten.
    pub fn append(&mut self, mapping: Mapping) -> Result<(), MappingListError> {
        if self.mappings.contains_key(&mapping.external_value) {
            return Err(MappingListError::Duplicate {
                external_value: mapping.external_value,
            });
        }
        info!(external = %mapping.external_value, "mapping added");
        self.mappings.insert(mapping.external_value.clone(), mapping);
        Ok(())
    }

    /// Swap the entry keyed by `original` for `mapping`, keeping its position.
    pub fn replace(&mut self, original: &str, mapping: Mapping) -> Result<(), MappingListError> {
        let Some(index) = self.mappings.get_index_of(original) else {
            return Err(MappingListError::NotFound {
                external_value: original.to_string(),
            });
        };
        if mapping.external_value != original && self.mappings.contains_key(&mapping.external_value)
        {
            return Err(MappingListError::Duplicate {
                external_value: mapping.external_value,
            });
        }
        self.mappings.shift_remove_index(index);
        let key = mapping.external_value.clone();
        let (inserted, _) = self.mappings.insert_full(key, mapping);
        self.mappings.move_index(inserted, index);
        debug!(original, position = index, "mapping replaced");
        Ok(())
    }

    pub fn remove(&mut self, external_value: &str) -> Option<Mapping> {
        let removed = self.mappings.shift_remove(external_value);
        if removed.is_some() {
            info!(external = external_value, "mapping removed");
        }
        removed
    }
}
