use crate::domain::{LocalAttribute, Mapping};

/// Build the selector's working list.
///
/// The parent leaves attributes that are already in use out of `available`,
/// so in edit mode the edited mapping's own attribute is appended back.
/// No deduplication is attempted.
pub fn derive_candidates(
    available: &[LocalAttribute],
    editing: Option<&Mapping>,
) -> Vec<LocalAttribute> {
    let mut candidates = available.to_vec();
    if let Some(mapping) = editing
        && !mapping.external_value.is_empty()
    {
        candidates.push(mapping.local_attribute.clone());
    }
    candidates
}
