use crate::{domain::LocalAttribute, presentation::PopupRender};

/// Open selector listing the editor's candidates.
pub(crate) struct PopupState {
    title: String,
    options: Vec<String>,
    ids: Vec<Option<String>>,
    selected: usize,
}

impl PopupState {
    /// `None` when no candidate can be selected.
    pub(crate) fn from_candidates(
        title: impl Into<String>,
        candidates: &[LocalAttribute],
        current: Option<usize>,
    ) -> Option<Self> {
        if !candidates.iter().any(LocalAttribute::is_selectable) {
            return None;
        }
        let options = candidates
            .iter()
            .map(|candidate| {
                if candidate.is_selectable() {
                    candidate.label()
                } else {
                    format!("{} (unavailable)", candidate.label())
                }
            })
            .collect();
        let ids = candidates
            .iter()
            .map(|candidate| candidate.is_selectable().then(|| candidate.id.clone()))
            .collect::<Vec<_>>();
        let selected = current
            .filter(|idx| ids.get(*idx).is_some_and(Option::is_some))
            .or_else(|| ids.iter().position(Option::is_some))
            .unwrap_or(0);
        Some(Self {
            title: title.into(),
            options,
            ids,
            selected,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        self.step(-1);
    }

    pub(crate) fn select_next(&mut self) {
        self.step(1);
    }

    /// Move to the next selectable row, wrapping around.
    fn step(&mut self, delta: isize) {
        let len = self.ids.len() as isize;
        if len == 0 {
            return;
        }
        let mut idx = self.selected as isize;
        for _ in 0..len {
            idx = (idx + delta).rem_euclid(len);
            if self.ids[idx as usize].is_some() {
                self.selected = idx as usize;
                return;
            }
        }
    }

    pub(crate) fn selected_id(&self) -> Option<&str> {
        self.ids.get(self.selected)?.as_deref()
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}
