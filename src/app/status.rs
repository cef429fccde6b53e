use crate::domain::Mapping;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const CREATE_STATUS: &str = "Ready. Press Ctrl+S to add the mapping.";
pub const EDIT_STATUS: &str = "Ready. Press Ctrl+S to update the mapping.";

impl StatusLine {
    pub fn new(edit: bool) -> Self {
        let mut status = Self {
            message: String::new(),
        };
        status.ready(edit);
        status
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self, edit: bool) {
        self.message = if edit { EDIT_STATUS } else { CREATE_STATUS }.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn added(&mut self, mapping: &Mapping) {
        self.message = format!(
            "Added {} -> {}. Enter another or press Ctrl+Q to finish.",
            mapping.external_value,
            mapping.local_attribute.label()
        );
    }

    pub fn updated(&mut self, mapping: &Mapping) {
        self.message = format!(
            "Updated {} -> {}. Press Ctrl+Q to finish.",
            mapping.external_value,
            mapping.local_attribute.label()
        );
    }

    pub fn rejected(&mut self, reason: &str) {
        self.message = format!("Cannot submit: {reason}");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsubmitted changes. Press Ctrl+Q again to quit anyway.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
