use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The two inputs of the mapping form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    ExternalValue,
    LocalAttribute,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::ExternalValue => "External attribute",
            FieldId::LocalAttribute => "Local attribute",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FieldId::ExternalValue => FieldId::LocalAttribute,
            FieldId::LocalAttribute => FieldId::ExternalValue,
        }
    }

    pub fn prev(self) -> Self {
        // two fields, so stepping back is the same as stepping forward
        self.next()
    }
}

/// Apply a key press to a single-line text buffer. Returns whether it changed.
pub(crate) fn edit_text(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_edit_appends_and_erases() {
        let mut buffer = String::new();
        assert!(edit_text(
            &mut buffer,
            &KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE)
        ));
        assert!(edit_text(
            &mut buffer,
            &KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT)
        ));
        assert_eq!(buffer, "uN");
        assert!(edit_text(
            &mut buffer,
            &KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
        ));
        assert_eq!(buffer, "u");
        assert!(edit_text(
            &mut buffer,
            &KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)
        ));
        assert!(!edit_text(
            &mut buffer,
            &KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
        ));
    }

    #[test]
    fn text_edit_rejects_control_chords() {
        let mut buffer = String::new();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(!edit_text(&mut buffer, &ctrl_a));
        assert_eq!(buffer, "");
    }

    #[test]
    fn focus_cycles_between_fields() {
        assert_eq!(FieldId::ExternalValue.next(), FieldId::LocalAttribute);
        assert_eq!(FieldId::LocalAttribute.next(), FieldId::ExternalValue);
        assert_eq!(FieldId::ExternalValue.prev(), FieldId::LocalAttribute);
    }
}
