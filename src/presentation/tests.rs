use ratatui::{Terminal, backend::TestBackend};

use super::{PopupRender, UiContext, draw};
use crate::{
    domain::{LocalAttribute, Mapping},
    form::{FieldId, MappingEditor},
};

fn render(ctx_for: impl FnOnce() -> (MappingEditor, Vec<Mapping>), popup: bool) -> String {
    let (editor, mappings) = ctx_for();
    let options = vec!["Email".to_string(), "Country".to_string()];
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            draw(
                frame,
                UiContext {
                    title: "IdVP",
                    editor: &editor,
                    focus: FieldId::ExternalValue,
                    mappings: &mappings,
                    status_message: "Ready",
                    help: Some("Ctrl+S submit"),
                    dirty: false,
                    show_mapping_list: true,
                    popup: popup.then(|| PopupRender {
                        title: "Local attribute",
                        options: &options,
                        selected: 1,
                    }),
                },
            )
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample() -> (MappingEditor, Vec<Mapping>) {
    let existing = vec![Mapping::new(
        "mail",
        LocalAttribute::new("a2", "Email", "urn:claims:email"),
    )];
    let editor = MappingEditor::create(
        vec![LocalAttribute::new("a1", "Country", "urn:claims:country")],
        existing.clone(),
    );
    (editor, existing)
}

#[test]
fn renders_form_and_mapping_list() {
    let screen = render(sample, false);
    assert!(screen.contains("IdVP • new mapping"), "{screen}");
    assert!(screen.contains("External attribute *"));
    assert!(screen.contains("<choose>"));
    assert!(screen.contains("1 available"));
    assert!(screen.contains("Mappings (1)"));
    assert!(screen.contains("mail → Email"));
    assert!(screen.contains("(disabled)"));
}

#[test]
fn renders_inline_validation_error() {
    let screen = render(
        || {
            let (mut editor, mappings) = sample();
            editor.set_external_value("mail");
            (editor, mappings)
        },
        false,
    );
    assert!(screen.contains("already mapped (DUPLICATE)"), "{screen}");
    assert!(screen.contains("[! DUPLICATE]"));
}

#[test]
fn enabled_submit_when_form_is_complete() {
    let screen = render(
        || {
            let (mut editor, mappings) = sample();
            editor.set_external_value("country");
            editor.select_local_attribute("a1");
            (editor, mappings)
        },
        false,
    );
    assert!(screen.contains("[ Add mapping ]"));
    assert!(!screen.contains("(disabled)"), "{screen}");
    assert!(screen.contains("urn:claims:country"));
}

#[test]
fn renders_selector_popup() {
    let screen = render(sample, true);
    assert!(screen.contains("Local attribute (↑/↓, Enter, Esc)"), "{screen}");
    assert!(screen.contains("» Country"));
}
