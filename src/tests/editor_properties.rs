use crate::{
    domain::{LocalAttribute, Mapping},
    form::{
        EditorMode, EditorProps, FieldStatus, MappingEditor, ValidationError, derive_candidates,
    },
    session::MappingList,
};

fn attr(id: &str, uri: &str) -> LocalAttribute {
    LocalAttribute::new(id, "", uri)
}

#[test]
fn worked_example_emits_and_resets() {
    let mut editor = MappingEditor::new(EditorProps {
        available: vec![attr("a1", "urn:x")],
        already_mapped: Vec::new(),
        mode: EditorMode::Create,
    });
    assert_eq!(editor.set_external_value("urn:y"), FieldStatus::Valid);
    assert!(editor.state().status().error().is_none());
    editor.select_local_attribute("a1");

    let mut received: Vec<Mapping> = Vec::new();
    editor.submit(&mut received).unwrap();

    assert_eq!(
        received,
        vec![Mapping {
            external_value: "urn:y".into(),
            local_attribute: attr("a1", "urn:x"),
        }]
    );
    assert_eq!(editor.state().external_value_draft(), "");
    assert_eq!(editor.state().local_attribute_draft(), None);
}

#[test]
fn disjunctive_format_acceptance() {
    let mut editor = MappingEditor::create(Vec::new(), Vec::new());
    for value in ["urn:idv:given_name", "given_name", "https://idv.example/claims#dob"] {
        assert_eq!(editor.set_external_value(value), FieldStatus::Valid, "{value}");
    }
    for value in ["given name", "urn:", "%41"] {
        assert_eq!(
            editor.set_external_value(value),
            FieldStatus::Invalid(ValidationError::InvalidFormat),
            "{value}"
        );
    }
}

#[test]
fn submit_stays_disabled_while_invalid() {
    let existing = vec![Mapping::new("email", attr("a2", "urn:email"))];
    let mut editor = MappingEditor::create(vec![attr("a1", "urn:x")], existing);
    editor.select_local_attribute("a1");
    editor.set_external_value("email");
    assert!(!editor.can_submit());
    editor.set_external_value("email2");
    assert!(editor.can_submit());
    editor.set_external_value(" ");
    assert_eq!(
        editor.state().status(),
        FieldStatus::Invalid(ValidationError::Required)
    );
    assert!(!editor.can_submit());
}

#[test]
fn edit_mode_is_idempotent_for_unchanged_value() {
    let current = Mapping::new("email", attr("a9", "urn:email"));
    let others = Mapping::new("phone", attr("a8", "urn:phone"));
    let mut editor = MappingEditor::edit(
        current.clone(),
        Vec::new(),
        vec![current.clone(), others],
    );
    assert_eq!(editor.set_external_value("email"), FieldStatus::Valid);
    assert_eq!(
        editor.set_external_value("phone"),
        FieldStatus::Invalid(ValidationError::Duplicate)
    );
}

#[test]
fn derived_candidates_append_edited_attribute_once() {
    let available = vec![attr("a1", "urn:x"), attr("a2", "urn:z")];
    let current = Mapping::new("email", attr("a9", "urn:email"));
    let derived = derive_candidates(&available, Some(&current));
    assert_eq!(&derived[..2], &available[..]);
    assert_eq!(derived.len(), available.len() + 1);
    assert_eq!(derived.last(), Some(&current.local_attribute));

    let editor = MappingEditor::edit(current, available, Vec::new());
    assert_eq!(editor.candidates(), &derived[..]);
}

#[test]
fn list_and_editor_cooperate_on_add_another() {
    let mut list = MappingList::new(
        vec![attr("a1", "urn:x"), attr("a2", "urn:z")],
        Vec::new(),
    )
    .unwrap();
    let mut editor = list.editor_for_create();
    editor.set_external_value("first");
    editor.select_local_attribute("a1");
    list.submit(&mut editor).unwrap();

    editor.set_external_value("first");
    assert_eq!(
        editor.state().status(),
        FieldStatus::Invalid(ValidationError::Duplicate)
    );
    assert!(!editor.select_local_attribute("a1"));
    assert!(editor.select_local_attribute("a2"));
    editor.set_external_value("second");
    list.submit(&mut editor).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.available().is_empty());
}

#[test]
fn edit_editor_follows_its_mapping_across_submissions() {
    let mut list = MappingList::new(
        vec![attr("a1", "urn:x"), attr("a2", "urn:z")],
        vec![
            Mapping::new("mail", attr("a1", "urn:x")),
            Mapping::new("phone", attr("a2", "urn:z")),
        ],
    )
    .unwrap();
    let mut editor = list.editor_for_edit("mail").unwrap();
    for external in ["mail2", "mail2", "urn:idv:mail"] {
        editor.set_external_value(external);
        assert_eq!(list.submit(&mut editor).unwrap().external_value, external);
        assert_eq!(editor.state().external_value_draft(), external);
    }
    let externals: Vec<_> = list.mappings().into_iter().map(|m| m.external_value).collect();
    assert_eq!(externals, ["urn:idv:mail", "phone"]);
    assert!(list.get("mail").is_none());
}
