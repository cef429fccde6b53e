#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    ExternalValueChanged(String),
    LocalAttributeSelected(String),
    Submit,
    Reset,
}
