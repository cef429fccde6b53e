mod actions;
mod candidates;
mod editor;
mod error;
mod field;
mod reducers;
mod sink;
mod state;
mod validation;

pub use actions::EditorCommand;
pub use candidates::derive_candidates;
pub use editor::{EditorMode, EditorOutcome, EditorProps, MappingEditor};
pub use error::{SubmitError, ValidationError};
pub use field::FieldId;
pub(crate) use field::edit_text;
pub use reducers::{EditorEngine, EditorEvent};
pub use sink::MappingSink;
pub use state::{EditorState, FieldStatus};
pub use validation::{is_resource_name, is_uri, validate_external_value};
