#![deny(rust_2018_idioms)]
//! Claim-mapping editor for identity-verification providers.
//!
//! A [`MappingEditor`] turns an external attribute name and a chosen
//! [`LocalAttribute`] into a [`Mapping`], validating the name against the
//! mappings already in the list. [`MappingList`] owns that list and feeds
//! editors; [`MappingUI`] hosts both in the terminal.

mod domain;
mod form;
mod io;
mod session;

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod presentation;

pub use domain::{LocalAttribute, Mapping};
pub use form::{
    EditorCommand, EditorEngine, EditorEvent, EditorMode, EditorOutcome, EditorProps, EditorState,
    FieldId, FieldStatus, MappingEditor, MappingSink, SubmitError, ValidationError,
    derive_candidates,
    is_resource_name, is_uri, validate_external_value,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, load_attributes, load_mappings,
    parse_document_str,
};
pub use session::{MappingList, MappingListError};

#[cfg(feature = "tui")]
pub use app::{MappingUI, UiOptions};

pub mod prelude {
    pub use super::{
        LocalAttribute, Mapping, MappingEditor, MappingList, MappingSink, SubmitError,
        ValidationError,
    };
    #[cfg(feature = "tui")]
    pub use super::{MappingUI, UiOptions};
}

#[cfg(test)]
mod tests;
