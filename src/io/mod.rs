mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_attributes, load_mappings, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit};
