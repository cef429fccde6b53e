mod input;
mod mapping_ui;
mod options;
mod popup;
mod runtime;
mod status;
mod terminal;

pub use mapping_ui::MappingUI;
pub use options::UiOptions;
