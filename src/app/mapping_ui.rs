use anyhow::{Context, Result};
use tracing::info;

use crate::{
    domain::{LocalAttribute, Mapping},
    io::{self, OutputOptions},
    session::MappingList,
};

use super::{options::UiOptions, runtime::App};

/// Terminal front end hosting a mapping editor over a mapping list.
#[derive(Debug)]
pub struct MappingUI {
    attributes: Vec<LocalAttribute>,
    mappings: Vec<Mapping>,
    title: Option<String>,
    edit: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl MappingUI {
    pub fn new(attributes: Vec<LocalAttribute>, mappings: Vec<Mapping>) -> Self {
        Self {
            attributes,
            mappings,
            title: None,
            edit: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Open the existing mapping keyed by `external_value` instead of a blank form.
    pub fn with_edit(mut self, external_value: impl Into<String>) -> Self {
        self.edit = Some(external_value.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Write the final list once the UI closes.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<Vec<Mapping>> {
        let MappingUI {
            attributes,
            mappings,
            title,
            edit,
            options,
            output,
        } = self;

        let list =
            MappingList::new(attributes, mappings).context("cannot load existing mappings")?;
        let editor = match edit.as_deref() {
            Some(external_value) => list
                .editor_for_edit(external_value)
                .context("cannot open mapping for editing")?,
            None => list.editor_for_create(),
        };
        info!(
            attributes = list.attributes().len(),
            mappings = list.len(),
            edit = edit.is_some(),
            "starting mapping editor"
        );

        let title = title.unwrap_or_else(|| "Claim mappings".to_string());
        let mut app = App::new(title, list, editor, options);
        let result = app.run()?;

        if let Some(output) = output {
            io::emit(&result, &output)?;
        }
        Ok(result)
    }
}
