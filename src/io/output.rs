use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
#[cfg(feature = "toml")]
use serde::Serialize;

use crate::domain::Mapping;

use super::DocumentFormat;

/// Destination for the finished mapping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Controls how mappings are serialized after the editor closes.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize the mapping list and write it to every configured destination.
pub fn emit(mappings: &[Mapping], options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let mut payload = encode(mappings, options.format, options.pretty)
        .with_context(|| format!("failed to encode mappings as {:?}", options.format))?;
    if !payload.ends_with('\n') {
        payload.push('\n');
    }
    for destination in &options.destinations {
        destination.write(payload.as_bytes())?;
    }
    tracing::debug!(
        count = mappings.len(),
        destinations = options.destinations.len(),
        format = ?options.format,
        "mappings emitted"
    );
    Ok(())
}

/// Top-level shape of a mapping document for formats without bare arrays.
#[cfg(feature = "toml")]
#[derive(Serialize)]
struct MappingDocument<'a> {
    mappings: &'a [Mapping],
}

fn encode(mappings: &[Mapping], format: DocumentFormat, pretty: bool) -> Result<String> {
    let encoded = match format {
        DocumentFormat::Json if pretty => serde_json::to_string_pretty(mappings)?,
        DocumentFormat::Json => serde_json::to_string(mappings)?,
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(mappings)?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml if pretty => toml::to_string_pretty(&MappingDocument { mappings })?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::to_string(&MappingDocument { mappings })?,
    };
    Ok(encoded)
}

impl OutputDestination {
    fn write(&self, payload: &[u8]) -> Result<()> {
        match self {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(payload)
                    .and_then(|()| stdout.flush())
                    .context("failed to write to stdout")
            }
            OutputDestination::File(path) => fs::write(path, payload)
                .with_context(|| format!("failed to write to file {}", path.display())),
        }
    }
}
