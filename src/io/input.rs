use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{LocalAttribute, Mapping};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Read the local attribute catalogue: a bare array or `{ "attributes": [...] }`.
pub fn load_attributes(document: &Value) -> Result<Vec<LocalAttribute>> {
    load_list(document, "attributes")
}

/// Read existing mappings: a bare array or `{ "mappings": [...] }`.
///
/// External values must be unique across the document.
pub fn load_mappings(document: &Value) -> Result<Vec<Mapping>> {
    let mappings: Vec<Mapping> = load_list(document, "mappings")?;
    let mut seen = HashSet::with_capacity(mappings.len());
    for (index, mapping) in mappings.iter().enumerate() {
        if !seen.insert(mapping.external_value.as_str()) {
            return Err(anyhow!(
                "invalid mappings document:\n/{index}/externalValue: '{}' is mapped more than once",
                mapping.external_value
            ));
        }
    }
    Ok(mappings)
}

fn load_list<T>(document: &Value, key: &str) -> Result<Vec<T>>
where
    T: JsonSchema + DeserializeOwned,
{
    let list = match document {
        Value::Array(_) => document,
        Value::Object(map) => map
            .get(key)
            .ok_or_else(|| anyhow!("document has no '{key}' member"))?,
        _ => return Err(anyhow!("expected an array or an object with '{key}'")),
    };

    let schema = serde_json::to_value(schema_for!(Vec<T>))
        .with_context(|| format!("failed to build schema for {key}"))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|err| anyhow!("failed to compile schema for {key}: {err}"))?;
    let issues = validator
        .iter_errors(list)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let prefix = if pointer.is_empty() {
                "<root>".to_string()
            } else {
                pointer
            };
            format!("{prefix}: {error}")
        })
        .collect::<Vec<_>>();
    if !issues.is_empty() {
        return Err(anyhow!("invalid {key} document:\n{}", issues.join("\n")));
    }

    serde_json::from_value(list.clone()).with_context(|| format!("failed to decode {key}"))
}
