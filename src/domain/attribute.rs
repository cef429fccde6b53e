use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A locally recognized claim that an external attribute can be mapped onto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalAttribute {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub uri: String,
}

impl LocalAttribute {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            uri: uri.into(),
        }
    }

    /// Entries without an id cannot be picked from the selector.
    pub fn is_selectable(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn label(&self) -> String {
        [&self.display_name, &self.uri, &self.id]
            .into_iter()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}

/// Association between an attribute name reported by the provider and a local claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub external_value: String,
    pub local_attribute: LocalAttribute,
}

impl Mapping {
    pub fn new(external_value: impl Into<String>, local_attribute: LocalAttribute) -> Self {
        Self {
            external_value: external_value.into(),
            local_attribute,
        }
    }
}
