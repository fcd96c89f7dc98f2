use node::SourceLanguage;
use serde::{Deserialize, Serialize};
use variants::Trait;

use crate::Error;

/// Read-only access to the documentation context a renderer works in.
pub trait RenderContext {
    /// The trait of the bundle's primary documentation language.
    fn default_trait(&self) -> Trait;
}

/// Information about the documentation bundle being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub id: String,
    pub display_name: String,
    #[serde(default = "SourceLanguage::swift")]
    pub default_language: SourceLanguage,
}

impl Bundle {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Bundle {
            id: id.into(),
            display_name: display_name.into(),
            default_language: SourceLanguage::swift(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl RenderContext for Bundle {
    fn default_trait(&self) -> Trait {
        self.default_language.trait_()
    }
}
