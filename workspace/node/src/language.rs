use serde::{Deserialize, Serialize};
use variants::Trait;

/// A programming language documentation can be written for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLanguage {
    pub id: String,
    pub name: String,
}

impl SourceLanguage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        SourceLanguage {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn swift() -> Self {
        SourceLanguage::new("swift", "Swift")
    }

    pub fn objective_c() -> Self {
        SourceLanguage::new("occ", "Objective-C")
    }

    /// The variant trait content specific to this language is stored under.
    pub fn trait_(&self) -> Trait {
        Trait::interface_language(self.id.as_str())
    }
}
