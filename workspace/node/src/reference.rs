use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::SourceLanguage;

/// A reference to a documentation page that is known to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTopicReference {
    pub bundle_id: String,
    pub path: String,
    pub fragment: Option<String>,
    pub source_language: SourceLanguage,
}

impl ResolvedTopicReference {
    pub fn new(
        bundle_id: impl Into<String>,
        path: impl Into<String>,
        source_language: SourceLanguage,
    ) -> Self {
        ResolvedTopicReference {
            bundle_id: bundle_id.into(),
            path: path.into(),
            fragment: None,
            source_language,
        }
    }

    pub fn with_fragment(self, fragment: impl Into<String>) -> Self {
        ResolvedTopicReference {
            fragment: Some(fragment.into()),
            ..self
        }
    }
}

impl Display for ResolvedTopicReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc://{}{}", self.bundle_id, self.path)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
