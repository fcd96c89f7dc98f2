use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DeclarationToken, PreciseIdentifier, TokenKind};

/// A declaration fragment as it appears in symbol-graph files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub kind: String,
    pub spelling: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precise_identifier: Option<String>,
}

impl Fragment {
    pub fn new(kind: impl Into<String>, spelling: impl Into<String>) -> Self {
        Fragment {
            kind: kind.into(),
            spelling: spelling.into(),
            precise_identifier: None,
        }
    }

    pub fn precise_identifier(self, precise_identifier: impl Into<String>) -> Self {
        Fragment {
            precise_identifier: Some(precise_identifier.into()),
            ..self
        }
    }

    fn token_kind(&self) -> TokenKind {
        match self.kind.as_str() {
            "number" => TokenKind::NumberLiteral,
            "string" => TokenKind::StringLiteral,
            kind => kind.parse().unwrap_or_else(|_| {
                debug!(kind, spelling = %self.spelling, "unknown fragment kind, rendering as text");
                TokenKind::Text
            }),
        }
    }
}

impl From<Fragment> for DeclarationToken {
    fn from(fragment: Fragment) -> Self {
        let kind = fragment.token_kind();
        DeclarationToken::new(fragment.spelling, kind)
            .with_precise_identifier(fragment.precise_identifier.map(PreciseIdentifier::new))
    }
}
