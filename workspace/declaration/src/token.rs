use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The kind of a declaration token.
///
/// The spellings returned by [`TokenKind::as_str`] are what page consumers
/// match on to style and link tokens, so they must never change.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    #[display("keyword")]
    Keyword,
    #[display("text")]
    Text,
    #[display("identifier")]
    Identifier,
    #[display("typeIdentifier")]
    TypeIdentifier,
    #[display("genericParameter")]
    GenericParameter,
    #[display("attribute")]
    Attribute,
    #[display("numberLiteral")]
    NumberLiteral,
    #[display("stringLiteral")]
    StringLiteral,
    #[display("externalIdentifier")]
    ExternalIdentifier,
    #[display("internalParam")]
    InternalParam,
    #[display("externalParam")]
    ExternalParam,
    #[display("label")]
    Label,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Keyword,
        TokenKind::Text,
        TokenKind::Identifier,
        TokenKind::TypeIdentifier,
        TokenKind::GenericParameter,
        TokenKind::Attribute,
        TokenKind::NumberLiteral,
        TokenKind::StringLiteral,
        TokenKind::ExternalIdentifier,
        TokenKind::InternalParam,
        TokenKind::ExternalParam,
        TokenKind::Label,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Text => "text",
            TokenKind::Identifier => "identifier",
            TokenKind::TypeIdentifier => "typeIdentifier",
            TokenKind::GenericParameter => "genericParameter",
            TokenKind::Attribute => "attribute",
            TokenKind::NumberLiteral => "numberLiteral",
            TokenKind::StringLiteral => "stringLiteral",
            TokenKind::ExternalIdentifier => "externalIdentifier",
            TokenKind::InternalParam => "internalParam",
            TokenKind::ExternalParam => "externalParam",
            TokenKind::Label => "label",
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown token kind '{_0}'")]
pub struct UnknownTokenKind(#[error(not(source))] pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// Opaque link target of a token, filled in by reference resolution.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceIdentifier(String);

impl ReferenceIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        ReferenceIdentifier(identifier.into())
    }
}

/// Globally unique identifier of a symbol, independent of how it is spelled.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreciseIdentifier(String);

impl PreciseIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        PreciseIdentifier(identifier.into())
    }
}

/// One styled fragment of a rendered declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationToken {
    text: String,
    kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<ReferenceIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precise_identifier: Option<PreciseIdentifier>,
}

impl DeclarationToken {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        DeclarationToken {
            text: text.into(),
            kind,
            identifier: None,
            precise_identifier: None,
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        DeclarationToken::new(text, TokenKind::Keyword)
    }

    pub fn text(text: impl Into<String>) -> Self {
        DeclarationToken::new(text, TokenKind::Text)
    }

    pub fn type_identifier(text: impl Into<String>) -> Self {
        DeclarationToken::new(text, TokenKind::TypeIdentifier)
    }

    pub fn with_identifier(self, identifier: Option<ReferenceIdentifier>) -> Self {
        DeclarationToken { identifier, ..self }
    }

    pub fn with_precise_identifier(self, precise_identifier: Option<PreciseIdentifier>) -> Self {
        DeclarationToken { precise_identifier, ..self }
    }

    pub fn text_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn identifier(&self) -> Option<&ReferenceIdentifier> {
        self.identifier.as_ref()
    }

    pub fn precise_identifier(&self) -> Option<&PreciseIdentifier> {
        self.precise_identifier.as_ref()
    }
}
