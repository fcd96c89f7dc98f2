use declaration::DeclarationToken;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use variants::VariantCollection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolKind {
    pub identifier: String,
    pub display_name: String,
}

impl SymbolKind {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        SymbolKind {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// What a symbol is and what it is called.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SymbolIdentity {
    #[setters(skip)]
    pub kind_variants: VariantCollection<SymbolKind>,
    #[setters(skip)]
    pub title_variants: VariantCollection<String>,
    pub external_id_variants: VariantCollection<Option<String>>,
}

impl SymbolIdentity {
    pub fn new(
        kind_variants: VariantCollection<SymbolKind>,
        title_variants: VariantCollection<String>,
    ) -> Self {
        SymbolIdentity {
            kind_variants,
            title_variants,
            external_id_variants: VariantCollection::new(None),
        }
    }
}

/// How a symbol is declared, as tokens ready to be rendered.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SymbolDeclaration {
    /// Shown under the title of the symbol's page.
    #[setters(skip)]
    pub sub_heading_variants: VariantCollection<Vec<DeclarationToken>>,
    /// Shown in the navigation sidebar.
    #[setters(skip)]
    pub navigator_variants: VariantCollection<Vec<DeclarationToken>>,
    pub role_heading_variants: VariantCollection<Option<String>>,
}

impl SymbolDeclaration {
    pub fn new(
        sub_heading_variants: VariantCollection<Vec<DeclarationToken>>,
        navigator_variants: VariantCollection<Vec<DeclarationToken>>,
    ) -> Self {
        SymbolDeclaration {
            sub_heading_variants,
            navigator_variants,
            role_heading_variants: VariantCollection::new(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolAvailability {
    pub platform_name_variants: VariantCollection<Option<String>>,
    pub access_level_variants: VariantCollection<Option<String>>,
}

/// The semantic payload of a node that documents a symbol.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct Symbol {
    #[setters(skip)]
    pub identity: SymbolIdentity,
    #[setters(skip)]
    pub declaration: SymbolDeclaration,
    #[setters(strip_option)]
    pub availability: Option<SymbolAvailability>,
}

impl Symbol {
    pub fn new(identity: SymbolIdentity, declaration: SymbolDeclaration) -> Self {
        Symbol {
            identity,
            declaration,
            availability: None,
        }
    }
}
