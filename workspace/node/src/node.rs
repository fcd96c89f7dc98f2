use std::collections::BTreeSet;

use derive_setters::Setters;
use variants::TraitSet;

use crate::{ResolvedTopicReference, SourceLanguage, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
}

/// What a documentation node is about.
#[derive(Debug, Clone, PartialEq)]
pub enum Semantic {
    Symbol(Box<Symbol>),
    Article(Article),
}

impl Semantic {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Semantic::Symbol(_) => "symbol",
            Semantic::Article(_) => "article",
        }
    }
}

impl From<Symbol> for Semantic {
    fn from(symbol: Symbol) -> Self {
        Semantic::Symbol(Box::new(symbol))
    }
}

impl From<Article> for Semantic {
    fn from(article: Article) -> Self {
        Semantic::Article(article)
    }
}

/// A documentation page and the data it was built from.
///
/// Nodes are produced by ingestion and only read afterwards.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct DocumentationNode {
    #[setters(skip)]
    pub reference: ResolvedTopicReference,
    pub source_language: SourceLanguage,

    /// Every language the node is available in. Its variant collections
    /// are keyed over the traits of these languages.
    pub available_source_languages: BTreeSet<SourceLanguage>,
    pub name: String,
    #[setters(strip_option)]
    pub semantic: Option<Semantic>,
}

impl DocumentationNode {
    pub fn new(reference: ResolvedTopicReference, name: impl Into<String>) -> Self {
        let source_language = reference.source_language.clone();
        DocumentationNode {
            reference,
            available_source_languages: BTreeSet::from([source_language.clone()]),
            source_language,
            name: name.into(),
            semantic: None,
        }
    }

    pub fn available_traits(&self) -> TraitSet {
        self.available_source_languages
            .iter()
            .map(SourceLanguage::trait_)
            .collect()
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match &self.semantic {
            Some(Semantic::Symbol(symbol)) => Some(symbol.as_ref()),
            _ => None,
        }
    }
}
