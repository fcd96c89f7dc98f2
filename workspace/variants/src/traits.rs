use std::collections::BTreeSet;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifies one axis of variation of a piece of documentation. Today the
/// only axis is the interface language a symbol is exposed in.
///
/// Ordering is only used to keep patches in a deterministic order.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display("{interface_language}")]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    interface_language: String,
}

impl Trait {
    pub fn interface_language(id: impl Into<String>) -> Self {
        Trait {
            interface_language: id.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.interface_language
    }
}

/// The traits a documentation node is available under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitSet(BTreeSet<Trait>);

impl TraitSet {
    pub fn new(traits: impl IntoIterator<Item = Trait>) -> Self {
        TraitSet(traits.into_iter().collect())
    }

    pub fn contains(&self, trait_: &Trait) -> bool {
        self.0.contains(trait_)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.0.iter()
    }
}

impl FromIterator<Trait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        TraitSet::new(iter)
    }
}
