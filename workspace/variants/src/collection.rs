use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Patch, Trait};

/// A value that is usually the same for every trait of a documentation node
/// but may differ for a few of them.
///
/// Only traits whose value differs from the default carry a patch. Looking up
/// any other trait, including ones the collection has never seen, yields the
/// default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCollection<T> {
    default_value: T,
    patches: BTreeMap<Trait, Patch<T>>,
}

impl<T> VariantCollection<T> {
    /// Creates a collection that holds the same value for every trait.
    pub fn new(default_value: T) -> Self {
        VariantCollection {
            default_value,
            patches: BTreeMap::new(),
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    pub fn value(&self, trait_: &Trait) -> &T {
        self.patches
            .get(trait_)
            .map(Patch::value)
            .unwrap_or(&self.default_value)
    }

    pub fn patch(&self, trait_: &Trait) -> Option<&Patch<T>> {
        self.patches.get(trait_)
    }

    pub fn patches(&self) -> impl Iterator<Item = (&Trait, &Patch<T>)> {
        self.patches.iter()
    }

    pub fn has_patches(&self) -> bool {
        !self.patches.is_empty()
    }

    /// Applies `f` to the default value and to every patch.
    ///
    /// Patches are carried over as they are, even when the mapped value
    /// ends up equal to the mapped default.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> VariantCollection<U> {
        VariantCollection {
            default_value: f(&self.default_value),
            patches: self
                .patches
                .iter()
                .map(|(trait_, patch)| (trait_.clone(), patch.map(&mut f)))
                .collect(),
        }
    }

    /// Like [`VariantCollection::map`], but the default value and the patches
    /// go through separate functions and each patch sees its trait.
    pub fn map_variants<U>(
        &self,
        default: impl FnOnce(&T) -> U,
        mut patch: impl FnMut(&Trait, &T) -> U,
    ) -> VariantCollection<U> {
        VariantCollection {
            default_value: default(&self.default_value),
            patches: self
                .patches
                .iter()
                .map(|(trait_, value)| {
                    (trait_.clone(), value.map(|value| patch(trait_, value)))
                })
                .collect(),
        }
    }
}

impl<T: PartialEq> VariantCollection<T> {
    /// Builds a collection out of one value per trait.
    ///
    /// When a trait is listed more than once its last value is kept.
    pub fn try_new(
        values: impl IntoIterator<Item = (Trait, T)>,
        default_trait: &Trait,
    ) -> Result<Self, Error> {
        let mut values = values.into_iter().collect::<BTreeMap<_, _>>();
        let default_value = values.remove(default_trait).ok_or_else(|| {
            Error::MissingDefaultVariant {
                default_trait: default_trait.clone(),
            }
        })?;

        let patches = values
            .into_iter()
            .filter(|(_, value)| value != &default_value)
            .map(|(trait_, value)| (trait_, Patch::Replace(value)))
            .collect();

        Ok(VariantCollection {
            default_value,
            patches,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct Variant<T> {
    traits: Vec<Trait>,
    patch: Vec<Patch<T>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedRef<'a, T> {
    default_value: &'a T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    variants: Vec<Variant<&'a T>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Encoded<T> {
    default_value: T,
    #[serde(default = "Vec::new")]
    variants: Vec<Variant<T>>,
}

impl<T: Serialize> Serialize for VariantCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let variants = self
            .patches
            .iter()
            .map(|(trait_, patch)| Variant {
                traits: vec![trait_.clone()],
                patch: vec![Patch::Replace(patch.value())],
            })
            .collect();

        EncodedRef {
            default_value: &self.default_value,
            variants,
        }
        .serialize(serializer)
    }
}

/// Reads the page format back.
///
/// The page format doesn't say which trait the default value belongs to, so
/// patches are kept exactly as listed and are not compared with the default
/// value. A patch listed for the default trait therefore wins over the
/// default value when that trait is looked up. Only [`VariantCollection::try_new`]
/// guarantees that the default trait resolves to the default value.
impl<'de, T: Deserialize<'de> + Clone> Deserialize<'de> for VariantCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Encoded::<T>::deserialize(deserializer)?;

        let mut patches = BTreeMap::new();
        for variant in encoded.variants {
            // Replace operations overwrite each other, only the last one counts.
            if let Some(patch) = variant.patch.into_iter().last() {
                for trait_ in variant.traits {
                    patches.insert(trait_, patch.clone());
                }
            }
        }

        Ok(VariantCollection {
            default_value: encoded.default_value,
            patches,
        })
    }
}
