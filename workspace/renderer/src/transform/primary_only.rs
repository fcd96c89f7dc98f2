use variants::{Trait, VariantCollection};

use crate::Transform;

/// Applies a transform to the primary variant of a collection only.
///
/// The default value always belongs to the primary trait. A patch is
/// transformed only if it is keyed by the primary trait as well.
pub struct PrimaryOnly<A> {
    inner: A,
    primary: Trait,
}

impl<A> PrimaryOnly<A> {
    pub fn new(inner: A, primary: Trait) -> Self {
        Self { inner, primary }
    }
}

impl<A: Transform> PrimaryOnly<A>
where
    A::Value: Clone,
{
    pub fn apply(&self, input: &VariantCollection<A::Value>) -> VariantCollection<A::Value> {
        input.map_variants(
            |value| self.inner.transform(value.clone()),
            |trait_, value| {
                if trait_ == &self.primary {
                    self.inner.transform(value.clone())
                } else {
                    value.clone()
                }
            },
        )
    }
}
