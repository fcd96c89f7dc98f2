use crate::Trait;

#[derive(Debug, derive_more::Display, derive_more::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The values handed to a collection had no entry for the trait that was
    /// designated as the default one.
    #[display("no value provided for the default variant '{default_trait}'")]
    MissingDefaultVariant { default_trait: Trait },
}
