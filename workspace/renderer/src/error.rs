use derive_more::From;
use node::ResolvedTopicReference;

#[derive(Debug, From, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// Declaration data was requested for a node that doesn't document a
    /// symbol.
    #[from(skip)]
    #[display("expected a symbol for '{reference}', found {found} semantic")]
    UnsupportedSemanticKind {
        reference: ResolvedTopicReference,
        found: &'static str,
    },

    // The bundle's info could not be read
    #[display("invalid bundle info: {_0}")]
    InvalidBundle(serde_json::Error),
}
