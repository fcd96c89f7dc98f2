use declaration::{DeclarationToken, TokenKind};
use tracing::trace;

use crate::Transform;

/// Turns type-identifier tokens into identifier tokens so that reference
/// resolution can link them later.
pub struct TypeIdentifierToIdentifier;

impl Transform for TypeIdentifierToIdentifier {
    type Value = Vec<DeclarationToken>;

    fn transform(&self, input: Self::Value) -> Self::Value {
        input
            .into_iter()
            .map(|token| match token.kind() {
                TokenKind::TypeIdentifier => {
                    trace!(
                        text = token.text_str(),
                        "type identifier rewritten to identifier"
                    );
                    // The link target is left for reference resolution to fill in.
                    DeclarationToken::new(token.text_str(), TokenKind::Identifier)
                        .with_precise_identifier(token.precise_identifier().cloned())
                }
                _ => token,
            })
            .collect()
    }
}
