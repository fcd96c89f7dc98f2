use declaration::DeclarationToken;
use node::{DocumentationNode, Semantic, SymbolDeclaration};
use tracing::debug;
use variants::VariantCollection;

use crate::{Error, RenderContext, Transform, TypeIdentifierToIdentifier};

pub type DeclarationFragments = VariantCollection<Vec<DeclarationToken>>;

/// Renders the declaration data of documentation nodes.
///
/// The renderer keeps no state besides the context it borrows, so a single
/// instance can be shared by threads rendering different nodes.
pub struct ContentRenderer<'a, Ctx> {
    context: &'a Ctx,
}

impl<'a, Ctx: RenderContext> ContentRenderer<'a, Ctx> {
    pub fn new(context: &'a Ctx) -> Self {
        Self { context }
    }

    /// The declaration tokens shown under the title of the node's page.
    pub fn sub_heading_fragments(
        &self,
        node: &DocumentationNode,
    ) -> Result<DeclarationFragments, Error> {
        self.declaration_fragments(node, "sub-heading", |declaration| {
            &declaration.sub_heading_variants
        })
    }

    /// The declaration tokens shown for the node in the navigator.
    pub fn navigator_fragments(
        &self,
        node: &DocumentationNode,
    ) -> Result<DeclarationFragments, Error> {
        self.declaration_fragments(node, "navigator", |declaration| {
            &declaration.navigator_variants
        })
    }

    // Only tokens of the primary language can become links, so the other
    // languages are rendered exactly as declared.
    fn declaration_fragments(
        &self,
        node: &DocumentationNode,
        property: &'static str,
        select: fn(&SymbolDeclaration) -> &DeclarationFragments,
    ) -> Result<DeclarationFragments, Error> {
        let symbol = node.symbol().ok_or_else(|| Error::UnsupportedSemanticKind {
            reference: node.reference.clone(),
            found: node.semantic.as_ref().map_or("missing", Semantic::kind_name),
        })?;

        let fragments = TypeIdentifierToIdentifier
            .primary_only(self.context.default_trait())
            .apply(select(&symbol.declaration));

        debug!(
            reference = %node.reference,
            property,
            available = node.available_traits().len(),
            patches = fragments.patches().count(),
            "rendered declaration fragments"
        );

        Ok(fragments)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use declaration::{DeclarationToken, PreciseIdentifier, TokenKind};
    use insta::assert_snapshot;
    use node::{
        Article, ResolvedTopicReference, SourceLanguage, Symbol, SymbolDeclaration,
        SymbolIdentity, SymbolKind,
    };
    use pretty_assertions::assert_eq;
    use variants::{Patch, VariantCollection};

    use super::*;
    use crate::Bundle;

    fn other_language() -> SourceLanguage {
        SourceLanguage::new("otherLanguage", "Other Language")
    }

    fn class_declaration(name: &str) -> Vec<DeclarationToken> {
        vec![
            DeclarationToken::keyword("class"),
            DeclarationToken::text(" "),
            DeclarationToken::type_identifier(name),
        ]
    }

    fn by_language<T: PartialEq>(swift: T, other: T) -> VariantCollection<T> {
        VariantCollection::try_new(
            [
                (SourceLanguage::swift().trait_(), swift),
                (other_language().trait_(), other),
            ],
            &SourceLanguage::swift().trait_(),
        )
        .unwrap()
    }

    fn reference() -> ResolvedTopicReference {
        ResolvedTopicReference::new(
            "org.swift.example",
            "/documentation/class",
            SourceLanguage::swift(),
        )
    }

    fn node_with_sub_heading_and_navigator_variants() -> DocumentationNode {
        let symbol = Symbol::new(
            SymbolIdentity::new(
                by_language(
                    SymbolKind::new("class", "Class"),
                    SymbolKind::new("class", "Class"),
                ),
                by_language(
                    "ClassInSwift".to_string(),
                    "ClassInAnotherLanguage".to_string(),
                ),
            ),
            SymbolDeclaration::new(
                by_language(
                    class_declaration("ClassInSwift"),
                    class_declaration("ClassInAnotherLanguage"),
                ),
                by_language(
                    class_declaration("ClassInSwift"),
                    class_declaration("ClassInAnotherLanguage"),
                ),
            ),
        );

        let languages = BTreeSet::from([SourceLanguage::swift(), other_language()]);
        DocumentationNode::new(reference(), "ClassInSwift")
            .available_source_languages(languages)
            .semantic(Semantic::from(symbol))
    }

    fn expected_default() -> Vec<DeclarationToken> {
        vec![
            DeclarationToken::keyword("class"),
            DeclarationToken::text(" "),
            // The type identifier of the primary language becomes an identifier.
            DeclarationToken::new("ClassInSwift", TokenKind::Identifier),
        ]
    }

    #[test]
    fn test_replaces_type_identifier_sub_heading_fragment_for_primary_language() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        assert_eq!(actual.default_value(), &expected_default());
    }

    #[test]
    fn test_does_not_replace_sub_heading_fragments_for_other_languages() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        let patches = actual.patches().collect::<Vec<_>>();
        assert_eq!(
            patches,
            vec![(
                &other_language().trait_(),
                &Patch::Replace(class_declaration("ClassInAnotherLanguage"))
            )]
        );
    }

    #[test]
    fn test_replaces_type_identifier_navigator_fragment_for_primary_language() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .navigator_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        assert_eq!(actual.default_value(), &expected_default());
    }

    #[test]
    fn test_does_not_replace_navigator_fragments_for_other_languages() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .navigator_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        assert_eq!(
            actual.value(&other_language().trait_()),
            &class_declaration("ClassInAnotherLanguage")
        );
    }

    #[test]
    fn test_precise_identifier_is_kept() {
        let declaration = vec![
            DeclarationToken::keyword("struct"),
            DeclarationToken::text(" "),
            DeclarationToken::type_identifier("Point")
                .with_precise_identifier(Some(PreciseIdentifier::new("s:5Shape5PointV"))),
        ];
        let symbol = Symbol::new(
            SymbolIdentity::new(
                VariantCollection::new(SymbolKind::new("struct", "Structure")),
                VariantCollection::new("Point".to_string()),
            ),
            SymbolDeclaration::new(
                VariantCollection::new(declaration.clone()),
                VariantCollection::new(declaration),
            ),
        );
        let node = DocumentationNode::new(reference(), "Point")
            .semantic(Semantic::from(symbol));

        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node)
            .unwrap();

        assert!(!actual.has_patches());
        assert_eq!(
            actual.default_value()[2],
            DeclarationToken::new("Point", TokenKind::Identifier)
                .with_precise_identifier(Some(PreciseIdentifier::new("s:5Shape5PointV")))
        );
    }

    #[test]
    fn test_single_language_node_has_no_patches() {
        let symbol = Symbol::new(
            SymbolIdentity::new(
                VariantCollection::new(SymbolKind::new("class", "Class")),
                VariantCollection::new("ClassInSwift".to_string()),
            ),
            SymbolDeclaration::new(
                VariantCollection::new(class_declaration("ClassInSwift")),
                VariantCollection::new(class_declaration("ClassInSwift")),
            ),
        );
        let node = DocumentationNode::new(reference(), "ClassInSwift")
            .semantic(Semantic::from(symbol));

        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node)
            .unwrap();

        assert!(!actual.has_patches());
        assert_eq!(actual.default_value(), &expected_default());
    }

    #[test]
    fn test_unsupported_semantic_kind() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let renderer = ContentRenderer::new(&bundle);

        let article = DocumentationNode::new(reference(), "Getting Started")
            .semantic(Semantic::from(Article {
                title: "Getting Started".to_string(),
            }));
        let actual = renderer.sub_heading_fragments(&article);
        assert!(matches!(
            actual,
            Err(Error::UnsupportedSemanticKind { found: "article", .. })
        ));

        let empty = DocumentationNode::new(reference(), "Empty");
        let actual = renderer.navigator_fragments(&empty);
        assert!(matches!(
            actual,
            Err(Error::UnsupportedSemanticKind { found: "missing", .. })
        ));
    }

    #[test]
    fn test_unsupported_semantic_kind_message() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let node = DocumentationNode::new(reference(), "Getting Started")
            .semantic(Semantic::from(Article {
                title: "Getting Started".to_string(),
            }));

        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node)
            .unwrap_err()
            .to_string();
        assert_eq!(
            actual,
            "expected a symbol for 'doc://org.swift.example/documentation/class', found article semantic"
        );
    }

    #[test]
    fn test_primary_language_follows_the_bundle() {
        let bundle = Bundle {
            default_language: other_language(),
            ..Bundle::new("org.swift.example", "Example")
        };
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        // The collection's default value is always treated as primary; the
        // patch keyed by the bundle's language is rewritten too.
        assert_eq!(actual.default_value(), &expected_default());
        assert_eq!(
            actual.value(&other_language().trait_()),
            &vec![
                DeclarationToken::keyword("class"),
                DeclarationToken::text(" "),
                DeclarationToken::new("ClassInAnotherLanguage", TokenKind::Identifier),
            ]
        );
    }

    #[test]
    fn test_input_is_not_modified() {
        let node = node_with_sub_heading_and_navigator_variants();
        let before = node.clone();

        let bundle = Bundle::new("org.swift.example", "Example");
        let _ = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node)
            .unwrap();

        assert_eq!(node, before);
    }

    #[test]
    fn test_renders_nodes_in_parallel() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let renderer = ContentRenderer::new(&bundle);
        let nodes = (0..4)
            .map(|_| node_with_sub_heading_and_navigator_variants())
            .collect::<Vec<_>>();

        let results = std::thread::scope(|scope| {
            let handles = nodes
                .iter()
                .map(|node| {
                    let renderer = &renderer;
                    scope.spawn(move || renderer.navigator_fragments(node))
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect::<Vec<_>>()
        });

        for actual in results {
            assert_eq!(actual.default_value(), &expected_default());
        }
    }

    #[test]
    fn test_serialized_sub_heading() {
        let bundle = Bundle::new("org.swift.example", "Example");
        let actual = ContentRenderer::new(&bundle)
            .sub_heading_fragments(&node_with_sub_heading_and_navigator_variants())
            .unwrap();

        assert_snapshot!(serde_json::to_string_pretty(&actual).unwrap(), @r###"
        {
          "defaultValue": [
            {
              "text": "class",
              "kind": "keyword"
            },
            {
              "text": " ",
              "kind": "text"
            },
            {
              "text": "ClassInSwift",
              "kind": "identifier"
            }
          ],
          "variants": [
            {
              "traits": [
                {
                  "interfaceLanguage": "otherLanguage"
                }
              ],
              "patch": [
                {
                  "op": "replace",
                  "value": [
                    {
                      "text": "class",
                      "kind": "keyword"
                    },
                    {
                      "text": " ",
                      "kind": "text"
                    },
                    {
                      "text": "ClassInAnotherLanguage",
                      "kind": "typeIdentifier"
                    }
                  ]
                }
              ]
            }
          ]
        }
        "###);
    }
}
