use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(LuFile, LU_FILE);

impl LuFile {
    children_method!(paragraphs, Paragraph);
}

// ============================================================================
// Paragraphs
// ============================================================================

ast_node!(Paragraph, PARAGRAPH);

impl Paragraph {
    first_child_method!(model_info_section, ModelInfoSection);
    first_child_method!(import_section, ImportSection);
    first_child_method!(qna_section, QnaSection);
    first_child_method!(nested_intent_section, NestedIntentSection);
    first_child_method!(simple_intent_section, SimpleIntentSection);

    /// The single construct this paragraph holds
    pub fn construct(&self) -> Option<Construct> {
        self.0.children().find_map(Construct::cast)
    }
}

/// The construct inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Construct {
    ModelInfo(ModelInfoSection),
    Import(ImportSection),
    Qna(QnaSection),
    NestedIntent(NestedIntentSection),
    /// An intent, or a run of entity definitions with no intent header
    SimpleIntent(SimpleIntentSection),
}

impl AstNode for Construct {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::MODEL_INFO_SECTION
                | SyntaxKind::IMPORT_SECTION
                | SyntaxKind::QNA_SECTION
                | SyntaxKind::NESTED_INTENT_SECTION
                | SyntaxKind::SIMPLE_INTENT_SECTION
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::MODEL_INFO_SECTION => Some(Self::ModelInfo(ModelInfoSection(node))),
            SyntaxKind::IMPORT_SECTION => Some(Self::Import(ImportSection(node))),
            SyntaxKind::QNA_SECTION => Some(Self::Qna(QnaSection(node))),
            SyntaxKind::NESTED_INTENT_SECTION => {
                Some(Self::NestedIntent(NestedIntentSection(node)))
            }
            SyntaxKind::SIMPLE_INTENT_SECTION => {
                Some(Self::SimpleIntent(SimpleIntentSection(node)))
            }
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::ModelInfo(n) => n.syntax(),
            Self::Import(n) => n.syntax(),
            Self::Qna(n) => n.syntax(),
            Self::NestedIntent(n) => n.syntax(),
            Self::SimpleIntent(n) => n.syntax(),
        }
    }
}
