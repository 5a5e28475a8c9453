use super::*;

// ============================================================================
// Nested intents
// ============================================================================

ast_node!(NestedIntentSection, NESTED_INTENT_SECTION);

impl NestedIntentSection {
    first_child_method!(name_line, NestedIntentNameLine);
    first_child_method!(body, NestedIntentBody);

    pub fn name(&self) -> Option<String> {
        self.name_line().and_then(|line| line.name())
    }

    /// Child intents, each introduced by a `##` header
    pub fn children(&self) -> impl Iterator<Item = SimpleIntentSection> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.children().collect::<Vec<_>>())
    }
}

ast_node!(NestedIntentNameLine, NESTED_INTENT_NAME_LINE);

impl NestedIntentNameLine {
    child_text_method!(name, INTENT_NAME);
}

ast_node!(NestedIntentBody, NESTED_INTENT_BODY);

impl NestedIntentBody {
    children_method!(children, SimpleIntentSection);
}

// ============================================================================
// Simple intents
// ============================================================================

ast_node!(SimpleIntentSection, SIMPLE_INTENT_SECTION);

impl SimpleIntentSection {
    first_child_method!(intent_definition, IntentDefinition);
    children_method!(entity_sections, EntitySection);
    children_method!(new_entity_sections, NewEntitySection);
}

ast_node!(IntentDefinition, INTENT_DEFINITION);

impl IntentDefinition {
    first_child_method!(name_line, IntentNameLine);
    first_child_method!(body, IntentBody);

    pub fn name(&self) -> Option<String> {
        self.name_line().and_then(|line| line.name())
    }

    pub fn utterances(&self) -> impl Iterator<Item = UtteranceLine> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.utterances().collect::<Vec<_>>())
    }

    /// Body lines that lack a list marker
    pub fn invalid_lines(&self) -> impl Iterator<Item = InvalidLine> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.invalid_lines().collect::<Vec<_>>())
    }
}

ast_node!(IntentNameLine, INTENT_NAME_LINE);

impl IntentNameLine {
    child_text_method!(name, INTENT_NAME);
}

ast_node!(IntentBody, INTENT_BODY);

impl IntentBody {
    children_method!(utterances, UtteranceLine);
    children_method!(invalid_lines, InvalidLine);
}

ast_node!(UtteranceLine, UTTERANCE_LINE);

impl UtteranceLine {
    /// Utterance text without the list marker
    pub fn text(&self) -> String {
        list_item_text(&self.0)
    }
}

ast_node!(InvalidLine, INVALID_LINE);

impl InvalidLine {
    pub fn text(&self) -> String {
        trimmed_text(&self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

ast_node!(EntitySection, ENTITY_SECTION);

impl EntitySection {
    first_child_method!(line, EntityLine);
    first_child_method!(body, EntityBody);

    pub fn items(&self) -> impl Iterator<Item = ListItem> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.items().collect::<Vec<_>>())
    }
}

ast_node!(EntityLine, ENTITY_LINE);

impl EntityLine {
    child_text_method!(name, ENTITY_NAME);
    child_text_method!(entity_type, ENTITY_TYPE);
    has_token_method!(has_colon, COLON);

    pub fn text(&self) -> String {
        trimmed_text(&self.0)
    }
}

ast_node!(NewEntitySection, NEW_ENTITY_SECTION);

impl NewEntitySection {
    first_child_method!(line, NewEntityLine);
    first_child_method!(body, EntityBody);

    pub fn items(&self) -> impl Iterator<Item = ListItem> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.items().collect::<Vec<_>>())
    }
}

ast_node!(NewEntityLine, NEW_ENTITY_LINE);

impl NewEntityLine {
    child_text_method!(entity_type, NEW_ENTITY_TYPE);
    child_text_method!(name, NEW_ENTITY_NAME);

    /// Everything after the entity name, e.g. `hasRoles a, b`
    pub fn trailing_text(&self) -> String {
        let mut after_name = false;
        let mut text = String::new();
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Node(node) if node.kind() == SyntaxKind::NEW_ENTITY_NAME => {
                    after_name = true;
                }
                rowan::NodeOrToken::Token(token) if after_name => text.push_str(token.text()),
                _ => {}
            }
        }
        text.trim().to_string()
    }

    pub fn text(&self) -> String {
        trimmed_text(&self.0)
    }
}

ast_node!(EntityBody, ENTITY_BODY);

impl EntityBody {
    children_method!(items, ListItem);
}

ast_node!(ListItem, LIST_ITEM);

impl ListItem {
    pub fn text(&self) -> String {
        list_item_text(&self.0)
    }
}
