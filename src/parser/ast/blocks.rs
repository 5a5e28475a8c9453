use super::*;

// ============================================================================
// Model info
// ============================================================================

ast_node!(ModelInfoSection, MODEL_INFO_SECTION);

impl ModelInfoSection {
    /// The directive line, e.g. `> !# @app.name = Demo`
    pub fn text(&self) -> String {
        trimmed_text(&self.0)
    }
}

// ============================================================================
// Import
// ============================================================================

ast_node!(ImportSection, IMPORT_SECTION);

impl ImportSection {
    child_text_method!(description, IMPORT_DESCRIPTION);
    child_text_method!(path, IMPORT_PATH);

    /// Whether the line had the `[..](..)` shape at all
    pub fn is_well_formed(&self) -> bool {
        has_token(&self.0, SyntaxKind::L_PAREN)
    }
}

// ============================================================================
// QnA
// ============================================================================

ast_node!(QnaSection, QNA_SECTION);

impl QnaSection {
    first_child_method!(question_line, QnaQuestionLine);
    children_method!(alternate_questions, QnaAltQuestion);
    first_child_method!(filter_section, QnaFilterSection);
    first_child_method!(answer, QnaAnswer);
    children_method!(invalid_lines, InvalidLine);

    pub fn question(&self) -> Option<String> {
        self.question_line().and_then(|line| line.question())
    }

    pub fn filters(&self) -> impl Iterator<Item = QnaFilterLine> + '_ {
        self.filter_section()
            .into_iter()
            .flat_map(|section| section.lines().collect::<Vec<_>>())
    }
}

ast_node!(QnaQuestionLine, QNA_QUESTION_LINE);

impl QnaQuestionLine {
    child_text_method!(question, QNA_QUESTION);
}

ast_node!(QnaAltQuestion, QNA_ALT_QUESTION);

impl QnaAltQuestion {
    pub fn text(&self) -> String {
        list_item_text(&self.0)
    }
}

ast_node!(QnaFilterSection, QNA_FILTER_SECTION);

impl QnaFilterSection {
    children_method!(lines, QnaFilterLine);
}

ast_node!(QnaFilterLine, QNA_FILTER_LINE);

impl QnaFilterLine {
    /// `(key, value)` split at the first `=`
    pub fn key_value(&self) -> Option<(String, String)> {
        let text = list_item_text(&self.0);
        let (key, value) = text.split_once('=')?;
        Some((key.trim().to_string(), value.trim().to_string()))
    }
}

ast_node!(QnaAnswer, QNA_ANSWER);

impl QnaAnswer {
    /// Answer text between the fences, trimmed
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .map(|t| t.text().to_string())
            .collect::<String>()
            .trim()
            .to_string()
    }
}
