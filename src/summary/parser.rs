pub const CONTEXT_MARKER: &str = "文脈:";
pub const RELEVANCE_MARKER: &str = "関連性:";

/// Used when the model ignores the requested output format.
pub const FALLBACK_RELEVANCE: &str = "この文章は検索クエリと関連しています。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSummary {
    Parsed { context: String, relevance: String },
    Unparsed { raw: String },
}

impl ParsedSummary {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedSummary::Parsed { .. })
    }

    /// Collapse into the `(context, relevance)` pair returned to callers.
    pub fn into_pair(self) -> (String, String) {
        match self {
            ParsedSummary::Parsed { context, relevance } => (context, relevance),
            ParsedSummary::Unparsed { raw } => (raw, FALLBACK_RELEVANCE.to_string()),
        }
    }
}

/// Split generated text on the context and relevance labels.
///
/// Both labels must be present. The text is split at the first relevance
/// label; every context label is stripped from the leading part and both
/// halves are trimmed. Anything else is returned untouched as `Unparsed`.
pub fn parse_summary(text: &str) -> ParsedSummary {
    if !text.contains(CONTEXT_MARKER) {
        return ParsedSummary::Unparsed {
            raw: text.to_string(),
        };
    }

    match text.split_once(RELEVANCE_MARKER) {
        Some((before, after)) => ParsedSummary::Parsed {
            context: before.replace(CONTEXT_MARKER, "").trim().to_string(),
            relevance: after.trim().to_string(),
        },
        None => ParsedSummary::Unparsed {
            raw: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_markers() {
        let parsed = parse_summary("文脈: 要約A\n関連性: 説明B");
        assert_eq!(
            parsed,
            ParsedSummary::Parsed {
                context: "要約A".into(),
                relevance: "説明B".into(),
            }
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let (context, relevance) =
            parse_summary("\n  文脈:   座談会の場面 \n\n関連性:\n 信仰の意味を語る  \n").into_pair();
        assert_eq!(context, "座談会の場面");
        assert_eq!(relevance, "信仰の意味を語る");
    }

    #[test]
    fn missing_markers_fall_back_to_raw_text() {
        let parsed = parse_summary("ただの文章");
        assert!(!parsed.is_parsed());
        let (context, relevance) = parsed.into_pair();
        assert_eq!(context, "ただの文章");
        assert_eq!(relevance, FALLBACK_RELEVANCE);
    }

    #[test]
    fn one_marker_alone_is_not_enough() {
        let raw = "文脈: 要約だけ ";
        assert_eq!(
            parse_summary(raw),
            ParsedSummary::Unparsed { raw: raw.into() }
        );

        let raw = "関連性: 説明だけ";
        assert_eq!(
            parse_summary(raw),
            ParsedSummary::Unparsed { raw: raw.into() }
        );
    }

    #[test]
    fn fallback_keeps_raw_whitespace() {
        let (context, _) = parse_summary("  空白付き\n").into_pair();
        assert_eq!(context, "  空白付き\n");
    }

    #[test]
    fn splits_at_first_relevance_marker() {
        let (context, relevance) = parse_summary("文脈: A 関連性: B 関連性: C").into_pair();
        assert_eq!(context, "A");
        assert_eq!(relevance, "B 関連性: C");
    }

    #[test]
    fn full_width_colon_is_not_a_marker() {
        assert!(!parse_summary("文脈：A\n関連性：B").is_parsed());
    }
}
