pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.3;

pub const SYSTEM_PROMPT: &str = r#"You are an expert at identifying the most relevant portions of text based on search queries.

Your task is to extract the most relevant CONTIGUOUS portion of the given text that best
addresses the search query. The excerpt must be:
1. A continuous section from the original text (not pieced together from different parts)
2. Include complete sentences (don't cut off mid-sentence)
3. Between 30% and 100% of the original text length
4. The portion that best helps the reader understand the connection to their search

Return ONLY the extracted text, without any additional commentary or formatting.
If the entire text is relevant, return the entire text."#;

pub fn user_prompt(chunk: &str, query: &str) -> String {
    format!(
        "Search Query: {}\n\nFull Text:\n{}\n\nExtract the most relevant contiguous portion that addresses this search query.",
        query, chunk
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    /// False when the full passage was returned instead of a model excerpt.
    pub extracted: bool,
}

impl Excerpt {
    pub fn full(chunk: &str) -> Self {
        Self {
            text: chunk.to_string(),
            extracted: false,
        }
    }
}

/// Accept the model's reply only if it is a verbatim slice of the passage.
pub fn validate_excerpt(chunk: &str, reply: &str) -> Excerpt {
    let candidate = reply.trim();
    if !candidate.is_empty() && chunk.contains(candidate) {
        Excerpt {
            text: candidate.to_string(),
            extracted: true,
        }
    } else {
        Excerpt::full(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHUNK: &str = "一文目です。二文目は信仰について語る。三文目で終わる。";

    #[test]
    fn verbatim_slice_is_accepted() {
        let excerpt = validate_excerpt(CHUNK, "  二文目は信仰について語る。\n");
        assert!(excerpt.extracted);
        assert_eq!(excerpt.text, "二文目は信仰について語る。");
    }

    #[test]
    fn paraphrase_falls_back_to_full_passage() {
        let excerpt = validate_excerpt(CHUNK, "信仰についての文");
        assert_eq!(excerpt, Excerpt::full(CHUNK));
    }

    #[test]
    fn blank_reply_falls_back_to_full_passage() {
        assert!(!validate_excerpt(CHUNK, "   ").extracted);
    }

    #[test]
    fn prompt_embeds_query_and_text() {
        let prompt = user_prompt(CHUNK, "信仰とは");
        assert!(prompt.starts_with("Search Query: 信仰とは\n"));
        assert!(prompt.contains(CHUNK));
    }
}
