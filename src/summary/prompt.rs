use super::SummaryRequest;

pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f32 = 0.7;

/// Label used when the passage's chapter is not known.
pub const UNKNOWN_CHAPTER: &str = "不明";

pub const SYSTEM_PROMPT: &str = r#"あなたは仏法哲学、特に池田大作先生の著作に精通した座談会のリーダーです。
読者が本の文章の文脈と関連性を理解できるよう支援することがあなたの役割です。

文章と検索クエリが与えられたら、以下を提供してください：
1. この文章で何が起きているかを説明する簡潔な文脈の要約
2. なぜこの文章が検索クエリと関連しているかの説明

回答は簡潔で役立つものにしてください。教えを読者にとってアクセスしやすく、
意味のあるものにすることに焦点を当ててください。温かく、支援的なトーンで書いてください。

必ず日本語で回答してください。

回答は以下の形式で：
文脈: [文章で何が起きているかの簡潔な説明]
関連性: [なぜこの文章が検索クエリと関連しているか]"#;

/// Empty chapter titles are treated the same as missing ones.
pub fn chapter_label(chapter_title: Option<&str>) -> &str {
    match chapter_title {
        Some(title) if !title.is_empty() => title,
        _ => UNKNOWN_CHAPTER,
    }
}

pub fn user_prompt(request: &SummaryRequest) -> String {
    format!(
        "書籍: {}\n章: {}\n検索クエリ: {}\n\n文章:\n{}\n\nこの文章の文脈の要約と関連性の説明を提供してください。",
        request.book_title,
        chapter_label(request.chapter_title.as_deref()),
        request.query,
        request.chunk,
    )
}
