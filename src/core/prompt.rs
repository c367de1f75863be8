//! Prompt templates for tweet and article generation.

/// Tweet personalities offered by the generator.
pub const PERSONALITIES: &[&str] = &[
    "Enthusiastic Optimist",
    "Witty Observer",
    "Calm Expert",
    "Skeptical Analyst",
    "Friendly Mentor",
    "Playful Storyteller",
];

/// Tweet content types.
pub const CONTENT_TYPES: &[&str] = &[
    "Informative Snippets and Facts",
    "Tips and How-Tos",
    "Thought-Provoking Questions",
    "Industry News Commentary",
    "Motivational Insights",
    "Humorous Takes",
];

/// Content formats. Only `Text` can be generated.
pub const CONTENT_FORMATS: &[&str] = &["Text", "Image", "Video"];

/// Errors validating generator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Unknown {kind} '{value}'. Choose one of: {choices}")]
    UnknownChoice {
        kind: &'static str,
        value: String,
        choices: String,
    },
    #[error("Currently, only text format is supported for tweet generation")]
    UnsupportedFormat(String),
    #[error("Please enter a topic for the article")]
    EmptyTopic,
}

/// Match `value` case-insensitively against `choices`, returning the canonical entry.
pub fn lookup(kind: &'static str, choices: &[&'static str], value: &str) -> Result<&'static str, PromptError> {
    let v = value.trim();
    choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(v))
        .copied()
        .ok_or_else(|| PromptError::UnknownChoice {
            kind,
            value: v.to_string(),
            choices: choices.join(", "),
        })
}

/// Validated tweet generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweetOptions {
    pub personality: &'static str,
    pub content_type: &'static str,
    pub content_format: &'static str,
}

impl TweetOptions {
    /// Resolve and validate the three choices. Non-text formats are rejected here,
    /// before any API call.
    pub fn parse(personality: &str, content_type: &str, content_format: &str) -> Result<Self, PromptError> {
        let personality = lookup("personality", PERSONALITIES, personality)?;
        let content_type = lookup("content type", CONTENT_TYPES, content_type)?;
        let content_format = lookup("content format", CONTENT_FORMATS, content_format)?;
        if !content_format.eq_ignore_ascii_case("text") {
            return Err(PromptError::UnsupportedFormat(content_format.to_string()));
        }
        Ok(Self {
            personality,
            content_type,
            content_format,
        })
    }

    /// Prompt asking the model for one tweet.
    pub fn prompt(&self) -> String {
        format!(
            "
Generate a concise and engaging tweet (max 280 characters) with the following characteristics:

- Personality/Tone: {}
- Content Type: {}

**Important Guidelines for Twitter:**
- Write in a natural, human-like style. Avoid robotic phrasing.
- Ensure the content is original and provides value (inform, entertain, or engage).
- Be concise and clear.
- Adhere to Twitter's content policies. Avoid anything that could be flagged as spam or harmful.
- Use hashtags sparingly and only if highly relevant (max 2-3).
- Do NOT include generic calls to action unless it fits the specific topic naturally.

Generate ONLY the tweet text.
",
            self.personality, self.content_type
        )
        .trim()
        .to_string()
    }
}

/// Prompt for a short explanatory article on `topic`.
pub fn article_prompt(
    topic: &str,
    persona: Option<&str>,
    context: Option<&str>,
) -> Result<String, PromptError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(PromptError::EmptyTopic);
    }

    let mut prompt = String::new();
    if let Some(p) = persona.map(str::trim).filter(|p| !p.is_empty()) {
        prompt.push_str(&format!("**Persona:** You are writing as {}.\n\n", p));
    }
    prompt.push_str(
        "**Objective:**
* Write a concise, engaging article.
* Begin with a compelling question or scenario to hook the reader.
* Use a conversational tone, simplifying complex financial or business topics into relatable narratives.
* Don't make bullet points or lists; instead, weave the information into a narrative.
* Incorporate real-world analogies and examples to elucidate key points.
* Structure the article with a clear introduction, body, and conclusion, ensuring it can be read in under six minutes.
* Maintain a tone that is informative yet accessible to readers without a financial background.
",
    );
    prompt.push_str(&format!("\n**Content:** The article should be about {}.\n", topic));
    if let Some(c) = context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(
            "\n**Additional context:** Derive the article details from the following:\n{}\n",
            c
        ));
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_canonicalizes() {
        let opts = TweetOptions::parse("witty observer", "TIPS AND HOW-TOS", "text").unwrap();
        assert_eq!(opts.personality, "Witty Observer");
        assert_eq!(opts.content_type, "Tips and How-Tos");
        assert_eq!(opts.content_format, "Text");
    }

    #[test]
    fn parse_rejects_non_text_format() {
        let err = TweetOptions::parse("Calm Expert", "Humorous Takes", "Video").unwrap_err();
        assert_eq!(err, PromptError::UnsupportedFormat("Video".into()));
    }

    #[test]
    fn parse_rejects_unknown_personality() {
        let err = TweetOptions::parse("Grumpy", "Humorous Takes", "Text").unwrap_err();
        assert!(err.to_string().contains("Enthusiastic Optimist"));
    }

    #[test]
    fn tweet_prompt_embeds_choices() {
        let opts = TweetOptions::parse("Calm Expert", "Motivational Insights", "Text").unwrap();
        let prompt = opts.prompt();
        assert!(prompt.starts_with("Generate a concise and engaging tweet"));
        assert!(prompt.contains("- Personality/Tone: Calm Expert"));
        assert!(prompt.contains("- Content Type: Motivational Insights"));
        assert!(prompt.ends_with("Generate ONLY the tweet text."));
    }

    #[test]
    fn article_prompt_with_persona_and_context() {
        let prompt = article_prompt("index funds", Some("A retired banker"), Some("fees matter")).unwrap();
        assert!(prompt.starts_with("**Persona:** You are writing as A retired banker."));
        assert!(prompt.contains("The article should be about index funds."));
        assert!(prompt.contains("fees matter"));
    }

    #[test]
    fn article_prompt_requires_topic() {
        assert_eq!(article_prompt("  ", None, None), Err(PromptError::EmptyTopic));
        let plain = article_prompt("inflation", None, Some(" ")).unwrap();
        assert!(plain.starts_with("**Objective:**"));
        assert!(!plain.contains("Additional context"));
    }
}
