//! Prompt template for article summarisation.

use crate::config::ConfigError;

/// Placeholder replaced by the article text.
pub const ARTICLE_SLOT: &str = "{article}";

/// Template used when the config does not override it.
pub const DEFAULT_TEMPLATE: &str = "Summarize the following news article:\n\n{article}\n\nSummary:";

/// A prompt with a single `{article}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template, rejecting one without the `{article}` slot
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if !template.contains(ARTICLE_SLOT) {
            return Err(ConfigError::InvalidTemplate);
        }
        Ok(Self { template })
    }

    /// Substitute the article verbatim into the template.
    ///
    /// The article is not inspected: empty or odd input is rendered as is.
    pub fn render(&self, article: &str) -> String {
        self.template.replace(ARTICLE_SLOT, article)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_article_between_header_and_marker() {
        let prompt = PromptTemplate::default().render("Stocks rose today.");
        assert_eq!(
            prompt,
            "Summarize the following news article:\n\nStocks rose today.\n\nSummary:"
        );
    }

    #[test]
    fn empty_article_still_renders() {
        let prompt = PromptTemplate::default().render("");
        assert_eq!(prompt, "Summarize the following news article:\n\n\n\nSummary:");
    }

    #[test]
    fn article_text_is_not_reinterpreted() {
        // Braces in the article must not be treated as another slot.
        let prompt = PromptTemplate::default().render("a {article} b");
        assert!(prompt.contains("\n\na {article} b\n\n"));
    }

    #[test]
    fn custom_template_requires_slot() {
        assert!(PromptTemplate::new("TL;DR: {article}").is_ok());
        assert!(matches!(
            PromptTemplate::new("no slot here"),
            Err(ConfigError::InvalidTemplate)
        ));
    }
}
