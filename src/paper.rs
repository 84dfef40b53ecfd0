use serde::{Deserialize, Serialize};

const DEFAULT_LOCALE: &str = "en_US";

/// The text-plus-metadata unit being analyzed.
///
/// A `Paper` is a plain value: it is never mutated after construction and
/// carries no derived data. Parsed trees, sentences and topic forms are
/// memoised on the [`Researcher`](crate::Researcher) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paper {
    /// Raw, HTML-bearing body text.
    pub text: String,
    /// Focus keyphrase; may be wrapped in quotes to request an exact match.
    pub keyword: String,
    /// Comma/semicolon separated synonym phrases.
    pub synonyms: String,
    /// Meta description.
    pub description: String,
    /// SEO title.
    pub title: String,
    /// Rendered SEO title width in pixels, as measured by the host. 0 when unknown.
    pub title_width: u32,
    /// URL slug.
    pub slug: String,
    /// Permalink of the page (WordPress) or shop domain (Shopify).
    pub permalink: String,
    /// Locale such as `en_US`.
    pub locale: String,
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            text: String::new(),
            keyword: String::new(),
            synonyms: String::new(),
            description: String::new(),
            title: String::new(),
            title_width: 0,
            slug: String::new(),
            permalink: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Paper {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
    pub fn with_synonyms(mut self, synonyms: impl Into<String>) -> Self {
        self.synonyms = synonyms.into();
        self
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
    pub fn with_title_width(mut self, width: u32) -> Self {
        self.title_width = width;
        self
    }
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }
    pub fn has_synonyms(&self) -> bool {
        !self.synonyms.is_empty()
    }
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
    pub fn has_slug(&self) -> bool {
        !self.slug.is_empty()
    }
    pub fn has_permalink(&self) -> bool {
        !self.permalink.is_empty()
    }

    /// Language code: the part of the locale before the first `_` or `-`, lowercased.
    ///
    /// Falls back to `en` when the locale is empty.
    pub fn language(&self) -> String {
        let code = self
            .locale
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        if code.is_empty() {
            "en".to_string()
        } else {
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        let paper = Paper::new("text");
        assert_eq!(paper.locale, "en_US");
        assert_eq!(paper.language(), "en");
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Paper::new("").with_locale("ja").language(), "ja");
        assert_eq!(Paper::new("").with_locale("nl_NL").language(), "nl");
        assert_eq!(Paper::new("").with_locale("de-DE").language(), "de");
        assert_eq!(Paper::new("").with_locale("").language(), "en");
    }

    #[test]
    fn test_presence_checks() {
        let paper = Paper::new("").with_keyword("cats");
        assert!(!paper.has_text());
        assert!(paper.has_keyword());
        assert!(!paper.has_synonyms());
        assert!(!paper.has_description());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let paper: Paper =
            serde_json::from_str(r#"{"text": "<p>Hi</p>", "keyword": "hi", "titleWidth": 420}"#)
                .unwrap();
        assert_eq!(paper.text, "<p>Hi</p>");
        assert_eq!(paper.keyword, "hi");
        assert_eq!(paper.title_width, 420);
        assert_eq!(paper.locale, "en_US");
    }
}
