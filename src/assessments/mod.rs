//! Scoring rules. Each assessment maps a research finding to a score and
//! feedback text.
//!
//! Assessments are plain configuration structs: their `Default` carries
//! the standard thresholds, scores and links, and every field can be
//! overridden from JSON through [`AssessmentConfig`].

pub mod readability;
pub mod seo;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::languages::LanguageConfig;
use crate::paper::Paper;
use crate::researcher::Researcher;

pub use readability::{
    ListsPresenceAssessment, ParagraphTooLongAssessment, PassiveVoiceAssessment,
    SentenceBeginningsAssessment, SentenceLengthInTextAssessment,
    SubheadingsTooLongAssessment, TextPresenceAssessment, TransitionWordsAssessment,
    WordComplexityAssessment,
};
pub use seo::{
    ExternalLinksAssessment, FunctionWordsInKeyphraseAssessment, ImageCountAssessment,
    ImageKeyphraseAssessment, InternalLinksAssessment, IntroductionKeywordAssessment,
    KeyphraseInSeoTitleAssessment, KeyphraseLengthAssessment, KeywordDensityAssessment,
    MetaDescriptionKeywordAssessment, MetaDescriptionLengthAssessment, SingleH1Assessment,
    SlugKeywordAssessment, SubheadingsKeywordAssessment, TextCompetingLinksAssessment,
    TextLengthAssessment, TitleWidthAssessment,
};

/// A single scoring rule.
pub trait Assessment: fmt::Debug {
    /// Stable identifier, such as `textLength`.
    fn identifier(&self) -> &'static str;

    /// Whether the paper has what this assessment needs. Assessors skip
    /// assessments that are not applicable.
    fn is_applicable(&self, _paper: &Paper, _researcher: &Researcher) -> bool {
        true
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult;
}

/// A span of text to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub original: String,
}

impl Mark {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
        }
    }
}

/// Traffic-light rating of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Feedback,
    Bad,
    Ok,
    Good,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub identifier: String,
    /// `None` when the assessment has nothing to score.
    pub score: Option<i32>,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl AssessmentResult {
    pub fn new(identifier: &str, score: i32, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.to_string(),
            score: Some(score),
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// A result with no score and no text: nothing to report.
    pub fn empty(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            score: None,
            text: String::new(),
            marks: Vec::new(),
        }
    }

    pub fn with_marks(mut self, marks: impl IntoIterator<Item = Mark>) -> Self {
        self.marks = marks.into_iter().collect();
        self
    }

    /// True when there is neither a score nor text.
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.text.is_empty()
    }

    pub fn rating(&self) -> Rating {
        match self.score {
            None => Rating::Feedback,
            Some(score) if score <= 4 => Rating::Bad,
            Some(score) if score <= 7 => Rating::Ok,
            Some(_) => Rating::Good,
        }
    }
}

fn anchor(url: &str, text: &str) -> String {
    format!("<a href='{url}' target='_blank'>{text}</a>")
}

/// Linked feedback titles and calls to action. Every assessment config
/// carries optional `url_title` and `url_call_to_action` overrides; unset
/// ones fall back to the assessment's own article.
macro_rules! feedback_links {
    ($($config:ty),+ $(,)?) => {
        $(
            impl $config {
                pub(crate) fn title(&self, default_url: &str, title: &str) -> String {
                    anchor(self.url_title.as_deref().unwrap_or(default_url), title)
                }

                pub(crate) fn call_to_action(&self, default_url: &str, text: &str) -> String {
                    anchor(self.url_call_to_action.as_deref().unwrap_or(default_url), text)
                }
            }
        )+
    };
}

/// One configured assessment, tagged by its identifier.
///
/// ```
/// use content_scoring::assessments::{Assessment, AssessmentConfig};
///
/// let config: AssessmentConfig =
///     serde_json::from_str(r#"{"kind": "textLength", "recommendedMinimum": 80}"#).unwrap();
/// assert_eq!(config.assessment().identifier(), "textLength");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AssessmentConfig {
    IntroductionKeyword(IntroductionKeywordAssessment),
    KeyphraseLength(KeyphraseLengthAssessment),
    KeywordDensity(KeywordDensityAssessment),
    MetaDescriptionKeyword(MetaDescriptionKeywordAssessment),
    #[serde(rename = "keyphraseInSEOTitle")]
    KeyphraseInSeoTitle(KeyphraseInSeoTitleAssessment),
    SlugKeyword(SlugKeywordAssessment),
    MetaDescriptionLength(MetaDescriptionLengthAssessment),
    TextLength(TextLengthAssessment),
    TitleWidth(TitleWidthAssessment),
    FunctionWordsInKeyphrase(FunctionWordsInKeyphraseAssessment),
    SingleH1(SingleH1Assessment),
    ExternalLinks(ExternalLinksAssessment),
    InternalLinks(InternalLinksAssessment),
    Images(ImageCountAssessment),
    ImageKeyphrase(ImageKeyphraseAssessment),
    TextCompetingLinks(TextCompetingLinksAssessment),
    SubheadingsKeyword(SubheadingsKeywordAssessment),
    SubheadingsTooLong(SubheadingsTooLongAssessment),
    TextParagraphTooLong(ParagraphTooLongAssessment),
    TextSentenceLength(SentenceLengthInTextAssessment),
    TextTransitionWords(TransitionWordsAssessment),
    PassiveVoice(PassiveVoiceAssessment),
    TextPresence(TextPresenceAssessment),
    SentenceBeginnings(SentenceBeginningsAssessment),
    ListsPresence(ListsPresenceAssessment),
    WordComplexity(WordComplexityAssessment),
}

impl AssessmentConfig {
    pub fn assessment(&self) -> &dyn Assessment {
        match self {
            Self::IntroductionKeyword(a) => a,
            Self::KeyphraseLength(a) => a,
            Self::KeywordDensity(a) => a,
            Self::MetaDescriptionKeyword(a) => a,
            Self::KeyphraseInSeoTitle(a) => a,
            Self::SlugKeyword(a) => a,
            Self::MetaDescriptionLength(a) => a,
            Self::TextLength(a) => a,
            Self::TitleWidth(a) => a,
            Self::FunctionWordsInKeyphrase(a) => a,
            Self::SingleH1(a) => a,
            Self::ExternalLinks(a) => a,
            Self::InternalLinks(a) => a,
            Self::Images(a) => a,
            Self::ImageKeyphrase(a) => a,
            Self::TextCompetingLinks(a) => a,
            Self::SubheadingsKeyword(a) => a,
            Self::SubheadingsTooLong(a) => a,
            Self::TextParagraphTooLong(a) => a,
            Self::TextSentenceLength(a) => a,
            Self::TextTransitionWords(a) => a,
            Self::PassiveVoice(a) => a,
            Self::TextPresence(a) => a,
            Self::SentenceBeginnings(a) => a,
            Self::ListsPresence(a) => a,
            Self::WordComplexity(a) => a,
        }
    }
}

feedback_links!(
    IntroductionKeywordAssessment,
    KeyphraseLengthAssessment,
    KeywordDensityAssessment,
    MetaDescriptionKeywordAssessment,
    KeyphraseInSeoTitleAssessment,
    SlugKeywordAssessment,
    MetaDescriptionLengthAssessment,
    TextLengthAssessment,
    TitleWidthAssessment,
    FunctionWordsInKeyphraseAssessment,
    SingleH1Assessment,
    ExternalLinksAssessment,
    InternalLinksAssessment,
    ImageCountAssessment,
    ImageKeyphraseAssessment,
    TextCompetingLinksAssessment,
    SubheadingsKeywordAssessment,
    SubheadingsTooLongAssessment,
    ParagraphTooLongAssessment,
    SentenceLengthInTextAssessment,
    TransitionWordsAssessment,
    PassiveVoiceAssessment,
    TextPresenceAssessment,
    SentenceBeginningsAssessment,
    ListsPresenceAssessment,
    WordComplexityAssessment,
);

/// Unit text lengths of `language` are counted in.
pub(crate) fn length_unit(language: &LanguageConfig) -> &'static str {
    if language.whitespace_delimited {
        "words"
    } else {
        "characters"
    }
}

/// `part / total` as a percentage; 0 when `total` is 0.
pub(crate) fn percentage_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Format a percentage the way feedback text shows it: at most one decimal.
pub(crate) fn format_percentage(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_links_default_and_override() {
        let mut config = TextPresenceAssessment::default();
        assert_eq!(
            config.title("https://yoa.st/1", "Title"),
            "<a href='https://yoa.st/1' target='_blank'>Title</a>"
        );
        config.url_call_to_action = Some("https://yoa.st/shopify9".to_string());
        assert_eq!(
            config.call_to_action("https://yoa.st/2", "Fix that"),
            "<a href='https://yoa.st/shopify9' target='_blank'>Fix that</a>"
        );
    }

    #[test]
    fn test_rating() {
        assert_eq!(AssessmentResult::empty("x").rating(), Rating::Feedback);
        assert_eq!(AssessmentResult::new("x", -10, "").rating(), Rating::Bad);
        assert_eq!(AssessmentResult::new("x", 6, "").rating(), Rating::Ok);
        assert_eq!(AssessmentResult::new("x", 9, "").rating(), Rating::Good);
    }

    #[test]
    fn test_config_partial_override() {
        let config: AssessmentConfig = serde_json::from_str(
            r#"{"kind": "textLength", "recommendedMinimum": 900, "scores": {"belowMinimum": -20},
                "urlTitle": "https://yoa.st/shopify58"}"#,
        )
        .unwrap();
        let AssessmentConfig::TextLength(text_length) = config else {
            panic!("expected textLength");
        };
        assert_eq!(text_length.recommended_minimum, 900);
        assert_eq!(text_length.slightly_below_minimum, 250);
        assert_eq!(text_length.scores.below_minimum, -20);
        assert_eq!(text_length.scores.far_below_minimum, -10);
        assert_eq!(text_length.url_title.as_deref(), Some("https://yoa.st/shopify58"));
    }

    #[test]
    fn test_config_seo_title_tag() {
        let config: AssessmentConfig =
            serde_json::from_str(r#"{"kind": "keyphraseInSEOTitle"}"#).unwrap();
        assert_eq!(config.assessment().identifier(), "keyphraseInSEOTitle");
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        for json in [
            r#"{"kind": "textLength", "recomendedMinimum": 900}"#,
            r#"{"kind": "textLength", "scores": {"belowMinimun": -20}}"#,
            r#"{"kind": "externalLinks", "urlTitel": "https://yoa.st/x"}"#,
        ] {
            assert!(serde_json::from_str::<AssessmentConfig>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_config_unknown_kind() {
        assert!(serde_json::from_str::<AssessmentConfig>(r#"{"kind": "nope"}"#).is_err());
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.0), "12%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }
}
