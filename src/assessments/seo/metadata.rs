use serde::{Deserialize, Serialize};

use crate::assessments::{Assessment, AssessmentResult};
use crate::paper::Paper;
use crate::research::{
    find_keyphrase_in_seo_title, keyword_count_in_slug, meta_description_keyword,
    meta_description_length,
};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GoodBadScores {
    pub good: i32,
    pub bad: i32,
}

impl Default for GoodBadScores {
    fn default() -> Self {
        Self { good: 9, bad: 3 }
    }
}

/// Checks that the meta description mentions the keyphrase, but not too often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MetaDescriptionKeywordAssessment {
    pub recommended_minimum: i64,
    pub recommended_maximum: i64,
    pub scores: GoodBadScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for MetaDescriptionKeywordAssessment {
    fn default() -> Self {
        Self {
            recommended_minimum: 1,
            recommended_maximum: 2,
            scores: GoodBadScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for MetaDescriptionKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "metaDescriptionKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_description()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let count = meta_description_keyword(paper, researcher);
        let title = self.title("https://yoa.st/33k", "Keyphrase in meta description");
        let (score, text) = if count < self.recommended_minimum {
            let fix = self.call_to_action("https://yoa.st/33l", "Fix that");
            (
                self.scores.bad,
                format!(
                    "{title}: The meta description has been specified, but it does not contain the keyphrase. {fix}!"
                ),
            )
        } else if count > self.recommended_maximum {
            let limit = self.call_to_action("https://yoa.st/33l", "Limit that");
            (
                self.scores.bad,
                format!(
                    "{title}: The meta description contains the keyphrase {count} times, which is over the advised maximum of {} times. {limit}!",
                    self.recommended_maximum
                ),
            )
        } else {
            (
                self.scores.good,
                format!("{title}: Keyphrase or synonym appear in the meta description. Well done!"),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MetaDescriptionLengthScores {
    pub no_meta_description: i32,
    pub too_long: i32,
    pub too_short: i32,
    pub correct_length: i32,
}

impl Default for MetaDescriptionLengthScores {
    fn default() -> Self {
        Self {
            no_meta_description: 1,
            too_long: 6,
            too_short: 6,
            correct_length: 9,
        }
    }
}

/// Checks the meta description length, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MetaDescriptionLengthAssessment {
    pub recommended_maximum_length: usize,
    pub maximum_length: usize,
    pub scores: MetaDescriptionLengthScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for MetaDescriptionLengthAssessment {
    fn default() -> Self {
        Self {
            recommended_maximum_length: 120,
            maximum_length: 156,
            scores: MetaDescriptionLengthScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for MetaDescriptionLengthAssessment {
    fn identifier(&self) -> &'static str {
        "metaDescriptionLength"
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let length = meta_description_length(paper, researcher);
        let title = self.title("https://yoa.st/34d", "Meta description length");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34e", text);
        let max = self.maximum_length;

        let (score, text) = if length == 0 {
            (
                self.scores.no_meta_description,
                format!(
                    "{title}: No meta description has been specified. Search engines will display copy from the page instead. {}!",
                    cta("Make sure to write one")
                ),
            )
        } else if length < self.recommended_maximum_length {
            (
                self.scores.too_short,
                format!(
                    "{title}: The meta description is too short (under {} characters). Up to {max} characters are available. {}!",
                    self.recommended_maximum_length,
                    cta("Use the space")
                ),
            )
        } else if length > max {
            (
                self.scores.too_long,
                format!(
                    "{title}: The meta description is over {max} characters. To ensure the entire description will be visible, {}!",
                    cta("you should reduce the length")
                ),
            )
        } else {
            (self.scores.correct_length, format!("{title}: Well done!"))
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyphraseInSeoTitleScores {
    pub good: i32,
    pub okay: i32,
    pub bad: i32,
}

impl Default for KeyphraseInSeoTitleScores {
    fn default() -> Self {
        Self {
            good: 9,
            okay: 6,
            bad: 2,
        }
    }
}

/// Checks that the SEO title starts with the exact keyphrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyphraseInSeoTitleAssessment {
    pub scores: KeyphraseInSeoTitleScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for KeyphraseInSeoTitleAssessment {
    fn identifier(&self) -> &'static str {
        "keyphraseInSEOTitle"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_title()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = find_keyphrase_in_seo_title(paper, researcher);
        let title = self.title("https://yoa.st/33g", "Keyphrase in SEO title");
        let cta = |text: &str| self.call_to_action("https://yoa.st/33h", text);

        let (score, text) = if found.exact_match_found && found.position == Some(0) {
            (
                self.scores.good,
                format!(
                    "{title}: The exact match of the focus keyphrase appears at the beginning of the SEO title. Good job!"
                ),
            )
        } else if found.exact_match_found {
            (
                self.scores.okay,
                format!(
                    "{title}: The exact match of the focus keyphrase appears in the SEO title, but not at the beginning. {}.",
                    cta("Move it to the beginning for the best results")
                ),
            )
        } else if found.exact_match_keyphrase {
            (
                self.scores.bad,
                format!(
                    "{title}: Does not contain the exact match. {}.",
                    cta("Try to write the exact match of your keyphrase in the SEO title and put it at the beginning of the title")
                ),
            )
        } else if found.all_words_found {
            (
                self.scores.okay,
                format!(
                    "{title}: Does not contain the exact match. {}.",
                    cta("Try to write the exact match of your keyphrase in the SEO title and put it at the beginning of the title")
                ),
            )
        } else {
            (
                self.scores.bad,
                format!(
                    "{title}: Not all the words from your keyphrase \"{}\" appear in the SEO title. {}.",
                    paper.keyword.trim(),
                    cta("For the best SEO results write the exact match of your keyphrase in the SEO title, and put the keyphrase at the beginning of the title")
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SlugKeywordScores {
    pub good: i32,
    pub okay: i32,
    pub bad: i32,
}

impl Default for SlugKeywordScores {
    fn default() -> Self {
        Self {
            good: 9,
            okay: 6,
            bad: 3,
        }
    }
}

/// Checks that the slug contains the keyphrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SlugKeywordAssessment {
    pub scores: SlugKeywordScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for SlugKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "slugKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_slug()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let slug = keyword_count_in_slug(paper, researcher);
        let title = self.title("https://yoa.st/33o", "Keyphrase in slug");

        let (score, text) = if slug.percent_word_matches == 100 {
            (self.scores.good, format!("{title}: Great work!"))
        } else if slug.keyphrase_length > 1 && slug.percent_word_matches > 50 {
            (
                self.scores.okay,
                format!(
                    "{title}: More than half of your keyphrase appears in the slug. That's great!"
                ),
            )
        } else {
            let change = self.call_to_action("https://yoa.st/33p", "Change that");
            (
                self.scores.bad,
                format!("{title}: (Part of) your keyphrase does not appear in the slug. {change}!"),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TitleWidthScores {
    pub no_title: i32,
    pub width_too_short: i32,
    pub width_too_long: i32,
    pub width_correct: i32,
}

impl Default for TitleWidthScores {
    fn default() -> Self {
        Self {
            no_title: 1,
            width_too_short: 6,
            width_too_long: 3,
            width_correct: 9,
        }
    }
}

/// Checks the rendered width of the SEO title, in pixels.
///
/// A title whose width the host did not measure is not assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TitleWidthAssessment {
    pub min_width: u32,
    pub max_width: u32,
    /// Treat short titles as fine.
    pub allow_short_title: bool,
    pub scores: TitleWidthScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for TitleWidthAssessment {
    fn default() -> Self {
        Self {
            min_width: 400,
            max_width: 600,
            allow_short_title: false,
            scores: TitleWidthScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for TitleWidthAssessment {
    fn identifier(&self) -> &'static str {
        "titleWidth"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        !paper.has_title() || paper.title_width > 0
    }

    fn get_result(&self, paper: &Paper, _researcher: &Researcher) -> AssessmentResult {
        let title = self.title("https://yoa.st/34h", "SEO title width");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34i", text);
        let width = paper.title_width;

        let (score, text) = if !paper.has_title() {
            (
                self.scores.no_title,
                format!("{title}: {}.", cta("Please create an SEO title")),
            )
        } else if width > self.max_width {
            (
                self.scores.width_too_long,
                format!(
                    "{title}: The SEO title is wider than the viewable limit. {}.",
                    cta("Try to make it shorter")
                ),
            )
        } else if width < self.min_width && !self.allow_short_title {
            (
                self.scores.width_too_short,
                format!(
                    "{title}: The SEO title is too short. {}.",
                    cta("Use the space to add keyphrase variations or create compelling call-to-action copy")
                ),
            )
        } else {
            (self.scores.width_correct, format!("{title}: Good job!"))
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}
