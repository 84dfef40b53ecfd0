use serde::{Deserialize, Serialize};

use crate::assessments::{format_percentage, length_unit, Assessment, AssessmentResult, Mark};
use crate::paper::Paper;
use crate::research::{
    find_keyword_in_first_paragraph, h1s, match_keyword_in_subheadings, word_count_in_text, Heading,
};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IntroductionKeywordScores {
    pub good: i32,
    pub okay: i32,
    pub bad: i32,
}

impl Default for IntroductionKeywordScores {
    fn default() -> Self {
        Self {
            good: 9,
            okay: 6,
            bad: 3,
        }
    }
}

/// Checks that the first paragraph introduces the keyphrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IntroductionKeywordAssessment {
    pub scores: IntroductionKeywordScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for IntroductionKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "introductionKeyword"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_keyword() && paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = find_keyword_in_first_paragraph(paper, researcher);
        let title = self.title("https://yoa.st/33e", "Keyphrase in introduction");
        let cta = |text: &str| self.call_to_action("https://yoa.st/33f", text);

        let (score, text) = if found.found_in_one_sentence {
            (self.scores.good, format!("{title}: Well done!"))
        } else if found.found_in_paragraph {
            (
                self.scores.okay,
                format!(
                    "{title}: Your keyphrase or its synonyms appear in the first paragraph of the copy, but not within one sentence. {}!",
                    cta("Fix that")
                ),
            )
        } else {
            (
                self.scores.bad,
                format!(
                    "{title}: Your keyphrase or its synonyms do not appear in the first paragraph. {}.",
                    cta("Make sure the topic is clear immediately")
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextLengthScores {
    pub recommended_minimum: i32,
    pub slightly_below_minimum: i32,
    pub below_minimum: i32,
    pub far_below_minimum: i32,
    pub very_far_below_minimum: i32,
}

impl Default for TextLengthScores {
    fn default() -> Self {
        Self {
            recommended_minimum: 9,
            slightly_below_minimum: 6,
            below_minimum: 3,
            far_below_minimum: -10,
            very_far_below_minimum: -20,
        }
    }
}

/// Checks the number of words in the text against per-content-type minimums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextLengthAssessment {
    pub recommended_minimum: usize,
    pub slightly_below_minimum: usize,
    pub below_minimum: usize,
    pub very_far_below_minimum: usize,
    pub scores: TextLengthScores,
    pub cornerstone_content: bool,
    /// Assessor type the thresholds were chosen for, such as `taxonomyAssessor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for TextLengthAssessment {
    fn default() -> Self {
        Self {
            recommended_minimum: 300,
            slightly_below_minimum: 250,
            below_minimum: 200,
            very_far_below_minimum: 100,
            scores: TextLengthScores::default(),
            cornerstone_content: false,
            custom_content_type: None,
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for TextLengthAssessment {
    fn identifier(&self) -> &'static str {
        "textLength"
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let words = word_count_in_text(paper, researcher);
        let title = self.title("https://yoa.st/34n", "Text length");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34o", text);
        let unit = length_unit(researcher.language());
        let minimum = if self.cornerstone_content {
            format!("{} {unit} for cornerstone content", self.recommended_minimum)
        } else {
            format!("{} {unit}", self.recommended_minimum)
        };
        let contains = format!("{title}: The text contains {words} {unit}.");

        let (score, text) = if words >= self.recommended_minimum {
            (self.scores.recommended_minimum, format!("{contains} Good job!"))
        } else if words >= self.slightly_below_minimum {
            (
                self.scores.slightly_below_minimum,
                format!(
                    "{contains} This is slightly below the recommended minimum of {minimum}. {}.",
                    cta("Add a bit more copy")
                ),
            )
        } else if words >= self.below_minimum {
            (
                self.scores.below_minimum,
                format!(
                    "{contains} This is below the recommended minimum of {minimum}. {}.",
                    cta("Add more content")
                ),
            )
        } else {
            let score = if words >= self.very_far_below_minimum {
                self.scores.far_below_minimum
            } else {
                self.scores.very_far_below_minimum
            };
            (
                score,
                format!(
                    "{contains} This is far below the recommended minimum of {minimum}. {}.",
                    cta("Add more content")
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SingleH1Scores {
    pub bad: i32,
}

impl Default for SingleH1Scores {
    fn default() -> Self {
        Self { bad: 1 }
    }
}

/// Flags texts with more than one `h1`, or an `h1` that is not the first block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SingleH1Assessment {
    pub scores: SingleH1Scores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for SingleH1Assessment {
    fn identifier(&self) -> &'static str {
        "singleH1"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_text() && !h1s(paper, researcher).is_empty()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let headings = h1s(paper, researcher);
        let title = self.title("https://yoa.st/3a6", "Single title");
        let cta = |text: &str| self.call_to_action("https://yoa.st/3a7", text);

        let text = match headings.as_slice() {
            [] | [Heading { position: 0, .. }] => {
                return AssessmentResult::empty(self.identifier());
            }
            [_] => format!(
                "{title}: H1s should only be used as your main title. Your H1 is not at the beginning of your text. {}!",
                cta("Move it to the top")
            ),
            _ => format!(
                "{title}: H1s should only be used as your main title. Find all H1s in your text that aren't your main title and {}!",
                cta("change them to a lower heading level")
            ),
        };
        AssessmentResult::new(self.identifier(), self.scores.bad, text)
            .with_marks(headings.into_iter().map(|h| Mark::new(h.text)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SubheadingsKeywordScores {
    pub no_matches: i32,
    pub too_few_matches: i32,
    pub good_number_of_matches: i32,
    pub too_many_matches: i32,
}

impl Default for SubheadingsKeywordScores {
    fn default() -> Self {
        Self {
            no_matches: 3,
            too_few_matches: 3,
            good_number_of_matches: 9,
            too_many_matches: 3,
        }
    }
}

/// Checks how many higher-level subheadings reflect the topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SubheadingsKeywordAssessment {
    /// Fractions of the subheadings.
    pub lower_boundary: f64,
    pub upper_boundary: f64,
    pub scores: SubheadingsKeywordScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for SubheadingsKeywordAssessment {
    fn default() -> Self {
        Self {
            lower_boundary: 0.3,
            upper_boundary: 0.75,
            scores: SubheadingsKeywordScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for SubheadingsKeywordAssessment {
    fn identifier(&self) -> &'static str {
        "subheadingsKeyword"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_text()
            && paper.has_keyword()
            && match_keyword_in_subheadings(paper, researcher).count > 0
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = match_keyword_in_subheadings(paper, researcher);
        let title = self.title("https://yoa.st/33m", "Keyphrase in subheading");
        let cta = |text: &str| self.call_to_action("https://yoa.st/33n", text);
        let percent = found.percent_reflecting_topic;

        let (score, text) = if found.count == 1 && found.matches == 1 {
            (
                self.scores.good_number_of_matches,
                format!(
                    "{title}: Your higher-level subheading reflects the topic of your copy. Good job!"
                ),
            )
        } else if found.matches == 0 || percent < self.lower_boundary * 100.0 {
            let score = if found.matches == 0 {
                self.scores.no_matches
            } else {
                self.scores.too_few_matches
            };
            (
                score,
                format!(
                    "{title}: {}.",
                    cta("Use more keyphrases or synonyms in your higher-level subheadings")
                ),
            )
        } else if percent > self.upper_boundary * 100.0 {
            (
                self.scores.too_many_matches,
                format!(
                    "{title}: More than {} of your higher-level subheadings reflect the topic of your copy. That's too much. {}.",
                    format_percentage(self.upper_boundary * 100.0),
                    cta("Don't over-optimize")
                ),
            )
        } else {
            (
                self.scores.good_number_of_matches,
                format!(
                    "{title}: {} of your higher-level subheadings reflect the topic of your copy. Good job!",
                    found.matches
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}
