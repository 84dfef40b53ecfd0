use serde::{Deserialize, Serialize};

use crate::assessments::{length_unit, Assessment, AssessmentResult, Mark};
use crate::paper::Paper;
use crate::research::{
    find_list, get_paragraph_length, get_subheading_text_lengths, word_count_in_text,
};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SubheadingsTooLongScores {
    pub good_short_text_no_subheadings: i32,
    pub good_subheadings: i32,
    pub ok_subheadings: i32,
    pub bad_subheadings: i32,
    pub bad_long_text_no_subheadings: i32,
}

impl Default for SubheadingsTooLongScores {
    fn default() -> Self {
        Self {
            good_short_text_no_subheadings: 9,
            good_subheadings: 9,
            ok_subheadings: 6,
            bad_subheadings: 3,
            bad_long_text_no_subheadings: 2,
        }
    }
}

/// Checks that no stretch of text between subheadings is too long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SubheadingsTooLongAssessment {
    pub recommended_maximum_length: usize,
    pub slightly_too_many: usize,
    pub far_too_many: usize,
    /// Texts up to this long need no subheadings.
    pub applicable_if_text_longer_than: usize,
    /// Skip short texts entirely instead of praising them.
    pub should_not_appear_in_short_text: bool,
    pub cornerstone_content: bool,
    pub scores: SubheadingsTooLongScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for SubheadingsTooLongAssessment {
    fn default() -> Self {
        Self {
            recommended_maximum_length: 300,
            slightly_too_many: 300,
            far_too_many: 350,
            applicable_if_text_longer_than: 300,
            should_not_appear_in_short_text: false,
            cornerstone_content: false,
            scores: SubheadingsTooLongScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for SubheadingsTooLongAssessment {
    fn identifier(&self) -> &'static str {
        "subheadingsTooLong"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        if !paper.has_text() {
            return false;
        }
        !self.should_not_appear_in_short_text
            || word_count_in_text(paper, researcher) > self.applicable_if_text_longer_than
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let sections = get_subheading_text_lengths(paper, researcher);
        let text_length = word_count_in_text(paper, researcher);
        let unit = length_unit(researcher.language());
        let title = self.title("https://yoa.st/34x", "Subheading distribution");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34y", text);

        if sections.iter().all(|s| s.subheading.is_none()) {
            if text_length > self.applicable_if_text_longer_than {
                return AssessmentResult::new(
                    self.identifier(),
                    self.scores.bad_long_text_no_subheadings,
                    format!(
                        "{title}: You are not using any subheadings, although your text is rather long. {}.",
                        cta("Try and add some subheadings")
                    ),
                );
            }
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good_short_text_no_subheadings,
                format!(
                    "{title}: You are not using any subheadings, but your text is short enough and probably doesn't need them."
                ),
            );
        }

        let too_long: Vec<_> = sections
            .iter()
            .filter(|s| s.count_length > self.recommended_maximum_length)
            .collect();
        let Some(longest) = too_long.iter().map(|s| s.count_length).max() else {
            let text = if self.cornerstone_content {
                format!("{title}: Great job distributing your cornerstone text with subheadings!")
            } else {
                format!("{title}: Great job!")
            };
            return AssessmentResult::new(self.identifier(), self.scores.good_subheadings, text);
        };

        let score = if longest <= self.far_too_many {
            self.scores.ok_subheadings
        } else {
            self.scores.bad_subheadings
        };
        let sections_text = if too_long.len() == 1 {
            "1 section of your text is".to_string()
        } else {
            format!("{} sections of your text are", too_long.len())
        };
        let text = format!(
            "{title}: {sections_text} longer than the recommended number of {unit} ({}) and {} not separated by any subheadings. {}.",
            self.recommended_maximum_length,
            if too_long.len() == 1 { "is" } else { "are" },
            cta("Add subheadings to improve readability")
        );
        let marks = too_long
            .iter()
            .map(|s| Mark::new(s.subheading.clone().unwrap_or_else(|| s.text.clone())));
        AssessmentResult::new(self.identifier(), score, text).with_marks(marks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParagraphTooLongScores {
    pub good: i32,
    pub ok: i32,
    pub bad: i32,
}

impl Default for ParagraphTooLongScores {
    fn default() -> Self {
        Self {
            good: 9,
            ok: 6,
            bad: 3,
        }
    }
}

/// Checks that paragraphs stay short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParagraphTooLongAssessment {
    pub recommended_length: usize,
    pub maximum_recommended_length: usize,
    pub scores: ParagraphTooLongScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for ParagraphTooLongAssessment {
    fn default() -> Self {
        Self {
            recommended_length: 150,
            maximum_recommended_length: 200,
            scores: ParagraphTooLongScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for ParagraphTooLongAssessment {
    fn identifier(&self) -> &'static str {
        "textParagraphTooLong"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let paragraphs = get_paragraph_length(paper, researcher);
        let unit = length_unit(researcher.language());
        let title = self.title("https://yoa.st/35d", "Paragraph length");

        let too_long: Vec<_> = paragraphs
            .into_iter()
            .filter(|p| p.count_length > self.recommended_length)
            .collect();
        let Some(longest) = too_long.iter().map(|p| p.count_length).max() else {
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good,
                format!("{title}: There are no paragraphs that are too long. Great job!"),
            );
        };

        let score = if longest <= self.maximum_recommended_length {
            self.scores.ok
        } else {
            self.scores.bad
        };
        let shorten = self.call_to_action("https://yoa.st/35e", "Shorten your paragraphs");
        let (count, verb) = if too_long.len() == 1 {
            ("1 of the paragraphs".to_string(), "contains")
        } else {
            (format!("{} of the paragraphs", too_long.len()), "contain")
        };
        let text = format!(
            "{title}: {count} {verb} more than the recommended maximum number of {unit} ({}). {shorten}!",
            self.recommended_length
        );
        AssessmentResult::new(self.identifier(), score, text)
            .with_marks(too_long.into_iter().map(|p| Mark::new(p.text)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextPresenceScores {
    pub bad: i32,
}

impl Default for TextPresenceScores {
    fn default() -> Self {
        Self { bad: 3 }
    }
}

/// Flags texts too short to analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextPresenceAssessment {
    pub minimum_length: usize,
    pub scores: TextPresenceScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for TextPresenceAssessment {
    fn default() -> Self {
        Self {
            minimum_length: 50,
            scores: TextPresenceScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for TextPresenceAssessment {
    fn identifier(&self) -> &'static str {
        "textPresence"
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        if word_count_in_text(paper, researcher) >= self.minimum_length {
            return AssessmentResult::empty(self.identifier());
        }
        let title = self.title("https://yoa.st/35h", "Not enough content");
        let add = self.call_to_action("https://yoa.st/35i", "Please add some content");
        AssessmentResult::new(
            self.identifier(),
            self.scores.bad,
            format!("{title}: {add} to enable a good analysis."),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ListsPresenceScores {
    pub good: i32,
    pub bad: i32,
}

impl Default for ListsPresenceScores {
    fn default() -> Self {
        Self { good: 9, bad: 3 }
    }
}

/// Checks that the text has at least one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ListsPresenceAssessment {
    pub scores: ListsPresenceScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for ListsPresenceAssessment {
    fn identifier(&self) -> &'static str {
        "listsPresence"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let title = self.title("https://yoa.st/shopify38", "Lists");
        if find_list(paper, researcher) {
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good,
                format!("{title}: There is at least one list on this page. Great!"),
            );
        }
        let add = self.call_to_action(
            "https://yoa.st/shopify39",
            "Add at least one ordered or unordered list",
        );
        AssessmentResult::new(
            self.identifier(),
            self.scores.bad,
            format!("{title}: No lists appear on this page. {add}!"),
        )
    }
}
