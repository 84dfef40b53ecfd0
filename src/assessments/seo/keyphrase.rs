use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::assessments::{format_percentage, Assessment, AssessmentResult, Mark};
use crate::paper::Paper;
use crate::research::{
    function_words_in_keyphrase, keyphrase_count, keyphrase_density, keyphrase_length,
    word_count_in_text,
};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyphraseLengthScores {
    pub very_bad: i32,
    pub bad: i32,
    pub okay: i32,
    pub good: i32,
}

impl Default for KeyphraseLengthScores {
    fn default() -> Self {
        Self {
            very_bad: -999,
            bad: 3,
            okay: 6,
            good: 9,
        }
    }
}

/// Checks that the keyphrase is set and not too long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeyphraseLengthAssessment {
    pub recommended_minimum: usize,
    pub recommended_maximum: usize,
    pub acceptable_maximum: usize,
    /// Word feedback for a related keyphrase rather than the focus keyphrase.
    pub is_related_keyphrase: bool,
    pub scores: KeyphraseLengthScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for KeyphraseLengthAssessment {
    fn default() -> Self {
        Self {
            recommended_minimum: 1,
            recommended_maximum: 4,
            acceptable_maximum: 8,
            is_related_keyphrase: false,
            scores: KeyphraseLengthScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for KeyphraseLengthAssessment {
    fn identifier(&self) -> &'static str {
        "keyphraseLength"
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let length = keyphrase_length(paper, researcher);
        // Without function word filtering every word counts, so allow more.
        let (recommended_maximum, acceptable_maximum) = if length.function_words_available {
            (self.recommended_maximum, self.acceptable_maximum)
        } else {
            (self.recommended_maximum.max(8), self.acceptable_maximum.max(9))
        };
        let title = self.title("https://yoa.st/33i", "Keyphrase length");
        let n = length.keyphrase_length;

        let (score, text) = if n < self.recommended_minimum {
            let set = self.call_to_action("https://yoa.st/33j", "Set a keyphrase");
            let text = if self.is_related_keyphrase {
                format!("{title}: {set} in order to calculate your SEO score.")
            } else {
                format!(
                    "{title}: No focus keyphrase was set for this page. {set} in order to calculate your SEO score."
                )
            };
            (self.scores.very_bad, text)
        } else if n <= recommended_maximum {
            (self.scores.good, format!("{title}: Good job!"))
        } else {
            let shorter = self.call_to_action("https://yoa.st/33j", "Make it shorter");
            if n <= acceptable_maximum {
                (
                    self.scores.okay,
                    format!(
                        "{title}: The keyphrase contains {n} content words. That's more than the recommended maximum of {recommended_maximum} content words. {shorter}!"
                    ),
                )
            } else {
                (
                    self.scores.bad,
                    format!(
                        "{title}: The keyphrase contains {n} content words. That's way more than the recommended maximum of {recommended_maximum} content words. {shorter}!"
                    ),
                )
            }
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeywordDensityScores {
    pub way_over_maximum: i32,
    pub over_maximum: i32,
    pub correct_density: i32,
    pub under_minimum: i32,
}

impl Default for KeywordDensityScores {
    fn default() -> Self {
        Self {
            way_over_maximum: -50,
            over_maximum: -10,
            correct_density: 9,
            under_minimum: 4,
        }
    }
}

/// Checks how often the keyphrase occurs, per hundred words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct KeywordDensityAssessment {
    /// Percentages.
    pub minimum: f64,
    pub maximum: f64,
    pub over_maximum: f64,
    /// Texts shorter than this are not assessed.
    pub minimum_word_count: usize,
    pub scores: KeywordDensityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for KeywordDensityAssessment {
    fn default() -> Self {
        Self {
            minimum: 0.5,
            maximum: 3.0,
            over_maximum: 3.5,
            minimum_word_count: 100,
            scores: KeywordDensityScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for KeywordDensityAssessment {
    fn identifier(&self) -> &'static str {
        "keywordDensity"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_text()
            && paper.has_keyword()
            && word_count_in_text(paper, researcher) >= self.minimum_word_count
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let density = keyphrase_density(paper, researcher);
        let count = keyphrase_count(paper, researcher);
        let title = self.title("https://yoa.st/33v", "Keyphrase density");
        let times = if count.count == 1 { "time" } else { "times" };
        let found = format!("The focus keyphrase was found {} {times}", count.count);
        let shown = format_percentage(density);

        let (score, text) = if density < self.minimum {
            let focus = self.call_to_action("https://yoa.st/33w", "Focus on your keyphrase");
            (
                self.scores.under_minimum,
                format!(
                    "{title}: {found}, a density of {shown}. That's less than the recommended minimum of {}. {focus}!",
                    format_percentage(self.minimum)
                ),
            )
        } else if density <= self.maximum {
            (
                self.scores.correct_density,
                format!("{title}: {found}, a density of {shown}. This is great!"),
            )
        } else {
            let dont = self.call_to_action("https://yoa.st/33w", "Don't overoptimize");
            let score = if density <= self.over_maximum {
                self.scores.over_maximum
            } else {
                self.scores.way_over_maximum
            };
            (
                score,
                format!(
                    "{title}: {found}, a density of {shown}. That's more than the recommended maximum of {}. {dont}!",
                    format_percentage(self.maximum)
                ),
            )
        };

        let marks: BTreeSet<String> = count.matches.into_iter().collect();
        AssessmentResult::new(self.identifier(), score, text)
            .with_marks(marks.into_iter().map(Mark::new))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FunctionWordsInKeyphraseScores {
    pub only_function_words: i32,
}

impl Default for FunctionWordsInKeyphraseScores {
    fn default() -> Self {
        Self {
            only_function_words: 0,
        }
    }
}

/// Flags keyphrases made of function words only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FunctionWordsInKeyphraseAssessment {
    pub scores: FunctionWordsInKeyphraseScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for FunctionWordsInKeyphraseAssessment {
    fn identifier(&self) -> &'static str {
        "functionWordsInKeyphrase"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_keyword() && researcher.language().has_function_words()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        if !function_words_in_keyphrase(paper, researcher) {
            return AssessmentResult::empty(self.identifier());
        }
        let title = self.title(
            "https://yoa.st/functionwordskeyphrase-1",
            "Function words in keyphrase",
        );
        let learn = self.call_to_action(
            "https://yoa.st/functionwordskeyphrase-2",
            "Learn more about what makes a good keyphrase",
        );
        AssessmentResult::new(
            self.identifier(),
            self.scores.only_function_words,
            format!(
                "{title}: Your keyphrase \"{}\" contains function words only. {learn}.",
                paper.keyword.trim()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(assessment: &dyn Assessment, paper: &Paper) -> AssessmentResult {
        assessment.get_result(paper, &Researcher::for_paper(paper))
    }

    #[test]
    fn test_keyphrase_length_scores() {
        let assessment = KeyphraseLengthAssessment::default();
        let score = |kw: &str| assess(&assessment, &Paper::new("").with_keyword(kw)).score;
        assert_eq!(score(""), Some(-999));
        assert_eq!(score("cat food"), Some(9));
        assert_eq!(score("best dry cat food for old cats"), Some(6));
        assert_eq!(
            score("best cheap dry cat food brands for old sick cats in winter"),
            Some(3)
        );
    }

    #[test]
    fn test_keyphrase_length_text() {
        let result = assess(&KeyphraseLengthAssessment::default(), &Paper::new(""));
        assert!(result.text.starts_with(
            "<a href='https://yoa.st/33i' target='_blank'>Keyphrase length</a>: No focus keyphrase"
        ));
    }

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    #[test]
    fn test_keyword_density_not_applicable_for_short_text() {
        let paper = Paper::new("<p>cat food</p>").with_keyword("cat food");
        let researcher = Researcher::for_paper(&paper);
        assert!(!KeywordDensityAssessment::default().is_applicable(&paper, &researcher));
    }

    #[test]
    fn test_keyword_density_scores() {
        let assessment = KeywordDensityAssessment::default();
        let paper = Paper::new(format!("<p>cat. {}</p>", filler(99))).with_keyword("cat");
        let result = assess(&assessment, &paper);
        assert_eq!(result.score, Some(9));
        assert_eq!(result.marks, vec![Mark::new("cat")]);

        let paper = Paper::new(format!("<p>{}</p>", filler(200))).with_keyword("cat");
        assert_eq!(assess(&assessment, &paper).score, Some(4));

        let text = format!("<p>{} {}</p>", "cat. ".repeat(10), filler(90));
        let paper = Paper::new(text).with_keyword("cat");
        assert_eq!(assess(&assessment, &paper).score, Some(-50));
    }

    #[test]
    fn test_function_words_only() {
        let assessment = FunctionWordsInKeyphraseAssessment::default();
        let result = assess(&assessment, &Paper::new("").with_keyword("how to"));
        assert_eq!(result.score, Some(0));
        assert!(result.text.contains("\"how to\" contains function words only"));
        assert!(assess(&assessment, &Paper::new("").with_keyword("cats")).is_empty());
    }
}
