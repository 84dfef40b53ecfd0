use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::assessments::{format_percentage, Assessment, AssessmentResult, Mark};
use crate::paper::Paper;
use crate::research::word_complexity;
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WordComplexityScores {
    pub good: i32,
    pub ok: i32,
}

impl Default for WordComplexityScores {
    fn default() -> Self {
        Self { good: 9, ok: 6 }
    }
}

/// Checks the share of long, infrequent words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WordComplexityAssessment {
    /// Percentage of complex words tolerated.
    pub recommended_maximum: f64,
    pub scores: WordComplexityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for WordComplexityAssessment {
    fn default() -> Self {
        Self {
            recommended_maximum: 10.0,
            scores: WordComplexityScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for WordComplexityAssessment {
    fn identifier(&self) -> &'static str {
        "wordComplexity"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_text() && researcher.has_research("wordComplexity")
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let complexity = word_complexity(paper, researcher);
        let title = self.title("https://yoa.st/4ls", "Word complexity");

        if complexity.percentage < self.recommended_maximum {
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good,
                format!(
                    "{title}: You are not using too many complex words, which makes your text easy to read. Good job!"
                ),
            );
        }
        let familiar = self.call_to_action(
            "https://yoa.st/4lt",
            "Try to use shorter and more familiar words to improve readability",
        );
        let marks: BTreeSet<String> = complexity
            .complex_words
            .into_iter()
            .flat_map(|s| s.complex_words)
            .collect();
        AssessmentResult::new(
            self.identifier(),
            self.scores.ok,
            format!(
                "{title}: {} of the words in your text are considered complex. {familiar}.",
                format_percentage(complexity.percentage)
            ),
        )
        .with_marks(marks.into_iter().map(Mark::new))
    }
}
