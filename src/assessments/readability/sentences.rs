use serde::{Deserialize, Serialize};

use crate::assessments::{
    format_percentage, length_unit, percentage_of, Assessment, AssessmentResult, Mark,
};
use crate::paper::Paper;
use crate::research::{
    count_sentences_from_text, find_transition_words, get_passive_voice_result,
    get_sentence_beginnings, word_count_in_text,
};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThreeStepScores {
    pub good: i32,
    pub ok: i32,
    pub bad: i32,
}

impl Default for ThreeStepScores {
    fn default() -> Self {
        Self {
            good: 9,
            ok: 6,
            bad: 3,
        }
    }
}

/// Checks the share of sentences that are too long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SentenceLengthInTextAssessment {
    /// Maximum sentence length; the language's own limit when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_length: Option<usize>,
    /// Percentages of long sentences.
    pub slightly_too_many: f64,
    pub far_too_many: f64,
    pub scores: ThreeStepScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for SentenceLengthInTextAssessment {
    fn default() -> Self {
        Self {
            recommended_length: None,
            slightly_too_many: 25.0,
            far_too_many: 30.0,
            scores: ThreeStepScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for SentenceLengthInTextAssessment {
    fn identifier(&self) -> &'static str {
        "textSentenceLength"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let language = researcher.language();
        let limit = self.recommended_length.unwrap_or(language.sentence_length_limit);
        let sentences = count_sentences_from_text(paper, researcher);
        let total = sentences.len();
        let long: Vec<_> = sentences
            .into_iter()
            .filter(|s| s.sentence_length > limit)
            .collect();
        let percentage = percentage_of(long.len(), total);
        let title = self.title("https://yoa.st/34v", "Sentence length");

        if percentage <= self.slightly_too_many {
            let text = format!("{title}: Great!");
            return AssessmentResult::new(self.identifier(), self.scores.good, text);
        }
        let score = if percentage <= self.far_too_many {
            self.scores.ok
        } else {
            self.scores.bad
        };
        let shorten = self.call_to_action("https://yoa.st/34w", "Try to shorten the sentences");
        let text = format!(
            "{title}: {} of the sentences contain more than {limit} {}, which is more than the recommended maximum of {}. {shorten}.",
            format_percentage(percentage),
            length_unit(language),
            format_percentage(self.slightly_too_many)
        );
        AssessmentResult::new(self.identifier(), score, text)
            .with_marks(long.into_iter().map(|s| Mark::new(s.sentence)))
    }
}

/// Checks that enough sentences use transition words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TransitionWordsAssessment {
    /// Texts shorter than this are not assessed.
    pub minimum_text_length: usize,
    /// Percentages of sentences with transition words.
    pub recommended_minimum: f64,
    pub slightly_below_minimum: f64,
    pub scores: ThreeStepScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for TransitionWordsAssessment {
    fn default() -> Self {
        Self {
            minimum_text_length: 200,
            recommended_minimum: 30.0,
            slightly_below_minimum: 20.0,
            scores: ThreeStepScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for TransitionWordsAssessment {
    fn identifier(&self) -> &'static str {
        "textTransitionWords"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        researcher.has_research("findTransitionWords")
            && word_count_in_text(paper, researcher) >= self.minimum_text_length
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = find_transition_words(paper, researcher);
        let percentage = percentage_of(found.transition_word_sentences, found.total_sentences);
        let title = self.title("https://yoa.st/34z", "Transition words");

        if percentage >= self.recommended_minimum {
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good,
                format!("{title}: Well done!"),
            );
        }
        let score = if percentage < self.slightly_below_minimum {
            self.scores.bad
        } else {
            self.scores.ok
        };
        let more = self.call_to_action("https://yoa.st/35a", "Use more of them");
        let text = if found.transition_word_sentences == 0 {
            format!("{title}: None of the sentences contain transition words. {more}.")
        } else {
            format!(
                "{title}: Only {} of the sentences contain transition words, which is not enough. {more}.",
                format_percentage(percentage)
            )
        };
        AssessmentResult::new(self.identifier(), score, text).with_marks(
            found
                .sentence_results
                .into_iter()
                .map(|s| Mark::new(s.sentence)),
        )
    }
}

/// Checks the share of sentences in the passive voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PassiveVoiceAssessment {
    /// Percentages of passive sentences.
    pub recommended_maximum: f64,
    pub acceptable_maximum: f64,
    pub scores: ThreeStepScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for PassiveVoiceAssessment {
    fn default() -> Self {
        Self {
            recommended_maximum: 10.0,
            acceptable_maximum: 15.0,
            scores: ThreeStepScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for PassiveVoiceAssessment {
    fn identifier(&self) -> &'static str {
        "passiveVoice"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_text() && researcher.has_research("getPassiveVoiceResult")
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let passive = get_passive_voice_result(paper, researcher);
        let percentage = percentage_of(passive.passives.len(), passive.total);
        let title = self.title("https://yoa.st/34t", "Passive voice");

        if percentage <= self.recommended_maximum {
            return AssessmentResult::new(
                self.identifier(),
                self.scores.good,
                format!("{title}: You are not using too much passive voice. That's great!"),
            );
        }
        let score = if percentage <= self.acceptable_maximum {
            self.scores.ok
        } else {
            self.scores.bad
        };
        let active =
            self.call_to_action("https://yoa.st/34u", "Try to use their active counterparts");
        let text = format!(
            "{title}: {} of the sentences contain passive voice, which is more than the recommended maximum of {}. {active}.",
            format_percentage(percentage),
            format_percentage(self.recommended_maximum)
        );
        AssessmentResult::new(self.identifier(), score, text)
            .with_marks(passive.passives.into_iter().map(Mark::new))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SentenceBeginningsScores {
    pub good: i32,
    pub bad: i32,
}

impl Default for SentenceBeginningsScores {
    fn default() -> Self {
        Self { good: 9, bad: 3 }
    }
}

/// Flags runs of consecutive sentences that start with the same word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SentenceBeginningsAssessment {
    pub maximum_consecutive: usize,
    pub scores: SentenceBeginningsScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for SentenceBeginningsAssessment {
    fn default() -> Self {
        Self {
            maximum_consecutive: 2,
            scores: SentenceBeginningsScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for SentenceBeginningsAssessment {
    fn identifier(&self) -> &'static str {
        "sentenceBeginnings"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let repeated: Vec<_> = get_sentence_beginnings(paper, researcher)
            .into_iter()
            .filter(|run| run.count > self.maximum_consecutive)
            .collect();
        let title = self.title("https://yoa.st/35f", "Consecutive sentences");

        let text = match repeated.as_slice() {
            [] => {
                return AssessmentResult::new(
                    self.identifier(),
                    self.scores.good,
                    format!("{title}: There is enough variety in your sentences. That's great!"),
                )
            }
            [run] => format!(
                "{title}: The text contains {} consecutive sentences starting with the same word.",
                run.count
            ),
            runs => format!(
                "{title}: The text contains {} instances where {} or more consecutive sentences start with the same word.",
                runs.len(),
                self.maximum_consecutive + 1
            ),
        };
        let mix = self.call_to_action("https://yoa.st/35g", "Try to mix things up");
        AssessmentResult::new(self.identifier(), self.scores.bad, format!("{text} {mix}!"))
            .with_marks(repeated.into_iter().flat_map(|run| run.sentences).map(Mark::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(assessment: &dyn Assessment, paper: &Paper) -> AssessmentResult {
        assessment.get_result(paper, &Researcher::for_paper(paper))
    }

    fn sentence(words: usize) -> String {
        format!("{}.", vec!["word"; words].join(" "))
    }

    #[test]
    fn test_sentence_length() {
        let assessment = SentenceLengthInTextAssessment::default();
        let text = |long: usize, short: usize| {
            let mut sentences = vec![sentence(25); long];
            sentences.extend(vec![sentence(5); short]);
            Paper::new(format!("<p>{}</p>", sentences.join(" ")))
        };
        assert_eq!(result(&assessment, &text(1, 9)).score, Some(9));
        let ok = result(&assessment, &text(3, 7));
        assert_eq!(ok.score, Some(6));
        assert_eq!(ok.marks.len(), 3);
        assert!(ok.text.contains("30% of the sentences contain more than 20 words"));
        assert_eq!(result(&assessment, &text(5, 5)).score, Some(3));
    }

    #[test]
    fn test_sentence_length_custom_limit() {
        let assessment = SentenceLengthInTextAssessment {
            recommended_length: Some(30),
            ..Default::default()
        };
        let paper = Paper::new(format!("<p>{}</p>", sentence(25)));
        assert_eq!(result(&assessment, &paper).score, Some(9));
    }

    #[test]
    fn test_transition_words() {
        let assessment = TransitionWordsAssessment::default();
        let filler = vec![sentence(10); 20].join(" ");
        let paper = Paper::new(format!("<p>{filler}</p>"));
        assert!(assessment.is_applicable(&paper, &Researcher::for_paper(&paper)));
        let none = result(&assessment, &paper);
        assert_eq!(none.score, Some(3));
        assert!(none.text.contains("None of the sentences contain transition words"));

        let mixed = format!("{} {}", vec!["However, it works."; 10].join(" "), filler);
        let paper = Paper::new(format!("<p>{mixed}</p>"));
        assert_eq!(result(&assessment, &paper).score, Some(9));
    }

    #[test]
    fn test_transition_words_short_text() {
        let paper = Paper::new("<p>However, this is short.</p>");
        let researcher = Researcher::for_paper(&paper);
        assert!(!TransitionWordsAssessment::default().is_applicable(&paper, &researcher));
    }

    #[test]
    fn test_passive_voice() {
        let assessment = PassiveVoiceAssessment::default();
        let active = vec!["The cat eats food."; 9].join(" ");
        let paper = Paper::new(format!("<p>The food was eaten. {active}</p>"));
        assert_eq!(result(&assessment, &paper).score, Some(9));

        let paper = Paper::new("<p>The food was eaten. The cat eats food.</p>");
        let passive = result(&assessment, &paper);
        assert_eq!(passive.score, Some(3));
        assert_eq!(passive.marks, vec![Mark::new("The food was eaten.")]);
    }

    #[test]
    fn test_sentence_beginnings() {
        let assessment = SentenceBeginningsAssessment::default();
        let paper = Paper::new("<p>Cats are nice. Cats are soft. Dogs bark.</p>");
        assert_eq!(result(&assessment, &paper).score, Some(9));

        let paper = Paper::new("<p>Cats are nice. Cats are soft. Cats purr. Dogs bark.</p>");
        let repeated = result(&assessment, &paper);
        assert_eq!(repeated.score, Some(3));
        assert!(repeated.text.contains("3 consecutive sentences"));
        assert_eq!(repeated.marks.len(), 3);
    }
}
