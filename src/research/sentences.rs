use serde::Serialize;

use crate::paper::Paper;
use crate::research::structure::text_length;
use crate::researcher::Researcher;
use crate::sanitize::normalize_quotes;

/// Words that may stand between a passive auxiliary and its participle.
const PASSIVE_INTERRUPTERS: &[&str] = &[
    "not", "never", "also", "just", "still", "already", "always", "often", "being", "been",
    "all", "both", "then", "even", "only",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceLength {
    pub sentence: String,
    pub sentence_length: usize,
}

/// Length of every sentence in the text, in document order.
pub fn count_sentences_from_text(paper: &Paper, researcher: &Researcher) -> Vec<SentenceLength> {
    let language = researcher.language();
    researcher
        .tree(paper)
        .sentences()
        .into_iter()
        .map(|s| SentenceLength {
            sentence: s.text.trim().to_string(),
            sentence_length: text_length(&s.text, language),
        })
        .filter(|s| s.sentence_length > 0)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSentence {
    pub sentence: String,
    pub transition_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionWordsResult {
    pub total_sentences: usize,
    pub transition_word_sentences: usize,
    pub sentence_results: Vec<TransitionSentence>,
}

/// Find the sentences that contain a transition word or phrase.
pub fn find_transition_words(paper: &Paper, researcher: &Researcher) -> TransitionWordsResult {
    let language = researcher.language();
    let matcher = researcher.matcher();
    let tree = researcher.tree(paper);
    let sentences: Vec<_> = tree
        .sentences()
        .into_iter()
        .filter(|s| text_length(&s.text, language) > 0)
        .collect();

    let sentence_results: Vec<TransitionSentence> = sentences
        .iter()
        .filter_map(|s| {
            let found: Vec<String> = language
                .transition_words
                .iter()
                .filter(|word| !matcher.match_word(&s.text, word).is_empty())
                .cloned()
                .collect();
            (!found.is_empty()).then(|| TransitionSentence {
                sentence: s.text.trim().to_string(),
                transition_words: found,
            })
        })
        .collect();

    TransitionWordsResult {
        total_sentences: sentences.len(),
        transition_word_sentences: sentence_results.len(),
        sentence_results,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassiveVoiceResult {
    /// Number of sentences.
    pub total: usize,
    /// The passive sentences.
    pub passives: Vec<String>,
}

/// Detect passive sentences: an auxiliary, optionally followed by adverbs
/// and negations, then a past participle.
pub fn get_passive_voice_result(paper: &Paper, researcher: &Researcher) -> PassiveVoiceResult {
    let language = researcher.language();
    let tree = researcher.tree(paper);
    let sentences: Vec<_> = tree
        .sentences()
        .into_iter()
        .filter(|s| s.word_count() > 0)
        .collect();
    let mut result = PassiveVoiceResult {
        total: sentences.len(),
        ..Default::default()
    };
    let Some(passive) = &language.passive_voice else {
        return result;
    };

    for sentence in sentences {
        let words: Vec<String> = sentence
            .words()
            .map(|w| normalize_quotes(&w.to_lowercase()))
            .collect();
        let is_passive = words.iter().enumerate().any(|(i, word)| {
            if !passive.auxiliaries.contains(word) {
                return false;
            }
            words[i + 1..]
                .iter()
                .find(|w| !(PASSIVE_INTERRUPTERS.contains(&w.as_str()) || w.ends_with("ly")))
                .is_some_and(|w| passive.is_participle(w))
        });
        if is_passive {
            result.passives.push(sentence.text.trim().to_string());
        }
    }
    result
}

/// A run of consecutive sentences starting with the same word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceBeginning {
    pub word: String,
    pub count: usize,
    pub sentences: Vec<String>,
}

/// Group consecutive sentences by their first word. Articles and other
/// first-word exceptions are combined with the word that follows them.
pub fn get_sentence_beginnings(paper: &Paper, researcher: &Researcher) -> Vec<SentenceBeginning> {
    let language = researcher.language();
    let tree = researcher.tree(paper);
    let mut runs: Vec<SentenceBeginning> = Vec::new();

    for sentence in tree.sentences() {
        let mut words = sentence.words().map(|w| normalize_quotes(&w.to_lowercase()));
        let Some(first) = words.next() else {
            continue;
        };
        let beginning = match words.next() {
            Some(second) if language.first_word_exceptions.contains(&first) => {
                format!("{first} {second}")
            }
            _ => first,
        };
        let text = sentence.text.trim().to_string();
        match runs.last_mut() {
            Some(run) if run.word == beginning => {
                run.count += 1;
                run.sentences.push(text);
            }
            _ => runs.push(SentenceBeginning {
                word: beginning,
                count: 1,
                sentences: vec![text],
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn researcher(paper: &Paper) -> Researcher {
        Researcher::for_paper(paper)
    }

    #[test]
    fn test_sentence_lengths() {
        let paper = Paper::new("<p>One two three. Four five!</p><h2>Six</h2>");
        let lengths = count_sentences_from_text(&paper, &researcher(&paper));
        let counts: Vec<usize> = lengths.iter().map(|s| s.sentence_length).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(lengths[1].sentence, "Four five!");
    }

    #[test]
    fn test_transition_words() {
        let paper = Paper::new(
            "<p>I like cats. However, dogs are fine. For example, a beagle. Fish swim.</p>",
        );
        let result = find_transition_words(&paper, &researcher(&paper));
        assert_eq!(result.total_sentences, 4);
        assert_eq!(result.transition_word_sentences, 2);
        assert_eq!(result.sentence_results[0].sentence, "However, dogs are fine.");
        assert!(result.sentence_results[1]
            .transition_words
            .contains(&"for example".to_string()));
    }

    #[test]
    fn test_transition_words_unknown_language() {
        let paper = Paper::new("<p>However, dogs are fine.</p>").with_locale("xx_XX");
        let result = find_transition_words(&paper, &researcher(&paper));
        assert_eq!(result.total_sentences, 1);
        assert_eq!(result.transition_word_sentences, 0);
    }

    #[test]
    fn test_passive_voice() {
        let paper = Paper::new(
            "<p>The cake was eaten. The cake is not really liked. She baked a cake. \
             The house is being painted. He is happy.</p>",
        );
        let result = get_passive_voice_result(&paper, &researcher(&paper));
        assert_eq!(result.total, 5);
        assert_eq!(
            result.passives,
            vec![
                "The cake was eaten.",
                "The cake is not really liked.",
                "The house is being painted.",
            ]
        );
    }

    #[test]
    fn test_passive_voice_without_language_data() {
        let paper = Paper::new("<p>De taart werd gegeten.</p>").with_locale("nl_NL");
        let result = get_passive_voice_result(&paper, &researcher(&paper));
        assert_eq!(result.total, 1);
        assert!(result.passives.is_empty());
    }

    #[test]
    fn test_sentence_beginnings() {
        let paper = Paper::new(
            "<p>Cats purr. Cats sleep. The dog barks. The dog runs. The cat hides. Cats eat.</p>",
        );
        let runs = get_sentence_beginnings(&paper, &researcher(&paper));
        let summary: Vec<(&str, usize)> = runs.iter().map(|r| (r.word.as_str(), r.count)).collect();
        assert_eq!(
            summary,
            vec![("cats", 2), ("the dog", 2), ("the cat", 1), ("cats", 1)]
        );
        assert_eq!(runs[1].sentences, vec!["The dog barks.", "The dog runs."]);
    }
}
